// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::NotificationRequest;
use crate::domain::repositories::notification_repository::NotificationRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// 队列错误类型
#[derive(Error, Debug)]
pub enum QueueError {
    /// 仓库错误
    #[error("Repository error: {0}")]
    Repository(#[from] crate::domain::repositories::ticket_repository::RepositoryError),

    /// 入队失败
    #[error("Enqueue failed: {0}")]
    Enqueue(String),
}

/// 队列消息
///
/// 投递给队列后端的通知负载，消费端按 idempotency_key 去重。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueMessage {
    /// 目标队列名
    pub queue: String,
    /// 消息名
    pub name: String,
    /// 消息负载
    pub payload: serde_json::Value,
    /// 幂等键
    pub idempotency_key: String,
    /// 投递延迟（毫秒）
    pub delay_ms: u64,
}

/// 队列适配器特质
///
/// 抽象出实际的队列后端，核心只关心至少一次投递。
#[async_trait]
pub trait QueueAdapter: Send + Sync {
    /// 入队一条消息
    async fn enqueue(&self, message: QueueMessage) -> Result<(), QueueError>;
}

/// 日志队列适配器
///
/// 把消息写入结构化日志，用于本地运行与测试。
/// 生产部署替换为实际的消息队列后端。
#[derive(Debug, Default)]
pub struct LoggingQueueAdapter;

#[async_trait]
impl QueueAdapter for LoggingQueueAdapter {
    async fn enqueue(&self, message: QueueMessage) -> Result<(), QueueError> {
        info!(
            queue = %message.queue,
            name = %message.name,
            idempotency_key = %message.idempotency_key,
            "Notification enqueued"
        );
        Ok(())
    }
}

/// 通知编排器
///
/// 先落库（幂等键去重），再入队。重复请求静默跳过，
/// 不打断调用方的主流程。
pub struct NotificationOrchestrator {
    notification_repo: Arc<dyn NotificationRepository>,
    queue: Arc<dyn QueueAdapter>,
}

impl NotificationOrchestrator {
    /// 创建新的通知编排器实例
    pub fn new(
        notification_repo: Arc<dyn NotificationRepository>,
        queue: Arc<dyn QueueAdapter>,
    ) -> Self {
        Self {
            notification_repo,
            queue,
        }
    }

    /// 落库并入队一条通知
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 通知已入队
    /// * `Ok(false)` - 幂等键重复，跳过
    pub async fn queue_notification(
        &self,
        request: NotificationRequest,
    ) -> Result<bool, QueueError> {
        let inserted = self.notification_repo.insert(&request).await?;
        if !inserted {
            debug!(
                idempotency_key = %request.idempotency_key,
                "Duplicate notification skipped"
            );
            return Ok(false);
        }

        self.queue
            .enqueue(QueueMessage {
                queue: "notifications".to_string(),
                name: request.template_key.clone(),
                payload: serde_json::json!({
                    "ticket_id": request.ticket_id,
                    "recipient_user_id": request.recipient_user_id,
                    "channel": request.channel,
                    "template_key": request.template_key,
                    "payload": request.payload,
                }),
                idempotency_key: request.idempotency_key,
                delay_ms: 0,
            })
            .await?;

        Ok(true)
    }
}

#[cfg(test)]
#[path = "notification_queue_test.rs"]
mod tests;
