// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::NotificationRequest;
use crate::domain::repositories::notification_repository::NotificationRepository;
use crate::domain::repositories::ticket_repository::RepositoryError;
use crate::infrastructure::database::entities::notification as notification_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

/// 通知仓库实现
///
/// 幂等键上的唯一约束是去重的权威来源：唯一键冲突翻译为
/// "重复请求"而不是错误。
#[derive(Clone)]
pub struct NotificationRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl NotificationRepositoryImpl {
    /// 创建新的通知仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn insert(&self, request: &NotificationRequest) -> Result<bool, RepositoryError> {
        let model = notification_entity::ActiveModel {
            id: Set(Uuid::new_v4()),
            ticket_id: Set(request.ticket_id),
            recipient_user_id: Set(request.recipient_user_id),
            channel: Set(request.channel.to_string()),
            template_key: Set(request.template_key.clone()),
            payload: Set(request.payload.clone()),
            idempotency_key: Set(request.idempotency_key.clone()),
            created_at: Set(Utc::now().into()),
        };

        match model.insert(self.db.as_ref()).await {
            Ok(_) => Ok(true),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Ok(false),
                _ => Err(RepositoryError::Database(e)),
            },
        }
    }
}
