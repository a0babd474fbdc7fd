// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::NotificationRequest;
use crate::domain::repositories::ticket_repository::RepositoryError;
use async_trait::async_trait;

/// 通知仓库特质
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// 插入通知记录
    ///
    /// 幂等键已存在时视为重复请求，返回 false 且不报错。
    async fn insert(&self, request: &NotificationRequest) -> Result<bool, RepositoryError>;
}
