// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::audit::AuditEvent;
use crate::domain::repositories::ticket_repository::RepositoryError;
use async_trait::async_trait;

/// 审计日志仓库特质
///
/// 只支持追加与读取：获取链尾哈希、插入新行、按插入顺序读取。
/// 不提供任何更新或删除接口。
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// 获取最近一条事件的哈希（链尾），空链返回 None
    async fn latest_hash(&self) -> Result<Option<String>, RepositoryError>;

    /// 追加一条审计事件
    async fn insert(&self, event: &AuditEvent) -> Result<(), RepositoryError>;

    /// 按插入顺序列出全部事件（用于链校验）
    async fn list_ordered(&self) -> Result<Vec<AuditEvent>, RepositoryError>;
}
