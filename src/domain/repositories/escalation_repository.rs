// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::escalation::EscalationEvent;
use crate::domain::repositories::ticket_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 升级历史仓库特质
///
/// 升级历史只追加，插入后不再修改。
#[async_trait]
pub trait EscalationRepository: Send + Sync {
    /// 追加一条升级事件
    async fn insert(&self, event: &EscalationEvent) -> Result<EscalationEvent, RepositoryError>;

    /// 按时间顺序列出某工单的升级历史
    async fn list_by_ticket(
        &self,
        ticket_id: Uuid,
    ) -> Result<Vec<EscalationEvent>, RepositoryError>;
}
