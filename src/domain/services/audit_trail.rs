// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::audit::{AuditEvent, AuditEventInput};
use crate::domain::models::ticket::DomainError;
use crate::domain::repositories::audit_repository::AuditRepository;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

/// 计算一条审计事件的链哈希
///
/// hash_current = sha256(json{previous_hash, input})，hex编码。
pub fn compute_hash(previous_hash: Option<&str>, input: &AuditEventInput) -> String {
    let payload = serde_json::json!({
        "previous_hash": previous_hash,
        "input": input,
    });
    let mut hasher = Sha256::new();
    hasher.update(payload.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// 校验一段按插入顺序排列的事件链
///
/// 逐条重算 hash(prev + payload) 并与存储值比对，同时检查
/// 相邻两条的链接关系。返回第一处断裂的下标，完整链返回 None。
pub fn verify_events(events: &[AuditEvent]) -> Option<usize> {
    let mut expected_prev: Option<String> = None;

    for (index, event) in events.iter().enumerate() {
        if index > 0 && event.hash_prev != expected_prev {
            return Some(index);
        }

        let input = AuditEventInput {
            event_type: event.event_type.clone(),
            severity: event.severity,
            actor_id: event.actor_id,
            ticket_id: event.ticket_id,
            resource_type: event.resource_type.clone(),
            resource_id: event.resource_id.clone(),
            action: event.action.clone(),
            metadata: event.metadata.clone(),
        };
        let recomputed = compute_hash(event.hash_prev.as_deref(), &input);
        if recomputed != event.hash_current {
            return Some(index);
        }

        expected_prev = Some(event.hash_current.clone());
    }

    None
}

/// 审计日志服务
///
/// 追加式哈希链：读链尾哈希，计算新哈希，插入新行。
/// 链尾读取与插入之间没有锁，追加方必须是单写者；多进程部署
/// 需要数据库级的串行化（见 DESIGN.md）。
pub struct AuditTrail {
    audit_repo: Arc<dyn AuditRepository>,
}

impl AuditTrail {
    /// 创建新的审计日志服务实例
    pub fn new(audit_repo: Arc<dyn AuditRepository>) -> Self {
        Self { audit_repo }
    }

    /// 追加一条审计事件
    pub async fn append(&self, input: AuditEventInput) -> Result<AuditEvent, DomainError> {
        let previous_hash = self.audit_repo.latest_hash().await?;
        let hash_current = compute_hash(previous_hash.as_deref(), &input);

        let event = AuditEvent {
            id: Uuid::new_v4(),
            event_type: input.event_type,
            severity: input.severity,
            actor_id: input.actor_id,
            ticket_id: input.ticket_id,
            resource_type: input.resource_type,
            resource_id: input.resource_id,
            action: input.action,
            metadata: input.metadata,
            hash_prev: previous_hash,
            hash_current,
            created_at: Utc::now().into(),
        };

        self.audit_repo.insert(&event).await?;
        Ok(event)
    }

    /// 校验整条链的完整性
    ///
    /// # 返回值
    ///
    /// * `Ok(None)` - 链完整
    /// * `Ok(Some(index))` - 第一处断裂的下标
    pub async fn verify_chain(&self) -> Result<Option<usize>, DomainError> {
        let events = self.audit_repo.list_ordered().await?;
        Ok(verify_events(&events))
    }
}

#[cfg(test)]
#[path = "audit_trail_test.rs"]
mod tests;
