// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::audit::AuditEvent;
use crate::domain::repositories::audit_repository::AuditRepository;
use crate::domain::repositories::ticket_repository::RepositoryError;
use crate::infrastructure::database::entities::audit_log_event as audit_entity;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use std::sync::Arc;

/// 审计日志仓库实现
///
/// 追加专用：没有更新或删除路径。链尾按 created_at 最大行取，
/// 追加方是单写者（见 AuditTrail）。
#[derive(Clone)]
pub struct AuditRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl AuditRepositoryImpl {
    /// 创建新的审计日志仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<audit_entity::Model> for AuditEvent {
    fn from(model: audit_entity::Model) -> Self {
        Self {
            id: model.id,
            event_type: model.event_type,
            severity: model.severity.parse().unwrap_or_default(),
            actor_id: model.actor_id,
            ticket_id: model.ticket_id,
            resource_type: model.resource_type,
            resource_id: model.resource_id,
            action: model.action,
            metadata: model.metadata,
            hash_prev: model.hash_prev,
            hash_current: model.hash_current,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl AuditRepository for AuditRepositoryImpl {
    async fn latest_hash(&self) -> Result<Option<String>, RepositoryError> {
        let hash: Option<String> = audit_entity::Entity::find()
            .select_only()
            .column(audit_entity::Column::HashCurrent)
            .order_by_desc(audit_entity::Column::CreatedAt)
            .into_tuple()
            .one(self.db.as_ref())
            .await?;

        Ok(hash)
    }

    async fn insert(&self, event: &AuditEvent) -> Result<(), RepositoryError> {
        let model = audit_entity::ActiveModel {
            id: Set(event.id),
            event_type: Set(event.event_type.clone()),
            severity: Set(event.severity.to_string()),
            actor_id: Set(event.actor_id),
            ticket_id: Set(event.ticket_id),
            resource_type: Set(event.resource_type.clone()),
            resource_id: Set(event.resource_id.clone()),
            action: Set(event.action.clone()),
            metadata: Set(event.metadata.clone()),
            hash_prev: Set(event.hash_prev.clone()),
            hash_current: Set(event.hash_current.clone()),
            created_at: Set(event.created_at),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(())
    }

    async fn list_ordered(&self) -> Result<Vec<AuditEvent>, RepositoryError> {
        let models = audit_entity::Entity::find()
            .order_by_asc(audit_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
