// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::escalation::EscalationEvent;
use crate::domain::repositories::escalation_repository::EscalationRepository;
use crate::domain::repositories::ticket_repository::RepositoryError;
use crate::infrastructure::database::entities::escalation_event as event_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 升级历史仓库实现
#[derive(Clone)]
pub struct EscalationRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl EscalationRepositoryImpl {
    /// 创建新的升级历史仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<event_entity::Model> for EscalationEvent {
    fn from(model: event_entity::Model) -> Self {
        Self {
            id: model.id,
            ticket_id: model.ticket_id,
            sla_timer_id: model.sla_timer_id,
            from_agent: model.from_agent,
            to_agent: model.to_agent,
            previous_level: model.previous_level,
            new_level: model.new_level,
            reason: model.reason,
            correlation_id: model.correlation_id,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl EscalationRepository for EscalationRepositoryImpl {
    async fn insert(&self, event: &EscalationEvent) -> Result<EscalationEvent, RepositoryError> {
        let model = event_entity::ActiveModel {
            id: Set(event.id),
            ticket_id: Set(event.ticket_id),
            sla_timer_id: Set(event.sla_timer_id),
            from_agent: Set(event.from_agent),
            to_agent: Set(event.to_agent),
            previous_level: Set(event.previous_level),
            new_level: Set(event.new_level),
            reason: Set(event.reason.clone()),
            correlation_id: Set(event.correlation_id.clone()),
            created_at: Set(event.created_at),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(event.clone())
    }

    async fn list_by_ticket(
        &self,
        ticket_id: Uuid,
    ) -> Result<Vec<EscalationEvent>, RepositoryError> {
        let models = event_entity::Entity::find()
            .filter(event_entity::Column::TicketId.eq(ticket_id))
            .order_by_asc(event_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
