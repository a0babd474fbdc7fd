// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ticket::{Ticket, TicketStatus, OPEN_STATUSES};
use crate::domain::repositories::ticket_repository::{RepositoryError, TicketRepository};
use crate::infrastructure::database::entities::ticket as ticket_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// 工单仓库实现
///
/// 基于SeaORM实现的工单数据访问层。读路径统一排除软删除行；
/// 条件更新用 rows_affected 区分目标不存在。
#[derive(Clone)]
pub struct TicketRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TicketRepositoryImpl {
    /// 创建新的工单仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<ticket_entity::Model> for Ticket {
    fn from(model: ticket_entity::Model) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            created_by: model.created_by,
            area_id: model.area_id,
            assigned_team_id: model.assigned_team_id,
            assigned_agent_id: model.assigned_agent_id,
            status: model.status.parse().unwrap_or_default(),
            priority: model.priority.parse().unwrap_or_default(),
            description: model.description,
            sla_deadline: model.sla_deadline,
            escalation_level: model.escalation_level,
            deleted_at: model.deleted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Ticket> for ticket_entity::ActiveModel {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: Set(ticket.id),
            customer_id: Set(ticket.customer_id),
            created_by: Set(ticket.created_by),
            area_id: Set(ticket.area_id),
            assigned_team_id: Set(ticket.assigned_team_id),
            assigned_agent_id: Set(ticket.assigned_agent_id),
            status: Set(ticket.status.to_string()),
            priority: Set(ticket.priority.to_string()),
            description: Set(ticket.description),
            sla_deadline: Set(ticket.sla_deadline),
            escalation_level: Set(ticket.escalation_level),
            deleted_at: Set(ticket.deleted_at),
            created_at: Set(ticket.created_at),
            updated_at: Set(ticket.updated_at),
        }
    }
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn insert(&self, ticket: &Ticket) -> Result<Ticket, RepositoryError> {
        let model: ticket_entity::ActiveModel = ticket.clone().into();

        model.insert(self.db.as_ref()).await?;
        Ok(ticket.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, RepositoryError> {
        let model = ticket_entity::Entity::find_by_id(id)
            .filter(ticket_entity::Column::DeletedAt.is_null())
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<Ticket, RepositoryError> {
        let result = ticket_entity::Entity::update_many()
            .col_expr(ticket_entity::Column::Status, Expr::value(status.to_string()))
            .col_expr(ticket_entity::Column::UpdatedAt, Expr::value(updated_at))
            .filter(ticket_entity::Column::Id.eq(id))
            .filter(ticket_entity::Column::DeletedAt.is_null())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }

    async fn apply_escalation(
        &self,
        id: Uuid,
        team_id: Option<Uuid>,
        agent_id: Option<Uuid>,
        new_level: i32,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), RepositoryError> {
        let result = ticket_entity::Entity::update_many()
            .col_expr(
                ticket_entity::Column::AssignedTeamId,
                Expr::value(team_id),
            )
            .col_expr(
                ticket_entity::Column::AssignedAgentId,
                Expr::value(agent_id),
            )
            .col_expr(
                ticket_entity::Column::EscalationLevel,
                Expr::value(new_level),
            )
            .col_expr(
                ticket_entity::Column::Status,
                Expr::value(TicketStatus::Reassigned.to_string()),
            )
            .col_expr(ticket_entity::Column::UpdatedAt, Expr::value(updated_at))
            .filter(ticket_entity::Column::Id.eq(id))
            .filter(ticket_entity::Column::DeletedAt.is_null())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_hard(&self, id: Uuid) -> Result<(), RepositoryError> {
        ticket_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn count_open_by_agents(
        &self,
        agent_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>, RepositoryError> {
        let mut counts: HashMap<Uuid, i64> = agent_ids.iter().map(|id| (*id, 0)).collect();
        if agent_ids.is_empty() {
            return Ok(counts);
        }

        let open_statuses: Vec<String> = OPEN_STATUSES.iter().map(|s| s.to_string()).collect();
        let rows: Vec<(Option<Uuid>, i64)> = ticket_entity::Entity::find()
            .select_only()
            .column(ticket_entity::Column::AssignedAgentId)
            .column_as(ticket_entity::Column::Id.count(), "open_count")
            .filter(ticket_entity::Column::AssignedAgentId.is_in(agent_ids.iter().copied()))
            .filter(ticket_entity::Column::Status.is_in(open_statuses))
            .filter(ticket_entity::Column::DeletedAt.is_null())
            .group_by(ticket_entity::Column::AssignedAgentId)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        for (agent_id, count) in rows {
            if let Some(agent_id) = agent_id {
                counts.insert(agent_id, count);
            }
        }
        Ok(counts)
    }
}
