// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::escalation::{SlaTimer, SlaTimerStatus};
use crate::domain::repositories::sla_timer_repository::SlaTimerRepository;
use crate::domain::repositories::ticket_repository::RepositoryError;
use crate::infrastructure::database::entities::sla_timer as timer_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// SLA计时器仓库实现
///
/// RUNNING→BREACHED 通过带状态前置条件的 update_many 完成，
/// rows_affected 表示本调用者是否抢到了这次流转。
#[derive(Clone)]
pub struct SlaTimerRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SlaTimerRepositoryImpl {
    /// 创建新的SLA计时器仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<timer_entity::Model> for SlaTimer {
    fn from(model: timer_entity::Model) -> Self {
        Self {
            id: model.id,
            ticket_id: model.ticket_id,
            status: model.status.parse().unwrap_or_default(),
            due_at: model.due_at,
            breached_at: model.breached_at,
            last_evaluated_at: model.last_evaluated_at,
        }
    }
}

#[async_trait]
impl SlaTimerRepository for SlaTimerRepositoryImpl {
    async fn insert(&self, timer: &SlaTimer) -> Result<SlaTimer, RepositoryError> {
        let model = timer_entity::ActiveModel {
            id: Set(timer.id),
            ticket_id: Set(timer.ticket_id),
            status: Set(timer.status.to_string()),
            due_at: Set(timer.due_at),
            breached_at: Set(timer.breached_at),
            last_evaluated_at: Set(timer.last_evaluated_at),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(timer.clone())
    }

    async fn find_due(
        &self,
        now: DateTime<FixedOffset>,
        limit: u64,
    ) -> Result<Vec<SlaTimer>, RepositoryError> {
        let models = timer_entity::Entity::find()
            .filter(timer_entity::Column::Status.eq(SlaTimerStatus::Running.to_string()))
            .filter(timer_entity::Column::DueAt.lt(now))
            .order_by_asc(timer_entity::Column::DueAt)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn mark_breached(
        &self,
        id: Uuid,
        now: DateTime<FixedOffset>,
    ) -> Result<bool, RepositoryError> {
        let result = timer_entity::Entity::update_many()
            .col_expr(
                timer_entity::Column::Status,
                Expr::value(SlaTimerStatus::Breached.to_string()),
            )
            .col_expr(timer_entity::Column::BreachedAt, Expr::value(Some(now)))
            .col_expr(
                timer_entity::Column::LastEvaluatedAt,
                Expr::value(Some(now)),
            )
            .filter(timer_entity::Column::Id.eq(id))
            .filter(timer_entity::Column::Status.eq(SlaTimerStatus::Running.to_string()))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected > 0)
    }
}
