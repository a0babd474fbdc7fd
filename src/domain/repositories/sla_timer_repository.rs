// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::escalation::SlaTimer;
use crate::domain::repositories::ticket_repository::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// SLA计时器仓库特质
#[async_trait]
pub trait SlaTimerRepository: Send + Sync {
    /// 插入新计时器
    async fn insert(&self, timer: &SlaTimer) -> Result<SlaTimer, RepositoryError>;

    /// 查询到期的运行中计时器，限制批次大小
    async fn find_due(
        &self,
        now: DateTime<FixedOffset>,
        limit: u64,
    ) -> Result<Vec<SlaTimer>, RepositoryError>;

    /// 条件地将计时器置为违约
    ///
    /// 仅当计时器仍为 RUNNING 时生效，返回是否真正发生了流转。
    /// 这是监控器在并发/重复调用下唯一的并发控制手段。
    async fn mark_breached(
        &self,
        id: Uuid,
        now: DateTime<FixedOffset>,
    ) -> Result<bool, RepositoryError>;
}
