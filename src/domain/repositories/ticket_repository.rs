// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ticket::{Ticket, TicketStatus};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::DbErr;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 工单仓库特质
///
/// 定义工单数据访问接口。查询默认排除软删除的行；
/// delete_hard 仅用于创建失败时的补偿回滚。
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// 插入新工单
    async fn insert(&self, ticket: &Ticket) -> Result<Ticket, RepositoryError>;

    /// 根据ID查找工单
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, RepositoryError>;

    /// 更新工单状态与更新时间
    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<Ticket, RepositoryError>;

    /// 应用一次升级：更新团队、客服、升级次数并置为 REASSIGNED
    async fn apply_escalation(
        &self,
        id: Uuid,
        team_id: Option<Uuid>,
        agent_id: Option<Uuid>,
        new_level: i32,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), RepositoryError>;

    /// 物理删除工单行（创建回滚专用）
    async fn delete_hard(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// 统计一组客服各自的未结工单数
    ///
    /// 返回的映射对传入的每个ID都有条目，未结工单为零的客服计为0。
    async fn count_open_by_agents(
        &self,
        agent_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>, RepositoryError>;
}
