// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ticket::DomainError;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::ticket_repository::TicketRepository;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// 路由结果
///
/// 两者皆空表示区域没有团队，工单保持未分配；
/// 只有团队表示团队没有成员。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketRouting {
    /// 选中的团队
    pub team_id: Option<Uuid>,
    /// 选中的客服
    pub agent_id: Option<Uuid>,
}

/// 在工作量快照中选出负载最小的候选人
///
/// 快照缺失的候选人按0计。并列时按候选顺序取先遇到者，
/// 保证选择结果稳定可测。
pub fn least_loaded(candidates: &[Uuid], open_counts: &HashMap<Uuid, i64>) -> Option<Uuid> {
    candidates
        .iter()
        .min_by_key(|id| open_counts.get(*id).copied().unwrap_or(0))
        .copied()
}

/// 工作量路由器
///
/// 为指定服务区域选出团队与负载最小的客服。只读操作，
/// 路由决定由调用方持久化。
pub struct WorkloadRouter {
    team_repo: Arc<dyn TeamRepository>,
    ticket_repo: Arc<dyn TicketRepository>,
}

impl WorkloadRouter {
    /// 创建新的工作量路由器实例
    pub fn new(team_repo: Arc<dyn TeamRepository>, ticket_repo: Arc<dyn TicketRepository>) -> Self {
        Self {
            team_repo,
            ticket_repo,
        }
    }

    /// 为区域选择团队与客服
    ///
    /// 取服务该区域的首个团队（当前设计每区域一个活跃团队），
    /// 统计各成员的未结工单数后取负载最小者。
    ///
    /// # 返回值
    ///
    /// * `{None, None}` - 区域没有团队
    /// * `{Some, None}` - 团队没有成员
    /// * `{Some, Some}` - 正常路由结果
    pub async fn select_team_and_agent(&self, area_id: Uuid) -> Result<TicketRouting, DomainError> {
        let team = match self.team_repo.find_team_by_area(area_id).await? {
            Some(team) => team,
            None => return Ok(TicketRouting::default()),
        };

        let members = self.team_repo.list_members(team.id).await?;
        if members.is_empty() {
            return Ok(TicketRouting {
                team_id: Some(team.id),
                agent_id: None,
            });
        }

        let member_ids: Vec<Uuid> = members.iter().map(|m| m.user_id).collect();
        let open_counts = self.ticket_repo.count_open_by_agents(&member_ids).await?;

        Ok(TicketRouting {
            team_id: Some(team.id),
            agent_id: least_loaded(&member_ids, &open_counts),
        })
    }
}

#[cfg(test)]
#[path = "workload_router_test.rs"]
mod tests;
