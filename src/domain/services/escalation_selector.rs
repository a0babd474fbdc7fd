// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::team::TeamMember;
use crate::domain::models::ticket::DomainError;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::ticket_repository::TicketRepository;
use crate::domain::services::workload_router::least_loaded;
use std::sync::Arc;
use uuid::Uuid;

/// 取当前层级之上最近一层的候选成员
///
/// 只取严格高于当前层级的最小层级，保证升级每次恰好上移一层，
/// 不会越级跳到最高层。没有更高层时返回空。
pub fn next_tier_members(members: &[TeamMember], current_level: i32) -> Vec<Uuid> {
    let next_level = members
        .iter()
        .map(|m| m.hierarchy_level)
        .filter(|level| *level > current_level)
        .min();

    match next_level {
        Some(level) => members
            .iter()
            .filter(|m| m.hierarchy_level == level)
            .map(|m| m.user_id)
            .collect(),
        None => Vec::new(),
    }
}

/// 取未分配工单首次升级的目标层成员
///
/// 以花名册的最低层级为基准，取其上一层；花名册只有一层时
/// 退回基准层本身。即未分配工单的首次升级直接落到第二层。
pub fn senior_tier_for_unassigned(members: &[TeamMember]) -> Vec<Uuid> {
    let base_level = match members.iter().map(|m| m.hierarchy_level).min() {
        Some(level) => level,
        None => return Vec::new(),
    };

    let senior_level = members
        .iter()
        .map(|m| m.hierarchy_level)
        .filter(|level| *level > base_level)
        .min()
        .unwrap_or(base_level);

    members
        .iter()
        .filter(|m| m.hierarchy_level == senior_level)
        .map(|m| m.user_id)
        .collect()
}

/// 升级选择器
///
/// 沿团队层级为违约工单挑选下一位响应者，层内按未结工单数
/// 负载均衡。没有更高层时返回空，由调用方兜底到全局管理员。
pub struct EscalationSelector {
    team_repo: Arc<dyn TeamRepository>,
    ticket_repo: Arc<dyn TicketRepository>,
}

impl EscalationSelector {
    /// 创建新的升级选择器实例
    pub fn new(team_repo: Arc<dyn TeamRepository>, ticket_repo: Arc<dyn TicketRepository>) -> Self {
        Self {
            team_repo,
            ticket_repo,
        }
    }

    /// 为有在办客服的工单选择下一位升级接收者
    ///
    /// 当前客服不在花名册中时层级按0计。
    pub async fn select_next_escalation_agent(
        &self,
        team_id: Uuid,
        current_agent_id: Option<Uuid>,
    ) -> Result<Option<Uuid>, DomainError> {
        let mut current_level = 0;
        if let Some(agent_id) = current_agent_id {
            if let Some(member) = self.team_repo.find_member(team_id, agent_id).await? {
                current_level = member.hierarchy_level;
            }
        }

        let members = self.team_repo.list_members(team_id).await?;
        let candidates = next_tier_members(&members, current_level);
        self.pick_least_loaded(candidates).await
    }

    /// 为从未分配过客服的工单选择升级接收者
    pub async fn select_senior_agent_for_unassigned(
        &self,
        team_id: Uuid,
    ) -> Result<Option<Uuid>, DomainError> {
        let members = self.team_repo.list_members(team_id).await?;
        let candidates = senior_tier_for_unassigned(&members);
        self.pick_least_loaded(candidates).await
    }

    async fn pick_least_loaded(&self, candidates: Vec<Uuid>) -> Result<Option<Uuid>, DomainError> {
        if candidates.is_empty() {
            return Ok(None);
        }
        let open_counts = self.ticket_repo.count_open_by_agents(&candidates).await?;
        Ok(least_loaded(&candidates, &open_counts))
    }
}

#[cfg(test)]
#[path = "escalation_selector_test.rs"]
mod tests;
