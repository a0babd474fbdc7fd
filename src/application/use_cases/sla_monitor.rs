// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::audit::{AuditEventInput, AuditSeverity};
use crate::domain::models::escalation::{EscalationEvent, SlaTimer};
use crate::domain::models::notification::{NotificationChannel, NotificationRequest};
use crate::domain::models::ticket::DomainError;
use crate::domain::repositories::escalation_repository::EscalationRepository;
use crate::domain::repositories::sla_timer_repository::SlaTimerRepository;
use crate::domain::repositories::ticket_repository::TicketRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::audit_trail::AuditTrail;
use crate::domain::services::escalation_selector::EscalationSelector;
use crate::domain::services::workload_router::WorkloadRouter;
use crate::queue::notification_queue::NotificationOrchestrator;
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// SLA监控器
///
/// 扫描到期的运行中计时器并沿团队层级升级对应的工单。
/// 计时器 RUNNING→BREACHED 的条件更新是唯一的并发闸门：
/// 抢到闸门的调用者负责整个升级流程，其余调用者静默跳过，
/// 因此监控器可以安全地重复或并发触发。
pub struct SlaMonitor {
    sla_timer_repo: Arc<dyn SlaTimerRepository>,
    ticket_repo: Arc<dyn TicketRepository>,
    user_repo: Arc<dyn UserRepository>,
    escalation_repo: Arc<dyn EscalationRepository>,
    selector: Arc<EscalationSelector>,
    router: Arc<WorkloadRouter>,
    audit: Arc<AuditTrail>,
    notifications: Arc<NotificationOrchestrator>,
    batch_size: u64,
    admin_email: Option<String>,
}

impl SlaMonitor {
    /// 创建新的SLA监控器实例
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sla_timer_repo: Arc<dyn SlaTimerRepository>,
        ticket_repo: Arc<dyn TicketRepository>,
        user_repo: Arc<dyn UserRepository>,
        escalation_repo: Arc<dyn EscalationRepository>,
        selector: Arc<EscalationSelector>,
        router: Arc<WorkloadRouter>,
        audit: Arc<AuditTrail>,
        notifications: Arc<NotificationOrchestrator>,
        batch_size: u64,
        admin_email: Option<String>,
    ) -> Self {
        Self {
            sla_timer_repo,
            ticket_repo,
            user_repo,
            escalation_repo,
            selector,
            router,
            audit,
            notifications,
            batch_size,
            admin_email,
        }
    }

    /// 评估到期的SLA计时器
    ///
    /// 单个计时器的失败只记录日志，不影响批次内的其余计时器。
    ///
    /// # 返回值
    ///
    /// 本次调用抢到闸门并处理的计时器数。
    pub async fn evaluate_due_sla_timers(&self) -> Result<u64, DomainError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let timers = self.sla_timer_repo.find_due(now, self.batch_size).await?;

        let mut escalated = 0u64;
        for timer in timers {
            match self.escalate_timer(&timer, now).await {
                Ok(true) => escalated += 1,
                Ok(false) => {}
                Err(e) => {
                    error!(timer_id = %timer.id, ticket_id = %timer.ticket_id, "SLA escalation failed: {}", e);
                }
            }
        }

        if escalated > 0 {
            info!("Escalated {} breached SLA timers", escalated);
        }
        Ok(escalated)
    }

    /// 处理单个到期计时器
    ///
    /// # 返回值
    ///
    /// * `Ok(false)` - 闸门已被其他调用者抢走，跳过
    /// * `Ok(true)` - 本调用者完成了违约处理
    async fn escalate_timer(
        &self,
        timer: &SlaTimer,
        now: DateTime<FixedOffset>,
    ) -> Result<bool, DomainError> {
        if !self.sla_timer_repo.mark_breached(timer.id, now).await? {
            return Ok(false);
        }

        let ticket = match self.ticket_repo.find_by_id(timer.ticket_id).await? {
            Some(ticket) => ticket,
            None => {
                warn!(timer_id = %timer.id, ticket_id = %timer.ticket_id, "Breached timer references missing ticket");
                return Ok(true);
            }
        };

        // 工单缺少团队时尽力重推路由，推不出来就只剩管理员兜底
        let team_id = match ticket.assigned_team_id {
            Some(team_id) => Some(team_id),
            None => {
                warn!(ticket_id = %ticket.id, "Escalating ticket without a team, re-deriving from area");
                self.router
                    .select_team_and_agent(ticket.area_id)
                    .await?
                    .team_id
            }
        };

        let mut to_agent: Option<Uuid> = None;
        if let Some(team_id) = team_id {
            to_agent = if ticket.assigned_agent_id.is_some() {
                self.selector
                    .select_next_escalation_agent(team_id, ticket.assigned_agent_id)
                    .await?
            } else {
                self.selector
                    .select_senior_agent_for_unassigned(team_id)
                    .await?
            };
        }

        if to_agent.is_none() {
            to_agent = self
                .user_repo
                .find_top_level_admin(self.admin_email.as_deref())
                .await?
                .map(|admin| admin.id);
            if to_agent.is_none() {
                warn!(ticket_id = %ticket.id, "No escalation target or admin fallback, ticket stays unassigned");
            }
        }

        let new_level = ticket.escalation_level + 1;
        self.ticket_repo
            .apply_escalation(ticket.id, team_id, to_agent, new_level, now)
            .await?;

        let correlation_id = format!("sla-breach:{}", timer.id);
        self.escalation_repo
            .insert(&EscalationEvent::new(
                ticket.id,
                Some(timer.id),
                ticket.assigned_agent_id,
                to_agent,
                ticket.escalation_level,
                new_level,
                format!("Timer breached at {}", timer.due_at),
                correlation_id.clone(),
            ))
            .await?;

        self.audit
            .append(AuditEventInput {
                event_type: "SLA_ESCALATION".to_string(),
                severity: AuditSeverity::Warning,
                actor_id: None,
                ticket_id: Some(ticket.id),
                resource_type: "SLA_TIMER".to_string(),
                resource_id: Some(timer.id.to_string()),
                action: "ESCALATE".to_string(),
                metadata: serde_json::json!({
                    "from_agent": ticket.assigned_agent_id,
                    "to_agent": to_agent,
                    "previous_level": ticket.escalation_level,
                    "new_level": new_level,
                    "correlation_id": correlation_id,
                }),
            })
            .await?;

        if let Some(agent_id) = to_agent {
            let result = self
                .notifications
                .queue_notification(NotificationRequest {
                    ticket_id: Some(ticket.id),
                    recipient_user_id: Some(agent_id),
                    channel: NotificationChannel::InApp,
                    template_key: "ticket-escalated".to_string(),
                    payload: serde_json::json!({
                        "ticket_id": ticket.id,
                        "new_level": new_level,
                    }),
                    idempotency_key: format!("{}:notify", correlation_id),
                })
                .await;
            if let Err(e) = result {
                warn!(ticket_id = %ticket.id, "Failed to queue escalation notification: {}", e);
            }
        }

        info!(
            ticket_id = %ticket.id,
            timer_id = %timer.id,
            to_agent = ?to_agent,
            new_level = new_level,
            "Ticket escalated after SLA breach"
        );
        Ok(true)
    }
}

#[cfg(test)]
#[path = "sla_monitor_test.rs"]
mod tests;
