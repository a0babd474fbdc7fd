// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::ticket_request::CreateTicketRequest;
use crate::domain::models::attachment::TicketAttachment;
use crate::domain::models::audit::{AuditEventInput, AuditSeverity};
use crate::domain::models::escalation::SlaTimer;
use crate::domain::models::notification::{NotificationChannel, NotificationRequest};
use crate::domain::models::team::Area;
use crate::domain::models::ticket::{DomainError, Ticket, TicketLocation, TicketStatus};
use crate::domain::models::user::{Role, User};
use crate::domain::repositories::attachment_repository::AttachmentRepository;
use crate::domain::repositories::sla_timer_repository::SlaTimerRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::ticket_repository::TicketRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::audit_trail::AuditTrail;
use crate::domain::services::rbac::{enforce_capability, Capability};
use crate::domain::services::sla_policy::SlaPolicy;
use crate::domain::services::state_machine::assert_transition;
use crate::domain::services::upload_policy::{build_object_key, UploadPolicy};
use crate::domain::services::workload_router::WorkloadRouter;
use crate::queue::notification_queue::NotificationOrchestrator;
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

/// 状态流转选项
#[derive(Debug, Clone, Copy)]
pub struct TransitionOptions {
    /// 跳过状态图校验（需要相应能力）
    pub force: bool,
    /// 执行者角色
    pub actor_role: Role,
}

/// 创建工单的结果
#[derive(Debug, Clone)]
pub struct CreatedTicket {
    /// 创建的工单
    pub ticket: Ticket,
    /// 已落库的附件元数据
    pub attachments: Vec<TicketAttachment>,
}

/// 工单生命周期服务
///
/// 编排创建与状态流转：身份校验、能力检查、路由、SLA计时、
/// 附件上传与审计。创建没有外层事务，工单行插入后的任何失败
/// 都通过补偿回滚清理（删除工单行与已上传的对象）。
pub struct TicketLifecycleService {
    ticket_repo: Arc<dyn TicketRepository>,
    team_repo: Arc<dyn TeamRepository>,
    user_repo: Arc<dyn UserRepository>,
    sla_timer_repo: Arc<dyn SlaTimerRepository>,
    attachment_repo: Arc<dyn AttachmentRepository>,
    storage: Arc<dyn StorageRepository>,
    router: Arc<WorkloadRouter>,
    audit: Arc<AuditTrail>,
    notifications: Arc<NotificationOrchestrator>,
    sla_policy: SlaPolicy,
    upload_policy: UploadPolicy,
}

impl TicketLifecycleService {
    /// 创建新的工单生命周期服务实例
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ticket_repo: Arc<dyn TicketRepository>,
        team_repo: Arc<dyn TeamRepository>,
        user_repo: Arc<dyn UserRepository>,
        sla_timer_repo: Arc<dyn SlaTimerRepository>,
        attachment_repo: Arc<dyn AttachmentRepository>,
        storage: Arc<dyn StorageRepository>,
        router: Arc<WorkloadRouter>,
        audit: Arc<AuditTrail>,
        notifications: Arc<NotificationOrchestrator>,
        sla_policy: SlaPolicy,
        upload_policy: UploadPolicy,
    ) -> Self {
        Self {
            ticket_repo,
            team_repo,
            user_repo,
            sla_timer_repo,
            attachment_repo,
            storage,
            router,
            audit,
            notifications,
            sla_policy,
            upload_policy,
        }
    }

    /// 创建工单
    ///
    /// 顺序：请求校验 → 身份与能力校验 → 附件准入 → 区域解析 →
    /// 路由 → 插入工单行 → 上传附件、位置、SLA计时器、审计、通知。
    /// 工单行插入之后的失败触发补偿回滚，向调用方返回原始错误。
    pub async fn create_ticket(
        &self,
        request: CreateTicketRequest,
    ) -> Result<CreatedTicket, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let customer = self
            .user_repo
            .find_by_id(request.customer_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User {}", request.customer_id)))?;

        if customer.otp_verified_at.is_none() {
            return Err(DomainError::Unauthorized(
                "Identity not verified".to_string(),
            ));
        }
        enforce_capability(customer.role, Capability::TicketCreate)?;

        // 上传准入在任何副作用之前检查完毕
        for file in &request.files {
            self.upload_policy.assert_uploadable(file)?;
        }

        let area_id = self.resolve_area(&customer).await?;
        let routing = self.router.select_team_and_agent(area_id).await?;

        let now: DateTime<FixedOffset> = Utc::now().into();
        let deadline = self.sla_policy.deadline_for(request.priority, now);
        let status = if routing.agent_id.is_some() {
            TicketStatus::Assigned
        } else {
            TicketStatus::Created
        };

        let ticket = Ticket::new(
            request.customer_id,
            request.created_by,
            area_id,
            routing.team_id,
            routing.agent_id,
            status,
            request.priority,
            request.description.clone(),
            deadline,
        );
        let ticket = self.ticket_repo.insert(&ticket).await?;

        let mut uploaded_keys: Vec<String> = Vec::new();
        match self
            .finish_creation(&ticket, &request, &mut uploaded_keys)
            .await
        {
            Ok(attachments) => {
                info!(
                    ticket_id = %ticket.id,
                    status = %ticket.status,
                    agent = ?ticket.assigned_agent_id,
                    "Ticket created"
                );
                Ok(CreatedTicket {
                    ticket,
                    attachments,
                })
            }
            Err(e) => {
                self.rollback_creation(ticket.id, &uploaded_keys).await;
                Err(e)
            }
        }
    }

    /// 工单行插入后的剩余创建步骤
    ///
    /// 已上传的对象键随时回写到 uploaded_keys，失败时调用方
    /// 据此清理存储。
    async fn finish_creation(
        &self,
        ticket: &Ticket,
        request: &CreateTicketRequest,
        uploaded_keys: &mut Vec<String>,
    ) -> Result<Vec<TicketAttachment>, DomainError> {
        let mut attachments = Vec::with_capacity(request.files.len());
        for file in &request.files {
            let key = build_object_key(ticket.id, &file.file_name);
            self.storage.save(&key, &file.bytes).await?;
            uploaded_keys.push(key.clone());
            attachments.push(TicketAttachment::new(
                ticket.id,
                key,
                file.file_name.clone(),
                file.content_type.clone(),
                file.bytes.len() as i64,
            ));
        }
        let attachments = self.attachment_repo.insert_attachments(&attachments).await?;

        self.attachment_repo
            .insert_location(&TicketLocation {
                id: Uuid::new_v4(),
                ticket_id: ticket.id,
                latitude: request.location.latitude,
                longitude: request.location.longitude,
                address: request.location.address.clone(),
                zone_id: ticket.area_id,
            })
            .await?;

        self.sla_timer_repo
            .insert(&SlaTimer::running(ticket.id, ticket.sla_deadline))
            .await?;

        self.audit
            .append(AuditEventInput {
                event_type: "TICKET_CREATED".to_string(),
                severity: AuditSeverity::Info,
                actor_id: Some(ticket.created_by),
                ticket_id: Some(ticket.id),
                resource_type: "TICKET".to_string(),
                resource_id: Some(ticket.id.to_string()),
                action: "CREATE".to_string(),
                metadata: serde_json::json!({
                    "status": ticket.status,
                    "priority": ticket.priority,
                    "assigned_team_id": ticket.assigned_team_id,
                    "assigned_agent_id": ticket.assigned_agent_id,
                    "sla_deadline": ticket.sla_deadline,
                }),
            })
            .await?;

        if let Some(agent_id) = ticket.assigned_agent_id {
            // 通知属于尽力而为的旁路，失败不回滚创建
            let result = self
                .notifications
                .queue_notification(NotificationRequest {
                    ticket_id: Some(ticket.id),
                    recipient_user_id: Some(agent_id),
                    channel: NotificationChannel::InApp,
                    template_key: "ticket-assigned".to_string(),
                    payload: serde_json::json!({
                        "ticket_id": ticket.id,
                        "priority": ticket.priority,
                    }),
                    idempotency_key: format!("ticket-created:{}:notify", ticket.id),
                })
                .await;
            if let Err(e) = result {
                warn!(ticket_id = %ticket.id, "Failed to queue assignment notification: {}", e);
            }
        }

        Ok(attachments)
    }

    /// 补偿回滚：删除工单行与已上传的对象
    ///
    /// 尽力而为，清理失败只记录日志，不覆盖原始错误。
    async fn rollback_creation(&self, ticket_id: Uuid, uploaded_keys: &[String]) {
        warn!(ticket_id = %ticket_id, "Ticket creation failed, rolling back");

        if let Err(e) = self.ticket_repo.delete_hard(ticket_id).await {
            error!(ticket_id = %ticket_id, "Rollback failed to delete ticket row: {}", e);
        }
        for key in uploaded_keys {
            if let Err(e) = self.storage.delete(key).await {
                error!(ticket_id = %ticket_id, key = %key, "Rollback failed to delete object: {}", e);
            }
        }
    }

    /// 解析工单归属的区域
    ///
    /// 优先用客户自带的区域；客户没有区域时退回系统中最早的
    /// 区域；一个区域都没有时自动补齐默认接入区域。
    async fn resolve_area(&self, customer: &User) -> Result<Uuid, DomainError> {
        if let Some(area_id) = customer.area_id {
            return Ok(area_id);
        }
        if let Some(area) = self.team_repo.find_first_area().await? {
            return Ok(area.id);
        }

        let area = self
            .team_repo
            .insert_area(&Area {
                id: Uuid::new_v4(),
                name: "Unassigned Intake".to_string(),
                zone_code: "AUTO_DEFAULT".to_string(),
            })
            .await?;
        info!(area_id = %area.id, "Created default intake area");
        Ok(area.id)
    }

    /// 执行一次状态流转
    ///
    /// 常规流转必须符合状态图；force 跳过状态图校验，但要求
    /// 执行者角色持有强制流转能力。采用后写覆盖语义，不做
    /// 乐观锁（见 DESIGN.md）。
    pub async fn transition_ticket(
        &self,
        ticket_id: Uuid,
        next: TicketStatus,
        options: TransitionOptions,
    ) -> Result<Ticket, DomainError> {
        let ticket = self
            .ticket_repo
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Ticket {}", ticket_id)))?;

        if options.force {
            enforce_capability(options.actor_role, Capability::TicketForceTransition)?;
        } else {
            assert_transition(ticket.status, next)?;
        }

        let now: DateTime<FixedOffset> = Utc::now().into();
        let updated = self.ticket_repo.update_status(ticket_id, next, now).await?;

        self.audit
            .append(AuditEventInput {
                event_type: "TICKET_STATUS_CHANGED".to_string(),
                severity: AuditSeverity::Info,
                actor_id: None,
                ticket_id: Some(ticket_id),
                resource_type: "TICKET".to_string(),
                resource_id: Some(ticket_id.to_string()),
                action: "TRANSITION".to_string(),
                metadata: serde_json::json!({
                    "from": ticket.status,
                    "to": next,
                    "forced": options.force,
                }),
            })
            .await?;

        info!(ticket_id = %ticket_id, from = %ticket.status, to = %next, forced = options.force, "Ticket transitioned");
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "ticket_lifecycle_test.rs"]
mod tests;
