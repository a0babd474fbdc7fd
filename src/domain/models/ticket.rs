// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::repositories::ticket_repository::RepositoryError;
use crate::domain::repositories::storage_repository::StorageError;

/// 工单实体
///
/// 表示系统中一个客户上报的问题。工单由生命周期服务创建，
/// 经过状态机驱动的状态流转，超时后由SLA监控器沿团队层级升级。
/// 正常运行中只做软删除，仅创建回滚时物理删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// 工单唯一标识符
    pub id: Uuid,
    /// 客户ID
    pub customer_id: Uuid,
    /// 创建者ID
    pub created_by: Uuid,
    /// 所属服务区域ID
    pub area_id: Uuid,
    /// 分配的团队ID（未路由时为空）
    pub assigned_team_id: Option<Uuid>,
    /// 分配的客服ID（未分配时为空）
    pub assigned_agent_id: Option<Uuid>,
    /// 工单状态
    pub status: TicketStatus,
    /// 工单优先级，决定SLA截止时间
    pub priority: TicketPriority,
    /// 问题描述
    pub description: String,
    /// SLA截止时间，创建时根据优先级固定，升级不会重置
    pub sla_deadline: DateTime<FixedOffset>,
    /// 升级次数，单调递增
    pub escalation_level: i32,
    /// 软删除时间
    pub deleted_at: Option<DateTime<FixedOffset>>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 工单状态枚举
///
/// 状态流转遵循固定的有向图（见 state_machine 模块），
/// Closed 为终止状态，没有出边。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// 草稿，尚未通过OTP验证
    #[default]
    Draft,
    /// OTP已验证
    OtpVerified,
    /// 已创建，未能路由到客服
    Created,
    /// 已分配给客服
    Assigned,
    /// 处理中
    InProgress,
    /// SLA已违约
    SlaBreached,
    /// 已升级
    Escalated,
    /// 已重新分配
    Reassigned,
    /// 已解决
    Resolved,
    /// 已重新打开
    Reopened,
    /// 已关闭（终止状态）
    Closed,
}

impl TicketStatus {
    /// 判断是否为"未结"状态
    ///
    /// 未结状态参与客服工作量统计：非终止且未解决的所有状态。
    pub fn is_open(&self) -> bool {
        OPEN_STATUSES.contains(self)
    }
}

/// 参与工作量统计与SLA扫描的未结状态集合
pub const OPEN_STATUSES: [TicketStatus; 7] = [
    TicketStatus::Created,
    TicketStatus::Assigned,
    TicketStatus::InProgress,
    TicketStatus::SlaBreached,
    TicketStatus::Escalated,
    TicketStatus::Reassigned,
    TicketStatus::Reopened,
];

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TicketStatus::Draft => write!(f, "DRAFT"),
            TicketStatus::OtpVerified => write!(f, "OTP_VERIFIED"),
            TicketStatus::Created => write!(f, "CREATED"),
            TicketStatus::Assigned => write!(f, "ASSIGNED"),
            TicketStatus::InProgress => write!(f, "IN_PROGRESS"),
            TicketStatus::SlaBreached => write!(f, "SLA_BREACHED"),
            TicketStatus::Escalated => write!(f, "ESCALATED"),
            TicketStatus::Reassigned => write!(f, "REASSIGNED"),
            TicketStatus::Resolved => write!(f, "RESOLVED"),
            TicketStatus::Reopened => write!(f, "REOPENED"),
            TicketStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(TicketStatus::Draft),
            "OTP_VERIFIED" => Ok(TicketStatus::OtpVerified),
            "CREATED" => Ok(TicketStatus::Created),
            "ASSIGNED" => Ok(TicketStatus::Assigned),
            "IN_PROGRESS" => Ok(TicketStatus::InProgress),
            "SLA_BREACHED" => Ok(TicketStatus::SlaBreached),
            "ESCALATED" => Ok(TicketStatus::Escalated),
            "REASSIGNED" => Ok(TicketStatus::Reassigned),
            "RESOLVED" => Ok(TicketStatus::Resolved),
            "REOPENED" => Ok(TicketStatus::Reopened),
            "CLOSED" => Ok(TicketStatus::Closed),
            _ => Err(()),
        }
    }
}

/// 工单优先级枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    /// 低优先级
    Low,
    /// 中优先级
    #[default]
    Medium,
    /// 高优先级
    High,
    /// 紧急优先级
    Critical,
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "LOW"),
            TicketPriority::Medium => write!(f, "MEDIUM"),
            TicketPriority::High => write!(f, "HIGH"),
            TicketPriority::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(TicketPriority::Low),
            "MEDIUM" => Ok(TicketPriority::Medium),
            "HIGH" => Ok(TicketPriority::High),
            "CRITICAL" => Ok(TicketPriority::Critical),
            _ => Err(()),
        }
    }
}

/// 工单位置记录
///
/// 每个工单在创建时附带一条位置记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketLocation {
    /// 记录ID
    pub id: Uuid,
    /// 所属工单ID
    pub ticket_id: Uuid,
    /// 纬度
    pub latitude: f64,
    /// 经度
    pub longitude: f64,
    /// 地址描述
    pub address: String,
    /// 区域ID
    pub zone_id: Uuid,
}

/// 领域错误类型
///
/// 公开操作的统一错误分类：校验失败、未授权、非法状态流转、
/// 目标不存在，以及底层存储错误的传播。
#[derive(Error, Debug)]
pub enum DomainError {
    /// 输入校验失败，请求被拒绝，无副作用
    #[error("Validation error: {0}")]
    Validation(String),

    /// 未授权操作：OTP未验证或角色缺少所需能力
    #[error("Unauthorized operation: {0}")]
    Unauthorized(String),

    /// 非法状态流转
    #[error("Invalid transition {from} -> {to}")]
    InvalidTransition {
        from: TicketStatus,
        to: TicketStatus,
    },

    /// 引用的工单/团队/用户不存在
    #[error("Not found: {0}")]
    NotFound(String),

    /// 仓库层错误
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// 对象存储错误
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Ticket {
    /// 创建一个新的工单
    ///
    /// 初始升级次数为0，软删除标记为空；状态与SLA截止时间
    /// 由调用方根据路由结果与优先级策略决定。
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_id: Uuid,
        created_by: Uuid,
        area_id: Uuid,
        assigned_team_id: Option<Uuid>,
        assigned_agent_id: Option<Uuid>,
        status: TicketStatus,
        priority: TicketPriority,
        description: String,
        sla_deadline: DateTime<FixedOffset>,
    ) -> Self {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            created_by,
            area_id,
            assigned_team_id,
            assigned_agent_id,
            status,
            priority,
            description,
            sla_deadline,
            escalation_level: 0,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
