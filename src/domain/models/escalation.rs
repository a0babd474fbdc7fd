// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 升级事件记录
///
/// 每次SLA升级追加一条，记录升级前后的客服与层级。
/// 插入后不再修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationEvent {
    /// 事件唯一标识符
    pub id: Uuid,
    /// 所属工单ID
    pub ticket_id: Uuid,
    /// 触发本次升级的SLA计时器ID
    pub sla_timer_id: Option<Uuid>,
    /// 升级前的客服
    pub from_agent: Option<Uuid>,
    /// 升级后的客服
    pub to_agent: Option<Uuid>,
    /// 升级前的层级
    pub previous_level: i32,
    /// 升级后的层级
    pub new_level: i32,
    /// 升级原因
    pub reason: String,
    /// 关联ID，用于幂等与追踪
    pub correlation_id: String,
    /// 记录时间
    pub created_at: DateTime<FixedOffset>,
}

/// SLA计时器实体
///
/// 每个工单一条，到期时间等于工单的SLA截止时间。
/// RUNNING→BREACHED 是单向流转，由条件更新保证幂等。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaTimer {
    /// 计时器唯一标识符
    pub id: Uuid,
    /// 所属工单ID
    pub ticket_id: Uuid,
    /// 计时器状态
    pub status: SlaTimerStatus,
    /// 到期时间
    pub due_at: DateTime<FixedOffset>,
    /// 违约时间
    pub breached_at: Option<DateTime<FixedOffset>>,
    /// 最近一次评估时间
    pub last_evaluated_at: Option<DateTime<FixedOffset>>,
}

impl SlaTimer {
    /// 为工单创建一个运行中的计时器
    pub fn running(ticket_id: Uuid, due_at: DateTime<FixedOffset>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_id,
            status: SlaTimerStatus::Running,
            due_at,
            breached_at: None,
            last_evaluated_at: None,
        }
    }
}

/// SLA计时器状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlaTimerStatus {
    /// 运行中
    #[default]
    Running,
    /// 已违约
    Breached,
}

impl fmt::Display for SlaTimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SlaTimerStatus::Running => write!(f, "RUNNING"),
            SlaTimerStatus::Breached => write!(f, "BREACHED"),
        }
    }
}

impl FromStr for SlaTimerStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUNNING" => Ok(SlaTimerStatus::Running),
            "BREACHED" => Ok(SlaTimerStatus::Breached),
            _ => Err(()),
        }
    }
}

impl EscalationEvent {
    /// 创建一条新的升级事件记录
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ticket_id: Uuid,
        sla_timer_id: Option<Uuid>,
        from_agent: Option<Uuid>,
        to_agent: Option<Uuid>,
        previous_level: i32,
        new_level: i32,
        reason: String,
        correlation_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_id,
            sla_timer_id,
            from_agent,
            to_agent,
            previous_level,
            new_level,
            reason,
            correlation_id,
            created_at: Utc::now().into(),
        }
    }
}
