// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 审计事件写入参数
///
/// 任何需要留下合规痕迹的核心组件都通过该结构追加审计事件。
/// 哈希链由 AuditTrail 服务计算，调用方不关心。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEventInput {
    /// 事件类型，如 TICKET_CREATED、SLA_ESCALATION
    pub event_type: String,
    /// 严重程度
    pub severity: AuditSeverity,
    /// 触发事件的主体
    pub actor_id: Option<Uuid>,
    /// 关联工单ID
    pub ticket_id: Option<Uuid>,
    /// 资源类型
    pub resource_type: String,
    /// 资源ID
    pub resource_id: Option<String>,
    /// 动作描述
    pub action: String,
    /// 附加元数据
    pub metadata: serde_json::Value,
}

/// 审计事件记录
///
/// 追加写入、按插入顺序哈希链接：第N条的 hash_prev 等于第N-1条的
/// hash_current，任何断裂即表示被篡改。行插入后不再更新或删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// 事件唯一标识符
    pub id: Uuid,
    /// 事件类型
    pub event_type: String,
    /// 严重程度
    pub severity: AuditSeverity,
    /// 触发事件的主体
    pub actor_id: Option<Uuid>,
    /// 关联工单ID
    pub ticket_id: Option<Uuid>,
    /// 资源类型
    pub resource_type: String,
    /// 资源ID
    pub resource_id: Option<String>,
    /// 动作描述
    pub action: String,
    /// 附加元数据
    pub metadata: serde_json::Value,
    /// 前一条事件的哈希，链首为空
    pub hash_prev: Option<String>,
    /// 本条事件的哈希
    pub hash_current: String,
    /// 记录时间
    pub created_at: DateTime<FixedOffset>,
}

/// 审计事件严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditSeverity {
    /// 信息
    #[default]
    Info,
    /// 警告
    Warning,
    /// 严重
    Critical,
}

impl fmt::Display for AuditSeverity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuditSeverity::Info => write!(f, "INFO"),
            AuditSeverity::Warning => write!(f, "WARNING"),
            AuditSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl std::str::FromStr for AuditSeverity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(AuditSeverity::Info),
            "WARNING" => Ok(AuditSeverity::Warning),
            "CRITICAL" => Ok(AuditSeverity::Critical),
            _ => Err(()),
        }
    }
}
