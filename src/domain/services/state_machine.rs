// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ticket::{DomainError, TicketStatus};

/// 工单状态机
///
/// 纯函数实现的状态流转守卫。流转图是固定的有向图，
/// CLOSED 为终止状态，没有出边：
///
/// ```text
/// DRAFT        -> OTP_VERIFIED
/// OTP_VERIFIED -> CREATED
/// CREATED      -> ASSIGNED
/// ASSIGNED     -> IN_PROGRESS
/// IN_PROGRESS  -> RESOLVED, SLA_BREACHED
/// SLA_BREACHED -> ESCALATED
/// ESCALATED    -> REASSIGNED
/// REASSIGNED   -> IN_PROGRESS
/// RESOLVED     -> CLOSED, REOPENED
/// REOPENED     -> IN_PROGRESS
/// CLOSED       -> (终止)
/// ```
///
/// 持有提升授权的调用方可以绕过校验强制更新（见生命周期服务的
/// force 选项），其余所有调用方必须通过本校验。
pub fn allowed_transitions(current: TicketStatus) -> &'static [TicketStatus] {
    match current {
        TicketStatus::Draft => &[TicketStatus::OtpVerified],
        TicketStatus::OtpVerified => &[TicketStatus::Created],
        TicketStatus::Created => &[TicketStatus::Assigned],
        TicketStatus::Assigned => &[TicketStatus::InProgress],
        TicketStatus::InProgress => &[TicketStatus::Resolved, TicketStatus::SlaBreached],
        TicketStatus::SlaBreached => &[TicketStatus::Escalated],
        TicketStatus::Escalated => &[TicketStatus::Reassigned],
        TicketStatus::Reassigned => &[TicketStatus::InProgress],
        TicketStatus::Resolved => &[TicketStatus::Closed, TicketStatus::Reopened],
        TicketStatus::Reopened => &[TicketStatus::InProgress],
        TicketStatus::Closed => &[],
    }
}

/// 校验一次状态流转
///
/// # 参数
///
/// * `current` - 当前状态
/// * `next` - 目标状态
///
/// # 返回值
///
/// * `Ok(())` - 流转合法
/// * `Err(DomainError::InvalidTransition)` - 流转不在邻接表中
pub fn assert_transition(current: TicketStatus, next: TicketStatus) -> Result<(), DomainError> {
    if allowed_transitions(current).contains(&next) {
        Ok(())
    } else {
        Err(DomainError::InvalidTransition {
            from: current,
            to: next,
        })
    }
}

#[cfg(test)]
#[path = "state_machine_test.rs"]
mod tests;
