// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ticket::DomainError;
use crate::domain::models::user::Role;

/// 能力枚举
///
/// 封闭的能力集合，配合 Role 构成集中可审计的权限矩阵。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// 创建工单
    TicketCreate,
    /// 查看本人工单
    TicketReadOwn,
    /// 查看团队工单
    TicketReadTeam,
    /// 更新分配给自己的工单
    TicketUpdateAssigned,
    /// 更新团队工单
    TicketUpdateTeam,
    /// 在团队内分配工单
    TicketAssignTeam,
    /// 手动升级工单
    TicketEscalate,
    /// 强制状态流转（绕过状态机的特权通道）
    TicketForceTransition,
    /// 在本人工单下留言
    ChatWriteOwn,
    /// 在被分配的工单下留言
    ChatWriteAssigned,
    /// 查看团队报表
    ReportReadTeam,
}

/// 判断角色是否持有某项能力
///
/// ADMIN 持有全部能力；其余角色按固定矩阵判定。
pub fn has_capability(role: Role, capability: Capability) -> bool {
    use Capability::*;

    match role {
        Role::Admin => true,
        Role::Customer => matches!(capability, TicketCreate | TicketReadOwn | ChatWriteOwn),
        Role::Agent => matches!(
            capability,
            TicketReadTeam | TicketUpdateAssigned | ChatWriteAssigned
        ),
        Role::SeniorAgent => matches!(
            capability,
            TicketReadTeam | TicketUpdateTeam | TicketEscalate
        ),
        Role::Manager => matches!(
            capability,
            TicketReadTeam | TicketAssignTeam | TicketUpdateTeam | ReportReadTeam
        ),
    }
}

/// 强制要求角色持有某项能力
///
/// # 返回值
///
/// * `Ok(())` - 角色持有该能力
/// * `Err(DomainError::Unauthorized)` - 请求被拒绝，无副作用
pub fn enforce_capability(role: Role, capability: Capability) -> Result<(), DomainError> {
    if has_capability(role, capability) {
        Ok(())
    } else {
        Err(DomainError::Unauthorized(format!(
            "role {} lacks capability {:?}",
            role, capability
        )))
    }
}

#[cfg(test)]
#[path = "rbac_test.rs"]
mod tests;
