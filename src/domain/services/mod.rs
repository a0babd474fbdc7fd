// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务规则，协调领域对象完成业务操作。
///
/// 包含的服务：
/// - 状态机（state_machine）：工单状态流转的纯函数守卫
/// - 工作量路由器（workload_router）：按负载为区域选择团队与客服
/// - 升级选择器（escalation_selector）：沿团队层级挑选升级接收者
/// - 能力矩阵（rbac）：角色到能力的集中权限判定
/// - SLA策略（sla_policy）：优先级到处理时限的映射
/// - 上传策略（upload_policy）：附件准入与对象键生成
/// - 审计日志（audit_trail）：追加式哈希链与完整性校验
pub mod audit_trail;
pub mod escalation_selector;
pub mod rbac;
pub mod sla_policy;
pub mod state_machine;
pub mod upload_policy;
pub mod workload_router;
