// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 接口描述数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 工单仓库（ticket_repository）：工单的增查改与未结工单统计
/// - 团队仓库（team_repository）：区域、团队与成员花名册
/// - 用户仓库（user_repository）：用户读取与顶级管理员兜底查找
/// - SLA计时器仓库（sla_timer_repository）：到期扫描与条件违约流转
/// - 升级历史仓库（escalation_repository）：只追加的升级事件
/// - 审计日志仓库（audit_repository）：哈希链审计事件
/// - 附件仓库（attachment_repository）：附件元数据与位置记录
/// - 通知仓库（notification_repository）：带幂等键的通知落库
/// - 存储仓库（storage_repository）：附件文件本体的对象存储
pub mod attachment_repository;
pub mod audit_repository;
pub mod escalation_repository;
pub mod notification_repository;
pub mod sla_timer_repository;
pub mod storage_repository;
pub mod team_repository;
pub mod ticket_repository;
pub mod user_repository;
