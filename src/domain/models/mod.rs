// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 包含核心业务实体与数据结构：
/// - 工单（ticket）：工单实体、状态与优先级枚举、领域错误
/// - 用户（user）：用户实体与角色枚举
/// - 团队（team）：区域、团队与团队成员
/// - 升级（escalation）：升级事件与SLA计时器
/// - 审计（audit)：哈希链审计事件
/// - 附件（attachment）：工单附件元数据与上传内容
/// - 通知（notification）：通知请求与渠道
pub mod attachment;
pub mod audit;
pub mod escalation;
pub mod notification;
pub mod team;
pub mod ticket;
pub mod user;
