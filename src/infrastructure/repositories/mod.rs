// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于SeaORM的数据访问层实现
pub mod attachment_repo_impl;
pub mod audit_repo_impl;
pub mod escalation_repo_impl;
pub mod notification_repo_impl;
pub mod sla_timer_repo_impl;
pub mod team_repo_impl;
pub mod ticket_repo_impl;
pub mod user_repo_impl;
