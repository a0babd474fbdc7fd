// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
pub mod area;
pub mod audit_log_event;
pub mod escalation_event;
pub mod location;
pub mod notification;
pub mod sla_timer;
pub mod team;
pub mod team_member;
pub mod ticket;
pub mod ticket_attachment;
pub mod user;
