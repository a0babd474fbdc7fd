// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 后台周期任务：SLA计时器扫描
pub mod sla_worker;
