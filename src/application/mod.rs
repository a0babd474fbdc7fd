// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 编排领域服务与仓库完成工单生命周期用例
pub mod dto;
pub mod use_cases;
