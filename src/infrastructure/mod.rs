// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 数据库连接、实体与仓库实现，以及附件对象存储
pub mod database;
pub mod repositories;
pub mod storage;
