// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
pub mod ticket_request;
