// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
pub mod sla_monitor;
pub mod ticket_lifecycle;

#[cfg(test)]
pub mod test_support;
