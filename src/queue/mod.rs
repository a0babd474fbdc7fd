// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 提供通知的落库与入队编排
/// 投递本身由队列后端的消费者完成
pub mod notification_queue;
