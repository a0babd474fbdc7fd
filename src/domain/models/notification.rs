// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 通知请求
///
/// 核心只负责落库并入队，投递由队列消费者完成；
/// idempotency_key 在消费端去重，保证至少一次语义下不重复投递。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// 关联工单ID
    pub ticket_id: Option<Uuid>,
    /// 接收者用户ID
    pub recipient_user_id: Option<Uuid>,
    /// 投递渠道
    pub channel: NotificationChannel,
    /// 模板键
    pub template_key: String,
    /// 模板参数
    pub payload: serde_json::Value,
    /// 幂等键
    pub idempotency_key: String,
}

/// 通知渠道枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationChannel {
    /// 邮件
    Email,
    /// 短信
    Sms,
    /// 推送
    Push,
    /// Webhook回调
    Webhook,
    /// 应用内通知
    #[default]
    InApp,
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NotificationChannel::Email => write!(f, "EMAIL"),
            NotificationChannel::Sms => write!(f, "SMS"),
            NotificationChannel::Push => write!(f, "PUSH"),
            NotificationChannel::Webhook => write!(f, "WEBHOOK"),
            NotificationChannel::InApp => write!(f, "IN_APP"),
        }
    }
}

impl FromStr for NotificationChannel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMAIL" => Ok(NotificationChannel::Email),
            "SMS" => Ok(NotificationChannel::Sms),
            "PUSH" => Ok(NotificationChannel::Push),
            "WEBHOOK" => Ok(NotificationChannel::Webhook),
            "IN_APP" => Ok(NotificationChannel::InApp),
            _ => Err(()),
        }
    }
}
