// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SlaSettings;
use crate::domain::models::ticket::TicketPriority;
use chrono::{DateTime, Duration, FixedOffset};

/// SLA策略
///
/// 优先级到处理时限的固定映射表，各优先级的小时数来自配置。
/// 截止时间在创建时一次性计算，升级不会重置。
#[derive(Debug, Clone)]
pub struct SlaPolicy {
    low: Duration,
    medium: Duration,
    high: Duration,
    critical: Duration,
}

impl SlaPolicy {
    /// 从配置构建SLA策略
    pub fn from_settings(settings: &SlaSettings) -> Self {
        Self {
            low: Duration::hours(settings.low_hours as i64),
            medium: Duration::hours(settings.medium_hours as i64),
            high: Duration::hours(settings.high_hours as i64),
            critical: Duration::hours(settings.critical_hours as i64),
        }
    }

    /// 查询某优先级的处理时限
    pub fn duration_for(&self, priority: TicketPriority) -> Duration {
        match priority {
            TicketPriority::Low => self.low,
            TicketPriority::Medium => self.medium,
            TicketPriority::High => self.high,
            TicketPriority::Critical => self.critical,
        }
    }

    /// 计算某优先级从指定时刻起的SLA截止时间
    pub fn deadline_for(
        &self,
        priority: TicketPriority,
        now: DateTime<FixedOffset>,
    ) -> DateTime<FixedOffset> {
        now + self.duration_for(priority)
    }
}

#[cfg(test)]
#[path = "sla_policy_test.rs"]
mod tests;
