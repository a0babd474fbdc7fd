// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::sla_monitor::SlaMonitor;
use crate::config::settings::MonitorSettings;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// SLA扫描工作器
///
/// 按固定间隔触发SLA监控器。违约处理的幂等性由计时器的
/// 条件更新保证，工作器自身不做去重。
pub struct SlaWorker {
    monitor: Arc<SlaMonitor>,
    interval: Duration,
}

impl SlaWorker {
    pub fn new(monitor: Arc<SlaMonitor>, settings: &MonitorSettings) -> Self {
        Self {
            monitor,
            interval: Duration::from_secs(settings.interval_secs),
        }
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!("SLA worker started");

        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;

            match self.monitor.evaluate_due_sla_timers().await {
                Ok(count) => {
                    if count > 0 {
                        info!("Processed {} breached SLA timers", count);
                    }
                }
                Err(e) => {
                    error!("SLA sweep failed: {}", e);
                }
            }
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }
}
