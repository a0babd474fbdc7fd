// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use deskrs::application::use_cases::sla_monitor::SlaMonitor;
use deskrs::config::settings::Settings;
use deskrs::domain::services::audit_trail::AuditTrail;
use deskrs::domain::services::escalation_selector::EscalationSelector;
use deskrs::domain::services::workload_router::WorkloadRouter;
use deskrs::infrastructure::database::connection;
use deskrs::infrastructure::repositories::audit_repo_impl::AuditRepositoryImpl;
use deskrs::infrastructure::repositories::escalation_repo_impl::EscalationRepositoryImpl;
use deskrs::infrastructure::repositories::notification_repo_impl::NotificationRepositoryImpl;
use deskrs::infrastructure::repositories::sla_timer_repo_impl::SlaTimerRepositoryImpl;
use deskrs::infrastructure::repositories::team_repo_impl::TeamRepositoryImpl;
use deskrs::infrastructure::repositories::ticket_repo_impl::TicketRepositoryImpl;
use deskrs::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use deskrs::queue::notification_queue::{LoggingQueueAdapter, NotificationOrchestrator};
use deskrs::utils::telemetry;
use deskrs::workers::sla_worker::SlaWorker;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// SLA监控守护进程入口：初始化依赖并启动周期扫描工作器。
/// 工单创建与状态流转用例由上层服务通过库接口调用。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting deskrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize repositories
    let ticket_repo = Arc::new(TicketRepositoryImpl::new(db.clone()));
    let team_repo = Arc::new(TeamRepositoryImpl::new(db.clone()));
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let sla_timer_repo = Arc::new(SlaTimerRepositoryImpl::new(db.clone()));
    let escalation_repo = Arc::new(EscalationRepositoryImpl::new(db.clone()));
    let audit_repo = Arc::new(AuditRepositoryImpl::new(db.clone()));
    let notification_repo = Arc::new(NotificationRepositoryImpl::new(db.clone()));

    // 5. Initialize domain services
    let router = Arc::new(WorkloadRouter::new(team_repo.clone(), ticket_repo.clone()));
    let selector = Arc::new(EscalationSelector::new(team_repo, ticket_repo.clone()));
    let audit = Arc::new(AuditTrail::new(audit_repo));
    let notifications = Arc::new(NotificationOrchestrator::new(
        notification_repo,
        Arc::new(LoggingQueueAdapter),
    ));

    // 6. Wire the monitor
    let monitor = Arc::new(SlaMonitor::new(
        sla_timer_repo,
        ticket_repo,
        user_repo,
        escalation_repo,
        selector,
        router,
        audit,
        notifications,
        settings.monitor.batch_size,
        settings.escalation.admin_email.clone(),
    ));

    // 7. Start workers
    let worker_handle = SlaWorker::new(monitor, &settings.monitor).start();
    info!(
        "SLA worker running every {}s",
        settings.monitor.interval_secs
    );

    // 8. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, stopping workers");
    worker_handle.abort();

    Ok(())
}
