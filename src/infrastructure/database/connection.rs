// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::debug;

/// 创建数据库连接池
///
/// 未配置的池参数沿用 sea-orm 默认值。sqlite 内存库场景下
/// 调用方需要把池收敛到单连接，否则每个连接各自为库。
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 就绪的连接池
/// * `Err(DbErr)` - 连接失败
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(settings.url.to_owned());

    if let Some(max) = settings.max_connections {
        options.max_connections(max);
    }
    if let Some(min) = settings.min_connections {
        options.min_connections(min);
    }
    if let Some(secs) = settings.connect_timeout {
        options
            .connect_timeout(Duration::from_secs(secs))
            .acquire_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = settings.idle_timeout {
        options.idle_timeout(Duration::from_secs(secs));
    }

    options.sqlx_logging(false);

    debug!(
        max_connections = ?settings.max_connections,
        min_connections = ?settings.min_connections,
        "Opening database pool"
    );
    Database::connect(options).await
}
