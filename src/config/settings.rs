// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置
///
/// 分层加载：内置默认值 → 可选配置文件 → DESKRS__ 前缀环境变量
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    /// 各优先级的SLA时限
    pub sla: SlaSettings,
    /// SLA监控扫描参数
    pub monitor: MonitorSettings,
    /// 升级链耗尽时的兜底
    #[serde(default)]
    pub escalation: EscalationSettings,
    /// 附件上传限制
    pub uploads: UploadSettings,
    /// 附件对象存储后端
    pub storage: StorageSettings,
}

/// 数据库连接池参数，未设置的项沿用 sea-orm 默认值
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    /// 建立连接/获取连接的超时（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接回收阈值（秒）
    pub idle_timeout: Option<u64>,
}

/// 按优先级划分的处理时限（小时）
///
/// 这是策略常量而非硬编码：部署方可以按优先级单独收紧或放宽。
#[derive(Debug, Deserialize)]
pub struct SlaSettings {
    pub low_hours: u64,
    pub medium_hours: u64,
    pub high_hours: u64,
    pub critical_hours: u64,
}

/// SLA监控器的扫描节奏与批量上限
#[derive(Debug, Deserialize)]
pub struct MonitorSettings {
    pub interval_secs: u64,
    /// 单轮扫描最多处理的到期计时器数
    pub batch_size: u64,
}

/// 升级兜底接收者
///
/// 团队层级走到顶后由该邮箱对应的管理员接手；
/// 未配置时回退到最早创建的 ADMIN 用户。
#[derive(Debug, Default, Deserialize)]
pub struct EscalationSettings {
    pub admin_email: Option<String>,
}

/// 附件上传限制
#[derive(Debug, Deserialize)]
pub struct UploadSettings {
    /// 单文件字节数上限
    pub max_file_bytes: i64,
}

/// 对象存储后端选择
///
/// storage_type 取 "local" 或 "s3"；S3 的密钥对可省略，
/// 省略时走环境凭证链。
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    pub storage_type: String,
    pub local_path: Option<String>,
    pub s3_region: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
    /// 自托管兼容端点（MinIO 等）
    pub s3_endpoint: Option<String>,
}

impl Settings {
    /// 加载配置
    ///
    /// # 返回值
    ///
    /// * `Ok(Settings)` - 合并后的配置
    /// * `Err(ConfigError)` - 文件解析或反序列化失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("database.url", "sqlite::memory:")?
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("sla.low_hours", 72)?
            .set_default("sla.medium_hours", 24)?
            .set_default("sla.high_hours", 8)?
            .set_default("sla.critical_hours", 2)?
            .set_default("monitor.interval_secs", 60)?
            .set_default("monitor.batch_size", 500)?
            .set_default("uploads.max_file_bytes", 10 * 1024 * 1024)?
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "./storage")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("DESKRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
