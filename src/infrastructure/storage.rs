// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::settings::StorageSettings;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

fn required(value: &Option<String>, field: &str) -> Result<String, StorageError> {
    value
        .as_ref()
        .cloned()
        .ok_or_else(|| StorageError::Other(format!("Missing storage setting: {}", field)))
}

/// S3 对象存储
///
/// 桶与区域必须显式配置；访问密钥可选，缺省时回退到
/// 环境凭证链（实例角色、共享凭证文件等）。
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    pub async fn from_settings(settings: &StorageSettings) -> Result<Self, StorageError> {
        let bucket = required(&settings.s3_bucket, "s3_bucket")?;
        let region = Region::new(required(&settings.s3_region, "s3_region")?);

        let mut builder = match (&settings.s3_access_key, &settings.s3_secret_key) {
            (Some(access_key), Some(secret_key)) => {
                let credentials = Credentials::new(
                    access_key.clone(),
                    secret_key.clone(),
                    None,
                    None,
                    "settings",
                );
                aws_sdk_s3::config::Builder::new()
                    .region(region)
                    .credentials_provider(credentials)
            }
            _ => {
                let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
                    .region(region)
                    .load()
                    .await;
                aws_sdk_s3::config::Builder::from(&shared)
            }
        };

        // MinIO等自托管端点需要 path-style 寻址
        if let Some(endpoint) = &settings.s3_endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket,
        })
    }
}

#[async_trait]
impl StorageRepository for S3Storage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|e| StorageError::Other(format!("put_object {}: {}", key, e)))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Other(format!("delete_object {}: {}", key, e)))?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let head = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match head {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_not_found() {
                    Ok(false)
                } else {
                    Err(StorageError::Other(format!(
                        "head_object {}: {}",
                        key, service_error
                    )))
                }
            }
        }
    }
}

/// 本地文件系统存储
///
/// 对象键直接映射为 base 下的相对路径，目录按需创建。
pub struct LocalStorage {
    base: PathBuf,
}

impl LocalStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn resolve(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

#[async_trait]
impl StorageRepository for LocalStorage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.resolve(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(Path::new(&self.resolve(key)).exists())
    }
}

/// 按配置构造存储后端
pub async fn create_storage_repository(
    settings: &StorageSettings,
) -> Result<Box<dyn StorageRepository + Send + Sync>, StorageError> {
    match settings.storage_type.as_str() {
        "local" => {
            let base = settings
                .local_path
                .clone()
                .unwrap_or_else(|| "./storage".to_string());
            Ok(Box::new(LocalStorage::new(base)))
        }
        "s3" => Ok(Box::new(S3Storage::from_settings(settings).await?)),
        other => Err(StorageError::Other(format!(
            "Unsupported storage type: {}",
            other
        ))),
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
