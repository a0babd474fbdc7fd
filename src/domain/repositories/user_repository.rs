// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::ticket_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 用户仓库特质
///
/// 核心对用户数据只读；OTP签发与用户管理属于外部协作方。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据ID查找用户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// 查找顶级管理员（升级链耗尽时的兜底接收者）
    ///
    /// 优先匹配配置的管理员邮箱，否则取最早创建的 ADMIN 用户。
    async fn find_top_level_admin(
        &self,
        preferred_email: Option<&str>,
    ) -> Result<Option<User>, RepositoryError>;
}
