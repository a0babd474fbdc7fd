// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{Role, User};
use crate::domain::repositories::ticket_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::user as user_entity;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

/// 用户仓库实现
#[derive(Clone)]
pub struct UserRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的用户仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user_entity::Model> for User {
    fn from(model: user_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role.parse().unwrap_or_default(),
            area_id: model.area_id,
            otp_verified_at: model.otp_verified_at,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_top_level_admin(
        &self,
        preferred_email: Option<&str>,
    ) -> Result<Option<User>, RepositoryError> {
        if let Some(email) = preferred_email {
            let model = user_entity::Entity::find()
                .filter(user_entity::Column::Email.eq(email))
                .one(self.db.as_ref())
                .await?;
            if let Some(model) = model {
                return Ok(Some(model.into()));
            }
        }

        let model = user_entity::Entity::find()
            .filter(user_entity::Column::Role.eq(Role::Admin.to_string()))
            .order_by_asc(user_entity::Column::CreatedAt)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }
}
