// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::team::{Area, Team, TeamMember};
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::ticket_repository::RepositoryError;
use crate::infrastructure::database::entities::area as area_entity;
use crate::infrastructure::database::entities::team as team_entity;
use crate::infrastructure::database::entities::team_member as member_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 团队仓库实现
///
/// 基于SeaORM实现的区域、团队与成员数据访问层。
#[derive(Clone)]
pub struct TeamRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TeamRepositoryImpl {
    /// 创建新的团队仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<area_entity::Model> for Area {
    fn from(model: area_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            zone_code: model.zone_code,
        }
    }
}

impl From<team_entity::Model> for Team {
    fn from(model: team_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            area_id: model.area_id,
        }
    }
}

impl From<member_entity::Model> for TeamMember {
    fn from(model: member_entity::Model) -> Self {
        Self {
            user_id: model.user_id,
            team_id: model.team_id,
            hierarchy_level: model.hierarchy_level,
        }
    }
}

#[async_trait]
impl TeamRepository for TeamRepositoryImpl {
    async fn find_first_area(&self) -> Result<Option<Area>, RepositoryError> {
        let model = area_entity::Entity::find()
            .order_by_asc(area_entity::Column::CreatedAt)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn insert_area(&self, area: &Area) -> Result<Area, RepositoryError> {
        let model = area_entity::ActiveModel {
            id: Set(area.id),
            name: Set(area.name.clone()),
            zone_code: Set(area.zone_code.clone()),
            created_at: Set(Utc::now().into()),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(area.clone())
    }

    async fn find_team_by_area(&self, area_id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let model = team_entity::Entity::find()
            .filter(team_entity::Column::AreaId.eq(area_id))
            .order_by_asc(team_entity::Column::CreatedAt)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list_members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, RepositoryError> {
        let models = member_entity::Entity::find()
            .filter(member_entity::Column::TeamId.eq(team_id))
            .order_by_asc(member_entity::Column::HierarchyLevel)
            .order_by_asc(member_entity::Column::UserId)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_member(
        &self,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TeamMember>, RepositoryError> {
        let model = member_entity::Entity::find()
            .filter(member_entity::Column::TeamId.eq(team_id))
            .filter(member_entity::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }
}
