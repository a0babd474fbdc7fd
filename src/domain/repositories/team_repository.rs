// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::team::{Area, Team, TeamMember};
use crate::domain::repositories::ticket_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 团队仓库特质
///
/// 定义区域、团队与团队成员的数据访问接口。
/// 成员花名册由管理端维护，核心只读。
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// 查找最早创建的区域
    async fn find_first_area(&self) -> Result<Option<Area>, RepositoryError>;

    /// 创建区域（用于自动补齐默认接入区域）
    async fn insert_area(&self, area: &Area) -> Result<Area, RepositoryError>;

    /// 查找服务某区域的团队（首个匹配）
    async fn find_team_by_area(&self, area_id: Uuid) -> Result<Option<Team>, RepositoryError>;

    /// 列出团队成员，按层级升序、录入顺序稳定
    async fn list_members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, RepositoryError>;

    /// 查找某成员在团队中的记录
    async fn find_member(
        &self,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TeamMember>, RepositoryError>;
}
