// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 服务区域实体
///
/// 一个地理/服务分区，工单以区域为入口路由到团队。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    /// 区域唯一标识符
    pub id: Uuid,
    /// 区域名称
    pub name: String,
    /// 分区编码
    pub zone_code: String,
}

/// 团队实体
///
/// 服务一个区域的响应者队列，当前设计每个区域一个活跃团队。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// 团队唯一标识符
    pub id: Uuid,
    /// 团队名称
    pub name: String,
    /// 所属区域ID
    pub area_id: Uuid,
}

/// 团队成员实体
///
/// hierarchy_level 表示升级层级：同级为同事，更高为更资深的
/// 升级目标。由管理端录入，核心只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// 成员用户ID
    pub user_id: Uuid,
    /// 所属团队ID
    pub team_id: Uuid,
    /// 升级层级，非负整数
    pub hierarchy_level: i32,
}
