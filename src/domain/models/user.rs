// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 用户实体
///
/// 核心只读取用户数据：OTP验证时间戳用于创建工单前的身份校验，
/// 角色用于能力检查。OTP签发与用户管理属于外部协作方。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识符
    pub id: Uuid,
    /// 用户姓名
    pub name: String,
    /// 邮箱地址
    pub email: String,
    /// 用户角色
    pub role: Role,
    /// 所属服务区域ID
    pub area_id: Option<Uuid>,
    /// OTP验证通过时间，为空表示身份未验证
    pub otp_verified_at: Option<DateTime<FixedOffset>>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

/// 用户角色枚举
///
/// 封闭枚举，按资历从低到高排列；能力矩阵见 rbac 模块。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// 客户
    #[default]
    Customer,
    /// 客服
    Agent,
    /// 资深客服
    SeniorAgent,
    /// 经理
    Manager,
    /// 管理员
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "CUSTOMER"),
            Role::Agent => write!(f, "AGENT"),
            Role::SeniorAgent => write!(f, "SENIOR_AGENT"),
            Role::Manager => write!(f, "MANAGER"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(Role::Customer),
            "AGENT" => Ok(Role::Agent),
            "SENIOR_AGENT" => Ok(Role::SeniorAgent),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}
