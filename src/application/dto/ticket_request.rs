// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::attachment::UploadFile;
use crate::domain::models::ticket::TicketPriority;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建工单请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateTicketRequest {
    /// 客户ID
    pub customer_id: Uuid,
    /// 创建者ID（客户本人或代录的管理员）
    pub created_by: Uuid,
    /// 优先级
    pub priority: TicketPriority,
    #[validate(length(min = 10, max = 5000))]
    pub description: String,
    #[validate(nested)]
    pub location: TicketLocationDto,
    /// 待上传的附件，内容由API层收集
    #[serde(skip)]
    pub files: Vec<UploadFile>,
}

/// 工单位置
#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct TicketLocationDto {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
}
