// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 工单附件元数据
///
/// file_url 保存对象存储中的键，文件本体由存储仓库管理。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketAttachment {
    /// 附件唯一标识符
    pub id: Uuid,
    /// 所属工单ID
    pub ticket_id: Uuid,
    /// 对象存储键
    pub file_url: String,
    /// 原始文件名
    pub file_name: String,
    /// MIME类型
    pub file_type: String,
    /// 文件大小（字节）
    pub file_size: i64,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl TicketAttachment {
    /// 创建一条新的附件元数据
    pub fn new(
        ticket_id: Uuid,
        file_url: String,
        file_name: String,
        file_type: String,
        file_size: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_id,
            file_url,
            file_name,
            file_type,
            file_size,
            created_at: Utc::now().into(),
        }
    }
}

/// 待上传的附件内容
///
/// 由调用方（API层）收集后传入创建用例。
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// 原始文件名
    pub file_name: String,
    /// MIME类型
    pub content_type: String,
    /// 文件内容
    pub bytes: Vec<u8>,
}
