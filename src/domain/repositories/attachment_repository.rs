// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::attachment::TicketAttachment;
use crate::domain::models::ticket::TicketLocation;
use crate::domain::repositories::ticket_repository::RepositoryError;
use async_trait::async_trait;

/// 附件与位置仓库特质
///
/// 两者都只在工单创建时写入，创建失败由补偿回滚统一清理。
#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    /// 批量插入附件元数据
    async fn insert_attachments(
        &self,
        attachments: &[TicketAttachment],
    ) -> Result<Vec<TicketAttachment>, RepositoryError>;

    /// 插入工单位置记录
    async fn insert_location(&self, location: &TicketLocation) -> Result<(), RepositoryError>;
}
