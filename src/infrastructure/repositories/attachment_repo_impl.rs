// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::attachment::TicketAttachment;
use crate::domain::models::ticket::TicketLocation;
use crate::domain::repositories::attachment_repository::AttachmentRepository;
use crate::domain::repositories::ticket_repository::RepositoryError;
use crate::infrastructure::database::entities::location as location_entity;
use crate::infrastructure::database::entities::ticket_attachment as attachment_entity;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

/// 附件与位置仓库实现
#[derive(Clone)]
pub struct AttachmentRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl AttachmentRepositoryImpl {
    /// 创建新的附件仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<TicketAttachment> for attachment_entity::ActiveModel {
    fn from(attachment: TicketAttachment) -> Self {
        Self {
            id: Set(attachment.id),
            ticket_id: Set(attachment.ticket_id),
            file_url: Set(attachment.file_url),
            file_name: Set(attachment.file_name),
            file_type: Set(attachment.file_type),
            file_size: Set(attachment.file_size),
            created_at: Set(attachment.created_at),
        }
    }
}

#[async_trait]
impl AttachmentRepository for AttachmentRepositoryImpl {
    async fn insert_attachments(
        &self,
        attachments: &[TicketAttachment],
    ) -> Result<Vec<TicketAttachment>, RepositoryError> {
        if attachments.is_empty() {
            return Ok(Vec::new());
        }

        let models: Vec<attachment_entity::ActiveModel> =
            attachments.iter().cloned().map(Into::into).collect();
        attachment_entity::Entity::insert_many(models)
            .exec(self.db.as_ref())
            .await?;

        Ok(attachments.to_vec())
    }

    async fn insert_location(&self, location: &TicketLocation) -> Result<(), RepositoryError> {
        let model = location_entity::ActiveModel {
            id: Set(location.id),
            ticket_id: Set(location.ticket_id),
            latitude: Set(location.latitude),
            longitude: Set(location.longitude),
            address: Set(location.address.clone()),
            zone_id: Set(location.zone_id),
        };

        model.insert(self.db.as_ref()).await?;
        Ok(())
    }
}
