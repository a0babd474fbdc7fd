use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create areas table
        manager
            .create_table(
                Table::create()
                    .table(Areas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Areas::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Areas::Name).string().not_null())
                    .col(ColumnDef::new(Areas::ZoneCode).string().not_null())
                    .col(
                        ColumnDef::new(Areas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::AreaId).uuid())
                    .col(ColumnDef::new(Users::OtpVerifiedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teams table
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teams::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::AreaId).uuid().not_null())
                    .col(
                        ColumnDef::new(Teams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create team_members table
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TeamMembers::UserId).uuid().not_null())
                    .col(ColumnDef::new(TeamMembers::TeamId).uuid().not_null())
                    .col(
                        ColumnDef::new(TeamMembers::HierarchyLevel)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .primary_key(
                        Index::create()
                            .col(TeamMembers::UserId)
                            .col(TeamMembers::TeamId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tickets table
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tickets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tickets::CustomerId).uuid().not_null())
                    .col(ColumnDef::new(Tickets::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Tickets::AreaId).uuid().not_null())
                    .col(ColumnDef::new(Tickets::AssignedTeamId).uuid())
                    .col(ColumnDef::new(Tickets::AssignedAgentId).uuid())
                    .col(ColumnDef::new(Tickets::Status).string().not_null())
                    .col(ColumnDef::new(Tickets::Priority).string().not_null())
                    .col(ColumnDef::new(Tickets::Description).text().not_null())
                    .col(
                        ColumnDef::new(Tickets::SlaDeadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tickets::EscalationLevel)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Tickets::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Tickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Tickets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create locations table
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Locations::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Locations::TicketId).uuid().not_null())
                    .col(ColumnDef::new(Locations::Latitude).double().not_null())
                    .col(ColumnDef::new(Locations::Longitude).double().not_null())
                    .col(ColumnDef::new(Locations::Address).string().not_null())
                    .col(ColumnDef::new(Locations::ZoneId).uuid().not_null())
                    .to_owned(),
            )
            .await?;

        // Create ticket_attachments table
        manager
            .create_table(
                Table::create()
                    .table(TicketAttachments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TicketAttachments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TicketAttachments::TicketId).uuid().not_null())
                    .col(ColumnDef::new(TicketAttachments::FileUrl).string().not_null())
                    .col(ColumnDef::new(TicketAttachments::FileName).string().not_null())
                    .col(ColumnDef::new(TicketAttachments::FileType).string().not_null())
                    .col(
                        ColumnDef::new(TicketAttachments::FileSize)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TicketAttachments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sla_timers table
        manager
            .create_table(
                Table::create()
                    .table(SlaTimers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SlaTimers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(SlaTimers::TicketId).uuid().not_null())
                    .col(ColumnDef::new(SlaTimers::Status).string().not_null())
                    .col(
                        ColumnDef::new(SlaTimers::DueAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SlaTimers::BreachedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(SlaTimers::LastEvaluatedAt).timestamp_with_time_zone(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create escalation_events table
        manager
            .create_table(
                Table::create()
                    .table(EscalationEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EscalationEvents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EscalationEvents::TicketId).uuid().not_null())
                    .col(ColumnDef::new(EscalationEvents::SlaTimerId).uuid())
                    .col(ColumnDef::new(EscalationEvents::FromAgent).uuid())
                    .col(ColumnDef::new(EscalationEvents::ToAgent).uuid())
                    .col(
                        ColumnDef::new(EscalationEvents::PreviousLevel)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EscalationEvents::NewLevel).integer().not_null())
                    .col(ColumnDef::new(EscalationEvents::Reason).string().not_null())
                    .col(
                        ColumnDef::new(EscalationEvents::CorrelationId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EscalationEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create audit_log_events table
        manager
            .create_table(
                Table::create()
                    .table(AuditLogEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuditLogEvents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AuditLogEvents::EventType).string().not_null())
                    .col(ColumnDef::new(AuditLogEvents::Severity).string().not_null())
                    .col(ColumnDef::new(AuditLogEvents::ActorId).uuid())
                    .col(ColumnDef::new(AuditLogEvents::TicketId).uuid())
                    .col(
                        ColumnDef::new(AuditLogEvents::ResourceType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AuditLogEvents::ResourceId).string())
                    .col(ColumnDef::new(AuditLogEvents::Action).string().not_null())
                    .col(ColumnDef::new(AuditLogEvents::Metadata).json().not_null())
                    .col(ColumnDef::new(AuditLogEvents::HashPrev).string())
                    .col(ColumnDef::new(AuditLogEvents::HashCurrent).string().not_null())
                    .col(
                        ColumnDef::new(AuditLogEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create notifications table
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::TicketId).uuid())
                    .col(ColumnDef::new(Notifications::RecipientUserId).uuid())
                    .col(ColumnDef::new(Notifications::Channel).string().not_null())
                    .col(ColumnDef::new(Notifications::TemplateKey).string().not_null())
                    .col(ColumnDef::new(Notifications::Payload).json().not_null())
                    .col(
                        ColumnDef::new(Notifications::IdempotencyKey)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuditLogEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EscalationEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SlaTimers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TicketAttachments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Areas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Areas {
    Table,
    Id,
    Name,
    ZoneCode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    Role,
    AreaId,
    OtpVerifiedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    Name,
    AreaId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TeamMembers {
    Table,
    UserId,
    TeamId,
    HierarchyLevel,
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    CustomerId,
    CreatedBy,
    AreaId,
    AssignedTeamId,
    AssignedAgentId,
    Status,
    Priority,
    Description,
    SlaDeadline,
    EscalationLevel,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Locations {
    Table,
    Id,
    TicketId,
    Latitude,
    Longitude,
    Address,
    ZoneId,
}

#[derive(DeriveIden)]
enum TicketAttachments {
    Table,
    Id,
    TicketId,
    FileUrl,
    FileName,
    FileType,
    FileSize,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SlaTimers {
    Table,
    Id,
    TicketId,
    Status,
    DueAt,
    BreachedAt,
    LastEvaluatedAt,
}

#[derive(DeriveIden)]
enum EscalationEvents {
    Table,
    Id,
    TicketId,
    SlaTimerId,
    FromAgent,
    ToAgent,
    PreviousLevel,
    NewLevel,
    Reason,
    CorrelationId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AuditLogEvents {
    Table,
    Id,
    EventType,
    Severity,
    ActorId,
    TicketId,
    ResourceType,
    ResourceId,
    Action,
    Metadata,
    HashPrev,
    HashCurrent,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    TicketId,
    RecipientUserId,
    Channel,
    TemplateKey,
    Payload,
    IdempotencyKey,
    CreatedAt,
}
