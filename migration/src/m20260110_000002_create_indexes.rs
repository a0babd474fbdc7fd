use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Hot path for the SLA monitor sweep
        manager
            .create_index(
                Index::create()
                    .name("idx_sla_timers_status_due_at")
                    .table(SlaTimers::Table)
                    .col(SlaTimers::Status)
                    .col(SlaTimers::DueAt)
                    .to_owned(),
            )
            .await?;

        // Open ticket counting per agent
        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_assigned_agent_status")
                    .table(Tickets::Table)
                    .col(Tickets::AssignedAgentId)
                    .col(Tickets::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teams_area_id")
                    .table(Teams::Table)
                    .col(Teams::AreaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_members_team_id_level")
                    .table(TeamMembers::Table)
                    .col(TeamMembers::TeamId)
                    .col(TeamMembers::HierarchyLevel)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_escalation_events_ticket_id")
                    .table(EscalationEvents::Table)
                    .col(EscalationEvents::TicketId)
                    .to_owned(),
            )
            .await?;

        // Chain tail lookup reads the newest row
        manager
            .create_index(
                Index::create()
                    .name("idx_audit_log_events_created_at")
                    .table(AuditLogEvents::Table)
                    .col(AuditLogEvents::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_audit_log_events_created_at").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_escalation_events_ticket_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_team_members_team_id_level").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_teams_area_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tickets_assigned_agent_status")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_sla_timers_status_due_at").to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SlaTimers {
    Table,
    Status,
    DueAt,
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    AssignedAgentId,
    Status,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    AreaId,
}

#[derive(DeriveIden)]
enum TeamMembers {
    Table,
    TeamId,
    HierarchyLevel,
}

#[derive(DeriveIden)]
enum EscalationEvents {
    Table,
    TicketId,
}

#[derive(DeriveIden)]
enum AuditLogEvents {
    Table,
    CreatedAt,
}
