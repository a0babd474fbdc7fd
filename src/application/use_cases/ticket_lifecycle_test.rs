// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::application::dto::ticket_request::{CreateTicketRequest, TicketLocationDto};
    use crate::application::use_cases::test_support::*;
    use crate::application::use_cases::ticket_lifecycle::{
        TicketLifecycleService, TransitionOptions,
    };
    use crate::config::settings::SlaSettings;
    use crate::domain::models::attachment::UploadFile;
    use crate::domain::models::team::{Area, Team, TeamMember};
    use crate::domain::models::ticket::{DomainError, Ticket, TicketPriority, TicketStatus};
    use crate::domain::models::user::{Role, User};
    use crate::domain::repositories::ticket_repository::TicketRepository;
    use crate::domain::services::audit_trail::AuditTrail;
    use crate::domain::services::sla_policy::SlaPolicy;
    use crate::domain::services::upload_policy::UploadPolicy;
    use crate::domain::services::workload_router::WorkloadRouter;
    use crate::queue::notification_queue::NotificationOrchestrator;
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    struct Fixture {
        ticket_repo: Arc<InMemoryTicketRepository>,
        team_repo: Arc<InMemoryTeamRepository>,
        user_repo: Arc<InMemoryUserRepository>,
        sla_timer_repo: Arc<InMemorySlaTimerRepository>,
        attachment_repo: Arc<InMemoryAttachmentRepository>,
        storage: Arc<InMemoryStorage>,
        audit_repo: Arc<InMemoryAuditRepository>,
        notification_repo: Arc<InMemoryNotificationRepository>,
        queue: Arc<RecordingQueueAdapter>,
        service: TicketLifecycleService,
    }

    fn fixture_with(sla_timer_repo: InMemorySlaTimerRepository) -> Fixture {
        let ticket_repo = Arc::new(InMemoryTicketRepository::default());
        let team_repo = Arc::new(InMemoryTeamRepository::default());
        let user_repo = Arc::new(InMemoryUserRepository::default());
        let sla_timer_repo = Arc::new(sla_timer_repo);
        let attachment_repo = Arc::new(InMemoryAttachmentRepository::default());
        let storage = Arc::new(InMemoryStorage::default());
        let audit_repo = Arc::new(InMemoryAuditRepository::default());
        let notification_repo = Arc::new(InMemoryNotificationRepository::default());
        let queue = Arc::new(RecordingQueueAdapter::default());

        let router = Arc::new(WorkloadRouter::new(team_repo.clone(), ticket_repo.clone()));
        let audit = Arc::new(AuditTrail::new(audit_repo.clone()));
        let notifications = Arc::new(NotificationOrchestrator::new(
            notification_repo.clone(),
            queue.clone(),
        ));
        let sla_policy = SlaPolicy::from_settings(&SlaSettings {
            low_hours: 72,
            medium_hours: 24,
            high_hours: 8,
            critical_hours: 2,
        });

        let service = TicketLifecycleService::new(
            ticket_repo.clone(),
            team_repo.clone(),
            user_repo.clone(),
            sla_timer_repo.clone(),
            attachment_repo.clone(),
            storage.clone(),
            router,
            audit,
            notifications,
            sla_policy,
            UploadPolicy::new(10 * 1024 * 1024),
        );

        Fixture {
            ticket_repo,
            team_repo,
            user_repo,
            sla_timer_repo,
            attachment_repo,
            storage,
            audit_repo,
            notification_repo,
            queue,
            service,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(InMemorySlaTimerRepository::default())
    }

    fn verified_customer(area_id: Option<Uuid>) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Customer,
            area_id,
            otp_verified_at: Some(Utc::now().into()),
            created_at: Utc::now().into(),
        }
    }

    fn seed_team(fixture: &Fixture, area_id: Uuid, agent_count: usize) -> (Uuid, Vec<Uuid>) {
        let team_id = Uuid::new_v4();
        fixture.team_repo.areas.lock().unwrap().push(Area {
            id: area_id,
            name: "North".to_string(),
            zone_code: "N1".to_string(),
        });
        fixture.team_repo.teams.lock().unwrap().push(Team {
            id: team_id,
            name: "North Response".to_string(),
            area_id,
        });
        let mut agent_ids = Vec::new();
        for _ in 0..agent_count {
            let user_id = Uuid::new_v4();
            fixture
                .team_repo
                .members
                .lock()
                .unwrap()
                .push(TeamMember {
                    user_id,
                    team_id,
                    hierarchy_level: 0,
                });
            agent_ids.push(user_id);
        }
        (team_id, agent_ids)
    }

    fn request(customer: &User, files: Vec<UploadFile>) -> CreateTicketRequest {
        CreateTicketRequest {
            customer_id: customer.id,
            created_by: customer.id,
            priority: TicketPriority::High,
            description: "Water leak in the basement utility room".to_string(),
            location: TicketLocationDto {
                latitude: 52.52,
                longitude: 13.405,
                address: "Invalidenstr. 1".to_string(),
            },
            files,
        }
    }

    fn png(name: &str) -> UploadFile {
        UploadFile {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0u8; 128],
        }
    }

    #[tokio::test]
    async fn test_create_routes_to_least_loaded_agent() {
        let fx = fixture();
        let area_id = Uuid::new_v4();
        let (team_id, agents) = seed_team(&fx, area_id, 2);
        let customer = verified_customer(Some(area_id));
        fx.user_repo.users.lock().unwrap().push(customer.clone());

        // 第一个客服已有一张未结工单
        let busy = Ticket::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            area_id,
            Some(team_id),
            Some(agents[0]),
            TicketStatus::InProgress,
            TicketPriority::Low,
            "existing".to_string(),
            Utc::now().into(),
        );
        fx.ticket_repo.insert(&busy).await.unwrap();

        let created = fx.service.create_ticket(request(&customer, vec![])).await.unwrap();

        assert_eq!(created.ticket.status, TicketStatus::Assigned);
        assert_eq!(created.ticket.assigned_team_id, Some(team_id));
        assert_eq!(created.ticket.assigned_agent_id, Some(agents[1]));
        assert_eq!(fx.sla_timer_repo.timers.lock().unwrap().len(), 1);
        assert_eq!(fx.attachment_repo.locations.lock().unwrap().len(), 1);

        let audits = fx.audit_repo.events.lock().unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].event_type, "TICKET_CREATED");

        assert_eq!(fx.queue.messages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_without_team_leaves_ticket_unassigned() {
        let fx = fixture();
        let area_id = Uuid::new_v4();
        fx.team_repo.areas.lock().unwrap().push(Area {
            id: area_id,
            name: "South".to_string(),
            zone_code: "S1".to_string(),
        });
        let customer = verified_customer(Some(area_id));
        fx.user_repo.users.lock().unwrap().push(customer.clone());

        let created = fx.service.create_ticket(request(&customer, vec![])).await.unwrap();

        assert_eq!(created.ticket.status, TicketStatus::Created);
        assert_eq!(created.ticket.assigned_team_id, None);
        assert_eq!(created.ticket.assigned_agent_id, None);
        // 无人接收，不应有分配通知
        assert!(fx.queue.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_backfills_default_area_when_none_exists() {
        let fx = fixture();
        let customer = verified_customer(None);
        fx.user_repo.users.lock().unwrap().push(customer.clone());

        let created = fx.service.create_ticket(request(&customer, vec![])).await.unwrap();

        let areas = fx.team_repo.areas.lock().unwrap();
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].zone_code, "AUTO_DEFAULT");
        assert_eq!(created.ticket.area_id, areas[0].id);
    }

    #[tokio::test]
    async fn test_unverified_customer_is_rejected_without_side_effects() {
        let fx = fixture();
        let mut customer = verified_customer(None);
        customer.otp_verified_at = None;
        fx.user_repo.users.lock().unwrap().push(customer.clone());

        let result = fx.service.create_ticket(request(&customer, vec![])).await;

        assert!(matches!(result, Err(DomainError::Unauthorized(_))));
        assert!(fx.ticket_repo.tickets.lock().unwrap().is_empty());
        assert!(fx.audit_repo.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_agent_role_cannot_create_tickets() {
        let fx = fixture();
        let mut agent = verified_customer(None);
        agent.role = Role::Agent;
        fx.user_repo.users.lock().unwrap().push(agent.clone());

        let result = fx.service.create_ticket(request(&agent, vec![])).await;

        assert!(matches!(result, Err(DomainError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_short_description_fails_validation() {
        let fx = fixture();
        let customer = verified_customer(None);
        fx.user_repo.users.lock().unwrap().push(customer.clone());

        let mut req = request(&customer, vec![]);
        req.description = "short".to_string();

        let result = fx.service.create_ticket(req).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(fx.ticket_repo.tickets.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_creation_rolls_back_ticket_and_uploads() {
        let fx = fixture_with(InMemorySlaTimerRepository {
            fail_inserts: true,
            ..Default::default()
        });
        let area_id = Uuid::new_v4();
        seed_team(&fx, area_id, 1);
        let customer = verified_customer(Some(area_id));
        fx.user_repo.users.lock().unwrap().push(customer.clone());

        let result = fx
            .service
            .create_ticket(request(&customer, vec![png("leak.png")]))
            .await;

        assert!(result.is_err());
        assert!(fx.ticket_repo.tickets.lock().unwrap().is_empty());
        assert!(fx.storage.objects.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_uploaded_files_land_under_the_ticket_prefix() {
        let fx = fixture();
        let area_id = Uuid::new_v4();
        seed_team(&fx, area_id, 1);
        let customer = verified_customer(Some(area_id));
        fx.user_repo.users.lock().unwrap().push(customer.clone());

        let created = fx
            .service
            .create_ticket(request(&customer, vec![png("leak.png"), png("meter.png")]))
            .await
            .unwrap();

        assert_eq!(created.attachments.len(), 2);
        let prefix = format!("tickets/{}/", created.ticket.id);
        for attachment in &created.attachments {
            assert!(attachment.file_url.starts_with(&prefix));
        }
        assert_eq!(fx.storage.objects.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_assignment_notifications_are_deduplicated() {
        let fx = fixture();
        let area_id = Uuid::new_v4();
        seed_team(&fx, area_id, 1);
        let customer = verified_customer(Some(area_id));
        fx.user_repo.users.lock().unwrap().push(customer.clone());

        fx.service.create_ticket(request(&customer, vec![])).await.unwrap();

        assert_eq!(fx.notification_repo.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_illegal_transition_is_rejected() {
        let fx = fixture();
        let ticket = Ticket::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            None,
            TicketStatus::Created,
            TicketPriority::Medium,
            "desc".to_string(),
            Utc::now().into(),
        );
        fx.ticket_repo.insert(&ticket).await.unwrap();

        let result = fx
            .service
            .transition_ticket(
                ticket.id,
                TicketStatus::Closed,
                TransitionOptions {
                    force: false,
                    actor_role: Role::Manager,
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::InvalidTransition { .. })));
    }

    #[tokio::test]
    async fn test_legal_transition_updates_status_and_audits() {
        let fx = fixture();
        let ticket = Ticket::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            Some(Uuid::new_v4()),
            TicketStatus::Assigned,
            TicketPriority::Medium,
            "desc".to_string(),
            Utc::now().into(),
        );
        fx.ticket_repo.insert(&ticket).await.unwrap();

        let updated = fx
            .service
            .transition_ticket(
                ticket.id,
                TicketStatus::InProgress,
                TransitionOptions {
                    force: false,
                    actor_role: Role::Agent,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, TicketStatus::InProgress);
        let audits = fx.audit_repo.events.lock().unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].event_type, "TICKET_STATUS_CHANGED");
    }

    #[tokio::test]
    async fn test_force_transition_requires_the_capability() {
        let fx = fixture();
        let ticket = Ticket::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            None,
            TicketStatus::Created,
            TicketPriority::Medium,
            "desc".to_string(),
            Utc::now().into(),
        );
        fx.ticket_repo.insert(&ticket).await.unwrap();

        let denied = fx
            .service
            .transition_ticket(
                ticket.id,
                TicketStatus::Closed,
                TransitionOptions {
                    force: true,
                    actor_role: Role::Manager,
                },
            )
            .await;
        assert!(matches!(denied, Err(DomainError::Unauthorized(_))));

        let forced = fx
            .service
            .transition_ticket(
                ticket.id,
                TicketStatus::Closed,
                TransitionOptions {
                    force: true,
                    actor_role: Role::Admin,
                },
            )
            .await
            .unwrap();
        assert_eq!(forced.status, TicketStatus::Closed);
    }

    #[tokio::test]
    async fn test_transition_on_missing_ticket_is_not_found() {
        let fx = fixture();

        let result = fx
            .service
            .transition_ticket(
                Uuid::new_v4(),
                TicketStatus::InProgress,
                TransitionOptions {
                    force: false,
                    actor_role: Role::Agent,
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }
}
