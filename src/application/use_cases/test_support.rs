// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 用例测试共用的内存仓库实现

use crate::domain::models::attachment::TicketAttachment;
use crate::domain::models::audit::AuditEvent;
use crate::domain::models::escalation::{EscalationEvent, SlaTimer, SlaTimerStatus};
use crate::domain::models::notification::NotificationRequest;
use crate::domain::models::team::{Area, Team, TeamMember};
use crate::domain::models::ticket::{Ticket, TicketLocation, TicketStatus};
use crate::domain::models::user::User;
use crate::domain::repositories::attachment_repository::AttachmentRepository;
use crate::domain::repositories::audit_repository::AuditRepository;
use crate::domain::repositories::escalation_repository::EscalationRepository;
use crate::domain::repositories::notification_repository::NotificationRepository;
use crate::domain::repositories::sla_timer_repository::SlaTimerRepository;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::ticket_repository::{RepositoryError, TicketRepository};
use crate::domain::repositories::user_repository::UserRepository;
use crate::queue::notification_queue::{QueueAdapter, QueueError, QueueMessage};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryTicketRepository {
    pub tickets: Mutex<HashMap<Uuid, Ticket>>,
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<Ticket, RepositoryError> {
        self.tickets
            .lock()
            .unwrap()
            .insert(ticket.id, ticket.clone());
        Ok(ticket.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, RepositoryError> {
        Ok(self.tickets.lock().unwrap().get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<Ticket, RepositoryError> {
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        ticket.status = status;
        ticket.updated_at = updated_at;
        Ok(ticket.clone())
    }

    async fn apply_escalation(
        &self,
        id: Uuid,
        team_id: Option<Uuid>,
        agent_id: Option<Uuid>,
        new_level: i32,
        updated_at: DateTime<FixedOffset>,
    ) -> Result<(), RepositoryError> {
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        ticket.assigned_team_id = team_id;
        ticket.assigned_agent_id = agent_id;
        ticket.escalation_level = new_level;
        ticket.status = TicketStatus::Reassigned;
        ticket.updated_at = updated_at;
        Ok(())
    }

    async fn delete_hard(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.tickets.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn count_open_by_agents(
        &self,
        agent_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, i64>, RepositoryError> {
        let tickets = self.tickets.lock().unwrap();
        let mut counts: HashMap<Uuid, i64> = agent_ids.iter().map(|id| (*id, 0)).collect();
        for ticket in tickets.values() {
            if !ticket.status.is_open() || ticket.deleted_at.is_some() {
                continue;
            }
            if let Some(agent_id) = ticket.assigned_agent_id {
                if let Some(count) = counts.get_mut(&agent_id) {
                    *count += 1;
                }
            }
        }
        Ok(counts)
    }
}

#[derive(Default)]
pub struct InMemoryTeamRepository {
    pub areas: Mutex<Vec<Area>>,
    pub teams: Mutex<Vec<Team>>,
    pub members: Mutex<Vec<TeamMember>>,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find_first_area(&self) -> Result<Option<Area>, RepositoryError> {
        Ok(self.areas.lock().unwrap().first().cloned())
    }

    async fn insert_area(&self, area: &Area) -> Result<Area, RepositoryError> {
        self.areas.lock().unwrap().push(area.clone());
        Ok(area.clone())
    }

    async fn find_team_by_area(&self, area_id: Uuid) -> Result<Option<Team>, RepositoryError> {
        Ok(self
            .teams
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.area_id == area_id)
            .cloned())
    }

    async fn list_members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, RepositoryError> {
        let mut members: Vec<TeamMember> = self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect();
        members.sort_by_key(|m| m.hierarchy_level);
        Ok(members)
    }

    async fn find_member(
        &self,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TeamMember>, RepositoryError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.team_id == team_id && m.user_id == user_id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    pub users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_top_level_admin(
        &self,
        preferred_email: Option<&str>,
    ) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        if let Some(email) = preferred_email {
            if let Some(user) = users.iter().find(|u| u.email == email) {
                return Ok(Some(user.clone()));
            }
        }
        Ok(users
            .iter()
            .find(|u| u.role == crate::domain::models::user::Role::Admin)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemorySlaTimerRepository {
    pub timers: Mutex<Vec<SlaTimer>>,
    pub fail_inserts: bool,
}

#[async_trait]
impl SlaTimerRepository for InMemorySlaTimerRepository {
    async fn insert(&self, timer: &SlaTimer) -> Result<SlaTimer, RepositoryError> {
        if self.fail_inserts {
            return Err(RepositoryError::NotFound);
        }
        self.timers.lock().unwrap().push(timer.clone());
        Ok(timer.clone())
    }

    async fn find_due(
        &self,
        now: DateTime<FixedOffset>,
        limit: u64,
    ) -> Result<Vec<SlaTimer>, RepositoryError> {
        Ok(self
            .timers
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.status == SlaTimerStatus::Running && t.due_at < now)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn mark_breached(
        &self,
        id: Uuid,
        now: DateTime<FixedOffset>,
    ) -> Result<bool, RepositoryError> {
        let mut timers = self.timers.lock().unwrap();
        match timers
            .iter_mut()
            .find(|t| t.id == id && t.status == SlaTimerStatus::Running)
        {
            Some(timer) => {
                timer.status = SlaTimerStatus::Breached;
                timer.breached_at = Some(now);
                timer.last_evaluated_at = Some(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryAttachmentRepository {
    pub attachments: Mutex<Vec<TicketAttachment>>,
    pub locations: Mutex<Vec<TicketLocation>>,
}

#[async_trait]
impl AttachmentRepository for InMemoryAttachmentRepository {
    async fn insert_attachments(
        &self,
        attachments: &[TicketAttachment],
    ) -> Result<Vec<TicketAttachment>, RepositoryError> {
        self.attachments
            .lock()
            .unwrap()
            .extend(attachments.iter().cloned());
        Ok(attachments.to_vec())
    }

    async fn insert_location(&self, location: &TicketLocation) -> Result<(), RepositoryError> {
        self.locations.lock().unwrap().push(location.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStorage {
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl StorageRepository for InMemoryStorage {
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.objects.lock().unwrap().contains_key(key))
    }
}

#[derive(Default)]
pub struct InMemoryAuditRepository {
    pub events: Mutex<Vec<AuditEvent>>,
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn latest_hash(&self) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .last()
            .map(|e| e.hash_current.clone()))
    }

    async fn insert(&self, event: &AuditEvent) -> Result<(), RepositoryError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn list_ordered(&self) -> Result<Vec<AuditEvent>, RepositoryError> {
        Ok(self.events.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryEscalationRepository {
    pub events: Mutex<Vec<EscalationEvent>>,
}

#[async_trait]
impl EscalationRepository for InMemoryEscalationRepository {
    async fn insert(&self, event: &EscalationEvent) -> Result<EscalationEvent, RepositoryError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(event.clone())
    }

    async fn list_by_ticket(
        &self,
        ticket_id: Uuid,
    ) -> Result<Vec<EscalationEvent>, RepositoryError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.ticket_id == ticket_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    pub requests: Mutex<Vec<NotificationRequest>>,
    pub seen_keys: Mutex<HashSet<String>>,
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn insert(&self, request: &NotificationRequest) -> Result<bool, RepositoryError> {
        if !self
            .seen_keys
            .lock()
            .unwrap()
            .insert(request.idempotency_key.clone())
        {
            return Ok(false);
        }
        self.requests.lock().unwrap().push(request.clone());
        Ok(true)
    }
}

#[derive(Default)]
pub struct RecordingQueueAdapter {
    pub messages: Mutex<Vec<QueueMessage>>,
}

#[async_trait]
impl QueueAdapter for RecordingQueueAdapter {
    async fn enqueue(&self, message: QueueMessage) -> Result<(), QueueError> {
        self.messages.lock().unwrap().push(message);
        Ok(())
    }
}
