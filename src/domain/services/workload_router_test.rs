// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::domain::models::team::{Area, Team, TeamMember};
    use crate::domain::models::ticket::{Ticket, TicketStatus};
    use crate::domain::repositories::team_repository::TeamRepository;
    use crate::domain::repositories::ticket_repository::{RepositoryError, TicketRepository};
    use crate::domain::services::workload_router::{least_loaded, WorkloadRouter};
    use async_trait::async_trait;
    use chrono::{DateTime, FixedOffset};
    use std::collections::HashMap;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockTeamRepository {
        team: Option<Team>,
        members: Vec<TeamMember>,
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepository {
        async fn find_first_area(&self) -> Result<Option<Area>, RepositoryError> {
            Ok(None)
        }

        async fn insert_area(&self, area: &Area) -> Result<Area, RepositoryError> {
            Ok(area.clone())
        }

        async fn find_team_by_area(&self, _area_id: Uuid) -> Result<Option<Team>, RepositoryError> {
            Ok(self.team.clone())
        }

        async fn list_members(&self, _team_id: Uuid) -> Result<Vec<TeamMember>, RepositoryError> {
            Ok(self.members.clone())
        }

        async fn find_member(
            &self,
            _team_id: Uuid,
            user_id: Uuid,
        ) -> Result<Option<TeamMember>, RepositoryError> {
            Ok(self.members.iter().find(|m| m.user_id == user_id).cloned())
        }
    }

    struct MockTicketRepository {
        open_counts: HashMap<Uuid, i64>,
    }

    #[async_trait]
    impl TicketRepository for MockTicketRepository {
        async fn insert(&self, ticket: &Ticket) -> Result<Ticket, RepositoryError> {
            Ok(ticket.clone())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Ticket>, RepositoryError> {
            Ok(None)
        }

        async fn update_status(
            &self,
            _id: Uuid,
            _status: TicketStatus,
            _updated_at: DateTime<FixedOffset>,
        ) -> Result<Ticket, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn apply_escalation(
            &self,
            _id: Uuid,
            _team_id: Option<Uuid>,
            _agent_id: Option<Uuid>,
            _new_level: i32,
            _updated_at: DateTime<FixedOffset>,
        ) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn delete_hard(&self, _id: Uuid) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn count_open_by_agents(
            &self,
            agent_ids: &[Uuid],
        ) -> Result<HashMap<Uuid, i64>, RepositoryError> {
            let mut counts = HashMap::new();
            for id in agent_ids {
                counts.insert(*id, self.open_counts.get(id).copied().unwrap_or(0));
            }
            Ok(counts)
        }
    }

    fn member(team_id: Uuid, user_id: Uuid, level: i32) -> TeamMember {
        TeamMember {
            user_id,
            team_id,
            hierarchy_level: level,
        }
    }

    #[test]
    fn test_least_loaded_picks_minimum_count() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let counts = HashMap::from([(a, 2), (b, 0), (c, 1)]);

        assert_eq!(least_loaded(&[a, b, c], &counts), Some(b));
    }

    #[test]
    fn test_least_loaded_tie_breaks_on_first_encountered() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let counts = HashMap::from([(a, 1), (b, 1)]);

        assert_eq!(least_loaded(&[a, b], &counts), Some(a));
        assert_eq!(least_loaded(&[b, a], &counts), Some(b));
    }

    #[test]
    fn test_least_loaded_treats_missing_counts_as_zero() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let counts = HashMap::from([(a, 1)]);

        assert_eq!(least_loaded(&[a, b], &counts), Some(b));
    }

    #[tokio::test]
    async fn test_no_team_for_area_returns_empty_routing() {
        let team_repo = Arc::new(MockTeamRepository {
            team: None,
            members: vec![],
        });
        let ticket_repo = Arc::new(MockTicketRepository {
            open_counts: HashMap::new(),
        });
        let router = WorkloadRouter::new(team_repo, ticket_repo);

        let routing = router.select_team_and_agent(Uuid::new_v4()).await.unwrap();
        assert_eq!(routing.team_id, None);
        assert_eq!(routing.agent_id, None);
    }

    #[tokio::test]
    async fn test_team_without_members_routes_team_only() {
        let team_id = Uuid::new_v4();
        let area_id = Uuid::new_v4();
        let team_repo = Arc::new(MockTeamRepository {
            team: Some(Team {
                id: team_id,
                name: "North".to_string(),
                area_id,
            }),
            members: vec![],
        });
        let ticket_repo = Arc::new(MockTicketRepository {
            open_counts: HashMap::new(),
        });
        let router = WorkloadRouter::new(team_repo, ticket_repo);

        let routing = router.select_team_and_agent(area_id).await.unwrap();
        assert_eq!(routing.team_id, Some(team_id));
        assert_eq!(routing.agent_id, None);
    }

    #[tokio::test]
    async fn test_routing_selects_least_loaded_member() {
        let team_id = Uuid::new_v4();
        let area_id = Uuid::new_v4();
        let busy = Uuid::new_v4();
        let idle = Uuid::new_v4();
        let moderate = Uuid::new_v4();

        let team_repo = Arc::new(MockTeamRepository {
            team: Some(Team {
                id: team_id,
                name: "North".to_string(),
                area_id,
            }),
            members: vec![
                member(team_id, busy, 0),
                member(team_id, idle, 0),
                member(team_id, moderate, 0),
            ],
        });
        let ticket_repo = Arc::new(MockTicketRepository {
            open_counts: HashMap::from([(busy, 2), (idle, 0), (moderate, 1)]),
        });
        let router = WorkloadRouter::new(team_repo, ticket_repo);

        let routing = router.select_team_and_agent(area_id).await.unwrap();
        assert_eq!(routing.team_id, Some(team_id));
        assert_eq!(routing.agent_id, Some(idle));
    }
}
