// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::config::settings::SlaSettings;
    use crate::domain::models::ticket::TicketPriority;
    use crate::domain::services::sla_policy::SlaPolicy;
    use chrono::{DateTime, FixedOffset, Utc};

    fn policy() -> SlaPolicy {
        SlaPolicy::from_settings(&SlaSettings {
            low_hours: 72,
            medium_hours: 24,
            high_hours: 8,
            critical_hours: 2,
        })
    }

    #[test]
    fn test_critical_deadline_is_strictly_earlier_than_low() {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let critical = policy().deadline_for(TicketPriority::Critical, now);
        let low = policy().deadline_for(TicketPriority::Low, now);

        assert!(critical < low);
    }

    #[test]
    fn test_deadlines_order_by_priority() {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let p = policy();
        let critical = p.deadline_for(TicketPriority::Critical, now);
        let high = p.deadline_for(TicketPriority::High, now);
        let medium = p.deadline_for(TicketPriority::Medium, now);
        let low = p.deadline_for(TicketPriority::Low, now);

        assert!(critical < high && high < medium && medium < low);
    }

    #[test]
    fn test_durations_come_from_settings() {
        let p = SlaPolicy::from_settings(&SlaSettings {
            low_hours: 1,
            medium_hours: 2,
            high_hours: 3,
            critical_hours: 4,
        });

        assert_eq!(p.duration_for(TicketPriority::Low).num_hours(), 1);
        assert_eq!(p.duration_for(TicketPriority::Critical).num_hours(), 4);
    }
}
