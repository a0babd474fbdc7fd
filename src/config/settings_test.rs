// Copyright (c) 2026 deskrs
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::config::settings::Settings;

    #[test]
    fn test_default_settings_load_without_files() {
        let settings = Settings::new().expect("default settings should load");

        assert_eq!(settings.database.max_connections, Some(100));
        assert_eq!(settings.database.min_connections, Some(10));
        assert_eq!(settings.monitor.interval_secs, 60);
        assert_eq!(settings.monitor.batch_size, 500);
        assert_eq!(settings.uploads.max_file_bytes, 10 * 1024 * 1024);
        assert_eq!(settings.storage.storage_type, "local");
    }

    #[test]
    fn test_default_sla_hours_tighten_with_priority() {
        let settings = Settings::new().expect("default settings should load");

        assert!(settings.sla.critical_hours < settings.sla.high_hours);
        assert!(settings.sla.high_hours < settings.sla.medium_hours);
        assert!(settings.sla.medium_hours < settings.sla.low_hours);
    }

    #[test]
    fn test_admin_fallback_is_unset_by_default() {
        let settings = Settings::new().expect("default settings should load");

        assert!(settings.escalation.admin_email.is_none());
    }
}
