/// Basic integration tests
use imakeit_habits::*;
use tempfile::NamedTempFile;

fn new_habit(title: &str, category: &str, frequency: Frequency) -> NewHabit {
    NewHabit {
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        frequency,
    }
}

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_server_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let server = DashboardServer::new(StorageConfig::Sqlite(temp_file.path().to_path_buf())).await;
        assert!(server.is_ok());

        let server = server.unwrap();
        assert!(server.habits().is_empty());
        assert!(!server.is_onboarded());
    }

    #[tokio::test]
    async fn test_toggle_survives_restart() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let habit_id = {
            let mut server = DashboardServer::new(StorageConfig::Sqlite(db_path.clone()))
                .await
                .expect("Failed to create first server");
            let habit = server
                .habits_mut()
                .add_habit(new_habit("Weekly planning", "Productivity", Frequency::Weekly))
                .unwrap();
            server.habits_mut().toggle_completion(&habit.id).unwrap();
            habit.id
        };

        let server = DashboardServer::new(StorageConfig::Sqlite(db_path))
            .await
            .expect("Failed to create second server");

        let habit = server.habits().get(&habit_id).expect("habit should be persisted");
        assert!(habit.completed_today);
        assert_eq!(habit.current_streak, 1);
        assert_eq!(habit.longest_streak, 1);
        assert_eq!(habit.total_completions, 1);
        assert_eq!(habit.frequency, Frequency::Weekly);
    }

    #[tokio::test]
    async fn test_preferences_and_profile_survive_restart() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let mut server = DashboardServer::new(StorageConfig::Sqlite(db_path.clone())).await.unwrap();
            server.preferences_mut().set_theme(Theme::Light);
            server.preferences_mut().set_primary_color("#f59e0b").unwrap();
            let profile = UserProfile::new("Ola".into(), "ola@example.com".into(), "Consistency".into()).unwrap();
            server.register_profile(&profile);
        }

        let server = DashboardServer::new(StorageConfig::Sqlite(db_path)).await.unwrap();
        assert_eq!(server.preferences().preferences().theme, Theme::Light);
        assert_eq!(server.preferences().preferences().preset_name(), Some("Orange"));
        assert!(server.is_onboarded());
        assert_eq!(server.profile().unwrap().name, "Ola");
    }

    #[tokio::test]
    async fn test_clear_only_removes_namespaced_keys() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        // Another application sharing the same store
        let foreign = SqliteStore::new(db_path.clone()).unwrap();
        foreign.set("otherApp_settings", "{}").unwrap();

        let mut server = DashboardServer::new(StorageConfig::Sqlite(db_path)).await.unwrap();
        server
            .habits_mut()
            .add_habit(new_habit("Reading", "Education", Frequency::Daily))
            .unwrap();
        server.preferences_mut().set_theme(Theme::Light);

        let removed = server.clear_all().unwrap();

        assert_eq!(removed, 2);
        assert!(server.habits().is_empty());
        assert_eq!(server.preferences().preferences(), &Preferences::default());
        assert_eq!(foreign.get("otherApp_settings").unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_in_memory_config_does_not_touch_disk() {
        let mut server = DashboardServer::new(StorageConfig::InMemory).await.unwrap();
        let habit = server
            .habits_mut()
            .add_habit(new_habit("Strength training", "Fitness", Frequency::Daily))
            .unwrap();
        server.habits_mut().toggle_completion(&habit.id).unwrap();

        assert_eq!(server.habits().completed_today_count(), 1);

        let fresh = DashboardServer::new(StorageConfig::InMemory).await.unwrap();
        assert!(fresh.habits().is_empty());
    }

    #[test]
    fn test_export_import_between_dashboards() {
        let mut source = DashboardServer::with_gateway(PersistenceGateway::in_memory());
        for (title, category) in [("Meditation", "Health"), ("Reading", "Education")] {
            source
                .habits_mut()
                .add_habit(new_habit(title, category, Frequency::Daily))
                .unwrap();
        }
        source.preferences_mut().set_theme(Theme::Light);

        let document = source.export();
        let json = serde_json::to_string(&document).unwrap();
        let restored: ExportDocument = serde_json::from_str(&json).unwrap();

        let mut target = DashboardServer::with_gateway(PersistenceGateway::in_memory());
        let summary = target.import(restored).unwrap();

        assert_eq!(summary, ImportSummary { imported: 2, skipped: 0, profile_imported: false });
        assert_eq!(target.habits().habits(), source.habits().habits());
        assert_eq!(target.preferences().preferences().theme, Theme::Light);
    }
}
