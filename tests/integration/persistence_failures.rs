/// Persistence failures must never fail a store operation
use imakeit_habits::*;
use std::rc::Rc;

/// Backend whose every operation fails
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn keys_with_prefix(&self, _prefix: &str) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove_prefix(&self, _prefix: &str) -> Result<usize, StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

/// Backend that reads fine but rejects writes
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        self.0.keys_with_prefix(prefix)
    }

    fn remove_prefix(&self, _prefix: &str) -> Result<usize, StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
}

#[cfg(test)]
mod persistence_failure_tests {
    use super::*;

    #[test]
    fn test_store_works_in_memory_when_backend_is_down() {
        let gateway = Rc::new(PersistenceGateway::new(Box::new(UnavailableStore)));
        let mut store = HabitStore::new(gateway);
        assert!(store.is_empty());

        let habit = store
            .add_habit(NewHabit {
                title: "Meditation".to_string(),
                description: String::new(),
                category: "Health".to_string(),
                frequency: Frequency::Daily,
            })
            .unwrap();

        let toggled = store.toggle_completion(&habit.id).unwrap();
        assert!(toggled.completed_today);
        assert_eq!(store.get(&habit.id).unwrap().current_streak, 1);
    }

    #[test]
    fn test_loaded_state_stays_authoritative_when_writes_fail() {
        let backing = MemoryStore::new();
        let habit = Habit::from_existing(
            HabitId::new(),
            "Reading".to_string(),
            String::new(),
            "Education".to_string(),
            Frequency::Daily,
            8,
            15,
            false,
            23,
        );
        backing
            .set(
                &format!("{}{}", NAMESPACE, HABITS_KEY),
                &serde_json::to_string(&vec![habit.clone()]).unwrap(),
            )
            .unwrap();

        let gateway = Rc::new(PersistenceGateway::new(Box::new(ReadOnlyStore(backing))));
        let mut store = HabitStore::new(Rc::clone(&gateway));
        assert_eq!(store.len(), 1);

        let toggled = store.toggle_completion(&habit.id).unwrap();
        assert_eq!(toggled.current_streak, 9);

        // The write was dropped, so storage still holds the old record
        let stored: Vec<Habit> = gateway.load(HABITS_KEY).unwrap();
        assert_eq!(stored[0].current_streak, 8);
    }

    #[test]
    fn test_undecodable_collection_loads_empty() {
        let backing = MemoryStore::new();
        backing
            .set(&format!("{}{}", NAMESPACE, HABITS_KEY), "{not json")
            .unwrap();

        let store = HabitStore::new(Rc::new(PersistenceGateway::new(Box::new(backing))));
        assert!(store.is_empty());
        assert_eq!(store.average_streak(), 0.0);
    }

    #[test]
    fn test_preferences_fall_back_to_defaults() {
        let gateway = Rc::new(PersistenceGateway::new(Box::new(UnavailableStore)));
        let mut prefs = PreferenceStore::new(gateway);

        assert_eq!(prefs.preferences(), &Preferences::default());
        prefs.set_theme(Theme::Light);
        assert_eq!(prefs.preferences().theme, Theme::Light);
    }

    #[test]
    fn test_clear_all_reports_storage_failure() {
        let mut server = DashboardServer::with_gateway(PersistenceGateway::new(Box::new(UnavailableStore)));
        assert!(matches!(server.clear_all(), Err(ServerError::Storage(_))));
        assert!(!server.is_onboarded());
    }
}
