/// Basic unit tests to verify core functionality
use imakeit_habits::*;
use std::rc::Rc;

fn habit_with(current: u32, longest: u32, completed: bool, total: u32) -> Habit {
    Habit::from_existing(
        HabitId::new(),
        "Morning meditation".to_string(),
        "10 minutes of mindfulness every morning".to_string(),
        "Health".to_string(),
        Frequency::Daily,
        current,
        longest,
        completed,
        total,
    )
}

fn store_with(habits: Vec<Habit>) -> HabitStore {
    let gateway = Rc::new(PersistenceGateway::in_memory());
    gateway.save(HABITS_KEY, &habits);
    HabitStore::new(gateway)
}

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new(
            "Test Habit".to_string(),
            "A test habit".to_string(),
            "Health".to_string(),
            Frequency::Daily,
        );

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.title, "Test Habit");
        assert!(!habit.completed_today);
    }

    #[test]
    fn test_undo_example() {
        let habit = habit_with(15, 28, true, 47);
        let mut store = store_with(vec![habit.clone()]);

        let updated = store.toggle_completion(&habit.id).unwrap();

        assert_eq!(updated.current_streak, 14);
        assert_eq!(updated.longest_streak, 28);
        assert!(!updated.completed_today);
        assert_eq!(updated.total_completions, 46);
    }

    #[test]
    fn test_complete_at_longest_example() {
        let habit = habit_with(28, 28, false, 10);
        let mut store = store_with(vec![habit.clone()]);

        let updated = store.toggle_completion(&habit.id).unwrap();

        assert_eq!(updated.current_streak, 29);
        assert_eq!(updated.longest_streak, 29);
        assert!(updated.completed_today);
        assert_eq!(updated.total_completions, 11);
    }

    #[test]
    fn test_complete_from_zero_example() {
        let habit = habit_with(0, 5, false, 0);
        let mut store = store_with(vec![habit.clone()]);

        let updated = store.toggle_completion(&habit.id).unwrap();

        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.longest_streak, 5);
        assert_eq!(updated.total_completions, 1);
        assert!(updated.completed_today);
    }

    #[test]
    fn test_unknown_id_is_not_found_and_leaves_store_untouched() {
        let mut store = store_with(vec![habit_with(3, 6, false, 12), habit_with(5, 12, true, 34)]);
        let before = serde_json::to_string(store.habits()).unwrap();

        let result = store.toggle_completion(&HabitId::new());

        assert!(matches!(result, Err(StoreError::HabitNotFound { .. })));
        assert_eq!(serde_json::to_string(store.habits()).unwrap(), before);
    }

    #[test]
    fn test_average_streak_of_empty_collection_is_zero() {
        let store = store_with(Vec::new());
        assert_eq!(store.average_streak(), 0.0);
        assert_eq!(store.stats().rounded_average_streak(), 0);
    }

    #[test]
    fn test_dashboard_aggregates() {
        let store = store_with(vec![
            habit_with(15, 28, true, 47),
            habit_with(8, 15, false, 23),
            habit_with(5, 12, true, 34),
            habit_with(3, 6, false, 12),
        ]);

        assert_eq!(store.completed_today_count(), 2);
        assert_eq!(store.total_streak_sum(), 31);
        assert_eq!(store.stats().rounded_average_streak(), 8);
    }

    #[test]
    fn test_preferences_default_to_dark_indigo() {
        let prefs = PreferenceStore::new(Rc::new(PersistenceGateway::in_memory()));
        assert_eq!(prefs.preferences().theme, Theme::Dark);
        assert_eq!(prefs.preferences().primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_analytics_engine_creation() {
        let analytics = AnalyticsEngine::new();
        let insights = analytics.generate_insights(&[]);
        assert_eq!(insights.len(), 1);
    }
}
