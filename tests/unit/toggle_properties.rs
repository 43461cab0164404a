/// Invariants that must hold after arbitrary toggle sequences
use imakeit_habits::*;
use proptest::prelude::*;
use proptest::sample::Index;
use std::rc::Rc;

/// Counter values biased towards small numbers and the top of the range
fn counter() -> impl Strategy<Value = u32> {
    prop_oneof![
        0u32..64,
        (u32::MAX - 4)..=u32::MAX,
        any::<u32>(),
    ]
}

fn habit(current: u32, longest: u32, completed: bool, total: u32) -> Habit {
    Habit::from_existing(
        HabitId::new(),
        "Meditation".to_string(),
        String::new(),
        "Health".to_string(),
        Frequency::Daily,
        current,
        longest,
        completed,
        total,
    )
}

/// A well-formed stored record: `longest >= current`
fn stored_habit() -> impl Strategy<Value = Habit> {
    (counter(), counter(), any::<bool>(), counter())
        .prop_map(|(a, b, completed, total)| habit(a.min(b), a.max(b), completed, total))
}

fn store_with(habits: &[Habit]) -> HabitStore {
    let gateway = Rc::new(PersistenceGateway::in_memory());
    gateway.save(HABITS_KEY, habits);
    HabitStore::new(gateway)
}

#[cfg(test)]
mod toggle_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_toggle_sequences_keep_streak_invariants(
            habits in prop::collection::vec(stored_habit(), 1..5),
            picks in prop::collection::vec(any::<Index>(), 0..100),
        ) {
            let mut store = store_with(&habits);
            prop_assert_eq!(store.len(), habits.len());

            for pick in picks {
                let i = pick.index(habits.len());
                let before = store.habits().to_vec();
                let prev = &before[i];

                let next = store.toggle_completion(&prev.id).unwrap();

                prop_assert!(next.longest_streak >= next.current_streak);
                prop_assert!(next.longest_streak >= prev.longest_streak);
                prop_assert_eq!(next.completed_today, !prev.completed_today);

                if prev.completed_today {
                    prop_assert_eq!(next.current_streak, prev.current_streak.saturating_sub(1));
                    prop_assert_eq!(next.total_completions, prev.total_completions.saturating_sub(1));
                    prop_assert_eq!(next.longest_streak, prev.longest_streak);
                } else {
                    prop_assert_eq!(next.current_streak, prev.current_streak.saturating_add(1));
                    prop_assert_eq!(next.total_completions, prev.total_completions.saturating_add(1));
                    prop_assert_eq!(next.longest_streak, prev.longest_streak.max(next.current_streak));
                }

                // Only the target record changes
                for (j, other) in store.habits().iter().enumerate() {
                    if j != i {
                        prop_assert_eq!(other, &before[j]);
                    }
                }
            }
        }

        #[test]
        fn test_complete_then_undo_restores_counters(start in stored_habit()) {
            prop_assume!(!start.completed_today);
            prop_assume!(start.current_streak < u32::MAX && start.total_completions < u32::MAX);

            let mut store = store_with(std::slice::from_ref(&start));
            store.toggle_completion(&start.id).unwrap();
            let back = store.toggle_completion(&start.id).unwrap();

            prop_assert!(!back.completed_today);
            prop_assert_eq!(back.current_streak, start.current_streak);
            prop_assert_eq!(back.total_completions, start.total_completions);
            prop_assert_eq!(back.longest_streak, start.longest_streak.max(start.current_streak + 1));
        }

        #[test]
        fn test_load_repairs_longest_below_current(
            current in counter(),
            longest in counter(),
            completed in any::<bool>(),
            total in counter(),
        ) {
            let store = store_with(&[habit(current, longest, completed, total)]);
            let loaded = &store.habits()[0];

            prop_assert_eq!(loaded.current_streak, current);
            prop_assert_eq!(loaded.longest_streak, longest.max(current));
        }

        #[test]
        fn test_toggles_on_different_habits_commute(
            a in stored_habit(),
            b in stored_habit(),
        ) {
            let habits = vec![a.clone(), b.clone()];

            let mut first = store_with(&habits);
            first.toggle_completion(&a.id).unwrap();
            first.toggle_completion(&b.id).unwrap();

            let mut second = store_with(&habits);
            second.toggle_completion(&b.id).unwrap();
            second.toggle_completion(&a.id).unwrap();

            prop_assert_eq!(first.habits(), second.habits());
        }
    }

    #[test]
    fn test_undo_of_zero_counters_clamps() {
        let start = habit(0, 5, true, 0);
        let mut store = store_with(std::slice::from_ref(&start));
        let undone = store.toggle_completion(&start.id).unwrap();

        assert!(!undone.completed_today);
        assert_eq!(undone.current_streak, 0);
        assert_eq!(undone.total_completions, 0);
        assert_eq!(undone.longest_streak, 5);
    }

    #[test]
    fn test_completion_at_max_saturates() {
        let start = habit(u32::MAX, u32::MAX, false, u32::MAX);
        let mut store = store_with(std::slice::from_ref(&start));
        let done = store.toggle_completion(&start.id).unwrap();

        assert!(done.completed_today);
        assert_eq!(done.current_streak, u32::MAX);
        assert_eq!(done.longest_streak, u32::MAX);
        assert_eq!(done.total_completions, u32::MAX);
    }
}
