/// Aggregates and insights derived from the habit collection
///
/// Everything here is computed from the records passed in; nothing is
/// cached between calls.

use serde::Serialize;

use crate::domain::Habit;

/// Number of habits whose current period is already completed
pub fn completed_today_count(habits: &[Habit]) -> usize {
    habits.iter().filter(|h| h.completed_today).count()
}

/// Sum of current streaks across all habits
pub fn total_streak_sum(habits: &[Habit]) -> u64 {
    habits.iter().map(|h| u64::from(h.current_streak)).sum()
}

/// Mean current streak; 0 for an empty collection
pub fn average_streak(habits: &[Habit]) -> f64 {
    if habits.is_empty() {
        return 0.0;
    }
    total_streak_sum(habits) as f64 / habits.len() as f64
}

/// Distinct categories in first-seen order
pub fn categories(habits: &[Habit]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for habit in habits {
        if !seen.iter().any(|c| c == &habit.category) {
            seen.push(habit.category.clone());
        }
    }
    seen
}

/// Dashboard summary of the whole collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    pub total_habits: usize,
    pub completed_today: usize,
    pub total_streak_sum: u64,
    pub average_streak: f64,
    pub categories: Vec<String>,
}

impl HabitStats {
    pub fn from_habits(habits: &[Habit]) -> Self {
        Self {
            total_habits: habits.len(),
            completed_today: completed_today_count(habits),
            total_streak_sum: total_streak_sum(habits),
            average_streak: average_streak(habits),
            categories: categories(habits),
        }
    }

    /// Average streak rounded to the whole number the dashboard shows
    pub fn rounded_average_streak(&self) -> u64 {
        self.average_streak.round() as u64
    }
}

/// Analytics engine for turning the collection into readable insights
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new() -> Self {
        Self {}
    }

    pub fn summarize(&self, habits: &[Habit]) -> HabitStats {
        HabitStats::from_habits(habits)
    }

    /// Generate short, human-readable observations about the collection
    pub fn generate_insights(&self, habits: &[Habit]) -> Vec<String> {
        let mut insights = Vec::new();

        if habits.is_empty() {
            insights.push("Start by creating your first habit to track!".to_string());
            return insights;
        }

        let stats = self.summarize(habits);
        if stats.completed_today == stats.total_habits {
            insights.push(format!(
                "All {} habits are done for this period. Great work!",
                stats.total_habits
            ));
        } else {
            let pending: Vec<&str> = habits
                .iter()
                .filter(|h| !h.completed_today)
                .map(|h| h.title.as_str())
                .collect();
            insights.push(format!("Still to do: {}", pending.join(", ")));
        }

        if let Some(best) = habits.iter().max_by_key(|h| h.current_streak) {
            if best.current_streak > 0 {
                insights.push(format!(
                    "Longest running streak: {} at {} {}s",
                    best.title,
                    best.current_streak,
                    best.frequency.period_name()
                ));
            }
        }

        for habit in habits {
            if habit.current_streak > 1 && habit.current_streak == habit.longest_streak {
                insights.push(format!(
                    "{} is at its personal best of {}",
                    habit.title, habit.longest_streak
                ));
            }
        }

        insights
    }
}
