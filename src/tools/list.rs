/// Tool for listing habits
///
/// This module implements the habit_list MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::Habit;
use crate::store::HabitStore;
use crate::tools::ToolError;

/// Parameters for listing habits
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListHabitsParams {
    /// Only habits in this category (case-insensitive)
    pub category: Option<String>,
    /// Sort by: title, streak, longest, completions (default: stored order)
    pub sort_by: Option<String>,
    /// Only habits not yet completed this period
    pub pending_only: Option<bool>,
}

/// Information about a habit in the list
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: String,
    #[serde(skip)]
    short_id: String,
    pub title: String,
    pub category: String,
    pub frequency: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: u32,
    pub completed_today: bool,
}

impl From<&Habit> for HabitSummary {
    fn from(habit: &Habit) -> Self {
        Self {
            habit_id: habit.id.to_string(),
            short_id: habit.id.short(),
            title: habit.title.clone(),
            category: habit.category.clone(),
            frequency: habit.frequency.to_string(),
            current_streak: habit.current_streak,
            longest_streak: habit.longest_streak,
            total_completions: habit.total_completions,
            completed_today: habit.completed_today,
        }
    }
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SortKey {
    Title,
    Streak,
    Longest,
    Completions,
}

fn parse_sort_key(raw: &str) -> Result<SortKey, ToolError> {
    match raw.trim().to_lowercase().as_str() {
        "title" | "name" => Ok(SortKey::Title),
        "streak" => Ok(SortKey::Streak),
        "longest" => Ok(SortKey::Longest),
        "completions" | "total_completions" => Ok(SortKey::Completions),
        other => Err(ToolError::InvalidArgument(format!(
            "Invalid sort_by '{}'. Valid options: title, streak, longest, completions",
            other
        ))),
    }
}

/// List habits from the store
pub fn list_habits(
    store: &HabitStore,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, ToolError> {
    let sort_key = params.sort_by.as_deref().map(parse_sort_key).transpose()?;
    let category = params.category.map(|c| c.trim().to_lowercase());
    let pending_only = params.pending_only.unwrap_or(false);

    let mut habits: Vec<&Habit> = store
        .habits()
        .iter()
        .filter(|h| match &category {
            Some(c) => &h.category.to_lowercase() == c,
            None => true,
        })
        .filter(|h| !pending_only || !h.completed_today)
        .collect();

    // Streak-like keys sort descending, title ascending
    match sort_key {
        Some(SortKey::Title) => habits.sort_by_key(|h| h.title.to_lowercase()),
        Some(SortKey::Streak) => habits.sort_by(|a, b| b.current_streak.cmp(&a.current_streak)),
        Some(SortKey::Longest) => habits.sort_by(|a, b| b.longest_streak.cmp(&a.longest_streak)),
        Some(SortKey::Completions) => habits.sort_by(|a, b| b.total_completions.cmp(&a.total_completions)),
        None => {}
    }

    let summaries: Vec<HabitSummary> = habits.into_iter().map(HabitSummary::from).collect();

    let message = if summaries.is_empty() {
        "No habits found. Create your first habit to get started!".to_string()
    } else {
        let details = summaries
            .iter()
            .map(|h| {
                format!(
                    "{} **{}** ({}) [{}]\n   📅 {} | 🔥 Streak: {} | 🏆 Best: {} | ✅ Total: {}",
                    if h.completed_today { "✅" } else { "⬜" },
                    h.title,
                    h.category,
                    h.short_id,
                    h.frequency,
                    h.current_streak,
                    h.longest_streak,
                    h.total_completions
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("📋 **Habits** ({})\n\n{}", summaries.len(), details)
    };

    Ok(ListHabitsResponse {
        habits: summaries,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::domain::{Frequency, HabitId};
    use crate::storage::PersistenceGateway;
    use crate::store::NewHabit;

    fn populated() -> HabitStore {
        let mut store = HabitStore::new(Rc::new(PersistenceGateway::in_memory()));
        for (title, category) in [("Reading", "Education"), ("Meditation", "Health"), ("Running", "Health")] {
            store.add_habit(NewHabit {
                title: title.to_string(),
                description: String::new(),
                category: category.to_string(),
                frequency: Frequency::Daily,
            }).unwrap();
        }
        let running = store.habits()[2].id.clone();
        store.toggle_completion(&running).unwrap();
        store
    }

    #[test]
    fn test_filter_by_category() {
        let store = populated();
        let response = list_habits(&store, ListHabitsParams {
            category: Some("health".to_string()),
            ..Default::default()
        }).unwrap();

        assert_eq!(response.habits.len(), 2);
    }

    #[test]
    fn test_sort_and_pending() {
        let store = populated();

        let by_streak = list_habits(&store, ListHabitsParams {
            sort_by: Some("streak".to_string()),
            ..Default::default()
        }).unwrap();
        assert_eq!(by_streak.habits[0].title, "Running");

        let by_title = list_habits(&store, ListHabitsParams {
            sort_by: Some("title".to_string()),
            ..Default::default()
        }).unwrap();
        assert_eq!(by_title.habits[0].title, "Meditation");

        let pending = list_habits(&store, ListHabitsParams {
            pending_only: Some(true),
            ..Default::default()
        }).unwrap();
        assert_eq!(pending.habits.len(), 2);
    }

    #[test]
    fn test_invalid_sort_key() {
        let store = populated();
        let result = list_habits(&store, ListHabitsParams {
            sort_by: Some("color".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(ToolError::InvalidArgument(_))));
    }

    #[test]
    fn test_short_ids_render_without_truncation_errors() {
        let mut store = populated();
        store.insert_habit(Habit::from_existing(
            HabitId::from_string("1").unwrap(),
            "Poranna medytacja".to_string(),
            String::new(),
            "Zdrowie".to_string(),
            Frequency::Daily,
            15,
            28,
            true,
            47,
        )).unwrap();

        let response = list_habits(&store, ListHabitsParams::default()).unwrap();

        assert_eq!(response.habits.len(), 4);
        assert!(response.message.contains("**Poranna medytacja** (Zdrowie) [1]"));
        let uuid_id = &response.habits[0].habit_id;
        assert!(response.message.contains(&format!("[{}]", &uuid_id[..8])));
    }
}
