/// Tool for marking a habit done (or undoing it) for the current period
///
/// This module implements the habit_toggle MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::Habit;
use crate::store::HabitStore;
use crate::tools::{parse_habit_id, ToolError};

/// Parameters for toggling a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ToggleHabitParams {
    /// ID of the habit to toggle
    pub habit_id: String,
}

/// Response from toggling a habit
#[derive(Debug, Serialize)]
pub struct ToggleHabitResponse {
    pub success: bool,
    pub habit: Habit,
    pub message: String,
}

/// Toggle today's completion for one habit
pub fn toggle_habit(
    store: &mut HabitStore,
    params: ToggleHabitParams,
) -> Result<ToggleHabitResponse, ToolError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let habit = store.toggle_completion(&habit_id)?;

    let headline = if habit.completed_today {
        format!("🔥 Marked '{}' as done!", habit.title)
    } else {
        format!("↩️ Undid today's completion of '{}'.", habit.title)
    };

    let message = format!(
        "{}\nCurrent streak: {} | Best: {} | Total completions: {}\n{}",
        headline,
        habit.current_streak,
        habit.longest_streak,
        habit.total_completions,
        habit.streak_message()
    );

    Ok(ToggleHabitResponse {
        success: true,
        habit,
        message,
    })
}
