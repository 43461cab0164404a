/// Tool for creating new habits
///
/// This module implements the habit_create MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::Frequency;
use crate::store::{HabitStore, NewHabit};
use crate::tools::ToolError;

/// Parameters for creating a new habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateHabitParams {
    /// Name of the habit
    pub title: String,
    /// Optional details
    pub description: Option<String>,
    /// Free-text category (e.g. Health, Education)
    pub category: String,
    /// daily, weekly or monthly (defaults to daily)
    pub frequency: Option<String>,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub success: bool,
    pub habit_id: String,
    pub message: String,
}

/// Create a new habit in the store
pub fn create_habit(
    store: &mut HabitStore,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, ToolError> {
    let frequency = match params.frequency.as_deref() {
        Some(raw) => raw.parse::<Frequency>()?,
        None => Frequency::Daily,
    };

    let habit = store.add_habit(NewHabit {
        title: params.title,
        description: params.description.unwrap_or_default(),
        category: params.category,
        frequency,
    })?;

    Ok(CreateHabitResponse {
        success: true,
        habit_id: habit.id.to_string(),
        message: format!(
            "✅ Created {} habit '{}' in {}! Ready to start your streak!",
            habit.frequency, habit.title, habit.category
        ),
    })
}
