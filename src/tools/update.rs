/// Tool for editing existing habits
///
/// This module implements the habit_update MCP tool. Only the display
/// fields can change; frequency and counters are fixed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::store::{HabitEdit, HabitStore};
use crate::tools::{parse_habit_id, ToolError};

/// Parameters for updating an existing habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateHabitParams {
    /// ID of the habit to edit
    pub habit_id: String,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New category
    pub category: Option<String>,
}

/// Response from updating a habit
#[derive(Debug, Serialize)]
pub struct UpdateHabitResponse {
    pub success: bool,
    pub message: String,
}

/// Update an existing habit in the store
pub fn update_habit(
    store: &mut HabitStore,
    params: UpdateHabitParams,
) -> Result<UpdateHabitResponse, ToolError> {
    let habit_id = parse_habit_id(&params.habit_id)?;

    if params.title.is_none() && params.description.is_none() && params.category.is_none() {
        return Err(ToolError::InvalidArgument(
            "Nothing to update: provide title, description or category".to_string(),
        ));
    }

    let habit = store.update_habit(&habit_id, HabitEdit {
        title: params.title,
        description: params.description,
        category: params.category,
    })?;

    Ok(UpdateHabitResponse {
        success: true,
        message: format!("✅ Updated habit '{}'", habit.title),
    })
}
