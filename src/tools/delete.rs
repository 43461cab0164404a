/// Tool for deleting habits
///
/// This module implements the habit_delete MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::store::HabitStore;
use crate::tools::{parse_habit_id, ToolError};

/// Parameters for deleting a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteHabitParams {
    /// ID of the habit to delete
    pub habit_id: String,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub success: bool,
    pub message: String,
}

/// Delete a habit and its streak history
pub fn delete_habit(
    store: &mut HabitStore,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, ToolError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let removed = store.delete_habit(&habit_id)?;

    Ok(DeleteHabitResponse {
        success: true,
        message: format!(
            "🗑️ Deleted habit '{}' (best streak was {})",
            removed.title, removed.longest_streak
        ),
    })
}
