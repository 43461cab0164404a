/// MCP tools for the habit dashboard
///
/// This module contains all the tools that external clients can call.
/// Each tool has a parameter struct (deserialized from the call arguments,
/// with a generated JSON schema), a response struct, and a function that
/// runs it against the stores.

pub mod create;
pub mod data;
pub mod delete;
pub mod list;
pub mod preferences;
pub mod stats;
pub mod toggle;
pub mod update;

// Re-export tool functions for easy access
pub use create::*;
pub use data::*;
pub use delete::*;
pub use list::*;
pub use preferences::*;
pub use stats::*;
pub use toggle::*;
pub use update::*;

use thiserror::Error;

use crate::domain::{DomainError, HabitId};
use crate::storage::StorageError;
use crate::store::StoreError;

/// Errors a tool call can report back to the client
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Parse a habit id argument
pub(crate) fn parse_habit_id(raw: &str) -> Result<HabitId, ToolError> {
    HabitId::from_string(raw)
        .map_err(|_| ToolError::InvalidArgument("habit_id cannot be empty".to_string()))
}
