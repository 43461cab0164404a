/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, Preferences, UserProfile)
/// and their validation rules. The habit toggle transition lives here as a
/// pure function so the store only has to decide where the result goes.

pub mod habit;
pub mod preferences;
pub mod profile;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use preferences::*;
pub use profile::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit title: {0}")]
    InvalidTitle(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
