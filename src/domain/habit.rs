/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a behaviour
/// the user tracks, along with validation and the completion toggle.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{DomainError, Frequency, HabitId};

const MAX_TITLE_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;
const MAX_CATEGORY_LEN: usize = 50;

/// A habit represents something the user wants to do regularly
///
/// Besides the display fields, every habit carries its own streak
/// bookkeeping. Field names are camelCase on disk so stored collections
/// and backups keep the dashboard's format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning meditation")
    pub title: String,
    /// Free-text details, may be empty
    #[serde(default)]
    pub description: String,
    /// Free-text grouping label (e.g., "Health", "Education")
    pub category: String,
    /// Period that "completed today" refers to
    pub frequency: Frequency,
    /// Consecutive completed periods up to the current one
    pub current_streak: u32,
    /// Best streak ever reached; never lower than `current_streak`
    pub longest_streak: u32,
    /// Whether the current period's completion has been recorded
    pub completed_today: bool,
    /// Net number of recorded completions
    pub total_completions: u32,
    /// When this habit was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The habit starts with a fresh id and all counters at zero.
    pub fn new(
        title: String,
        description: String,
        category: String,
        frequency: Frequency,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_description(&description)?;
        Self::validate_category(&category)?;

        Ok(Self {
            id: HabitId::new(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            category: category.trim().to_string(),
            frequency,
            current_streak: 0,
            longest_streak: 0,
            completed_today: false,
            total_completions: 0,
            created_at: Utc::now(),
        })
    }

    /// Create a habit from existing data
    ///
    /// No validation is applied; used for imports and test fixtures.
    #[allow(clippy::too_many_arguments)]
    pub fn from_existing(
        id: HabitId,
        title: String,
        description: String,
        category: String,
        frequency: Frequency,
        current_streak: u32,
        longest_streak: u32,
        completed_today: bool,
        total_completions: u32,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            frequency,
            current_streak,
            longest_streak,
            completed_today,
            total_completions,
            created_at: Utc::now(),
        }
    }

    /// Check the display fields of an existing record
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::validate_title(&self.title)?;
        Self::validate_description(&self.description)?;
        Self::validate_category(&self.category)
    }

    /// Edit the display fields with validation
    ///
    /// Nothing is applied unless every provided value is valid.
    pub fn update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        category: Option<String>,
    ) -> Result<(), DomainError> {
        if let Some(ref new_title) = title {
            Self::validate_title(new_title)?;
        }
        if let Some(ref new_desc) = description {
            Self::validate_description(new_desc)?;
        }
        if let Some(ref new_category) = category {
            Self::validate_category(new_category)?;
        }

        if let Some(new_title) = title {
            self.title = new_title.trim().to_string();
        }
        if let Some(new_desc) = description {
            self.description = new_desc.trim().to_string();
        }
        if let Some(new_category) = category {
            self.category = new_category.trim().to_string();
        }

        Ok(())
    }

    /// Return the record after toggling today's completion
    ///
    /// Completing bumps the streak and total, then lifts the longest streak
    /// to the new current value. Undoing lowers streak and total (clamped at
    /// zero) and leaves the longest streak alone.
    pub fn toggled(&self) -> Self {
        let mut next = self.clone();

        if self.completed_today {
            next.completed_today = false;
            next.current_streak = self.current_streak.saturating_sub(1);
            next.total_completions = self.total_completions.saturating_sub(1);
        } else {
            next.completed_today = true;
            next.current_streak = self.current_streak.saturating_add(1);
            next.total_completions = self.total_completions.saturating_add(1);
            next.longest_streak = self.longest_streak.max(next.current_streak);
        }

        next
    }

    /// Restore `longest_streak >= current_streak` on a loaded record
    ///
    /// Returns true if the record had to be changed.
    pub fn repair_streaks(&mut self) -> bool {
        if self.longest_streak < self.current_streak {
            self.longest_streak = self.current_streak;
            return true;
        }
        false
    }

    /// Get a motivational message based on current streak status
    pub fn streak_message(&self) -> String {
        let period = self.frequency.period_name();
        match self.current_streak {
            0 => "Ready to start your streak! Every journey begins with a single step.".to_string(),
            1 => format!("Great start! One {} down, keep the momentum going.", period),
            2..=6 => format!("Nice work! {} {}s in a row. You're building a strong habit.", self.current_streak, period),
            7..=13 => format!("Excellent! {} {}s strong. You're in the groove now!", self.current_streak, period),
            14..=29 => format!("Amazing! {} {}s straight. This is becoming second nature.", self.current_streak, period),
            30..=99 => format!("Incredible! {} {}s of consistency. You're a habit master!", self.current_streak, period),
            _ => format!("Legendary! {} {}s of unwavering commitment. You're an inspiration!", self.current_streak, period),
        }
    }

    // Validation helper methods

    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidTitle(
                "Habit title cannot be empty".to_string()
            ));
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::InvalidTitle(format!(
                "Habit title cannot be longer than {} characters",
                MAX_TITLE_LEN
            )));
        }

        Ok(())
    }

    fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.trim().chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DomainError::Validation {
                message: format!("Description cannot be longer than {} characters", MAX_DESCRIPTION_LEN),
            });
        }
        Ok(())
    }

    fn validate_category(category: &str) -> Result<(), DomainError> {
        let trimmed = category.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidCategory(
                "Category cannot be empty".to_string()
            ));
        }

        if trimmed.chars().count() > MAX_CATEGORY_LEN {
            return Err(DomainError::InvalidCategory(format!(
                "Category cannot be longer than {} characters",
                MAX_CATEGORY_LEN
            )));
        }

        Ok(())
    }
}
