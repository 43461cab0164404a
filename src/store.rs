/// The authoritative habit collection for the current session
///
/// `HabitStore` owns the records, applies the completion toggle and the
/// add/edit/delete intents, and writes the whole collection through the
/// persistence gateway before each mutating call returns.

use std::rc::Rc;

use thiserror::Error;

use crate::analytics::{self, HabitStats};
use crate::domain::{DomainError, Frequency, Habit, HabitId};
use crate::storage::PersistenceGateway;

/// Key the collection is stored under (namespaced by the gateway)
pub const HABITS_KEY: &str = "habits";

/// Errors returned by store operations
///
/// Persistence failures are not part of this enum: they are logged by the
/// gateway and never fail a store operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error("Duplicate habit id: {habit_id}")]
    DuplicateHabit { habit_id: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Fields captured by the "add habit" form
#[derive(Debug, Clone)]
pub struct NewHabit {
    pub title: String,
    pub description: String,
    pub category: String,
    pub frequency: Frequency,
}

/// Display fields to change; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct HabitEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

pub struct HabitStore {
    habits: Vec<Habit>,
    gateway: Rc<PersistenceGateway>,
}

impl HabitStore {
    /// Build the store, loading any saved collection from the gateway
    pub fn new(gateway: Rc<PersistenceGateway>) -> Self {
        let habits = Self::load_habits(&gateway);
        tracing::info!("Habit store loaded {} habits", habits.len());
        Self { habits, gateway }
    }

    /// Re-read the collection from storage, replacing the in-memory copy
    pub fn reload(&mut self) {
        self.habits = Self::load_habits(&self.gateway);
    }

    /// Drop the in-memory collection without writing anything
    pub fn reset(&mut self) {
        self.habits.clear();
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, habit_id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == habit_id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Toggle the current period's completion for one habit
    ///
    /// An unknown id fails with `HabitNotFound` and changes nothing.
    pub fn toggle_completion(&mut self, habit_id: &HabitId) -> Result<Habit, StoreError> {
        let index = self.position(habit_id)?;
        let updated = self.habits[index].toggled();
        self.habits[index] = updated.clone();
        self.persist();

        tracing::debug!(
            "Toggled habit {} ({}): completed={} streak={} longest={} total={}",
            updated.title,
            updated.id,
            updated.completed_today,
            updated.current_streak,
            updated.longest_streak,
            updated.total_completions
        );
        Ok(updated)
    }

    /// Create a habit from the add form and append it
    pub fn add_habit(&mut self, new: NewHabit) -> Result<Habit, StoreError> {
        let mut habit = Habit::new(new.title, new.description, new.category, new.frequency)?;
        while self.get(&habit.id).is_some() {
            habit.id = HabitId::new();
        }

        self.habits.push(habit.clone());
        self.persist();

        tracing::debug!("Created habit: {} ({})", habit.title, habit.id);
        Ok(habit)
    }

    /// Append an existing record, keeping its id
    ///
    /// The record must pass the same field checks as a newly created habit.
    pub fn insert_habit(&mut self, mut habit: Habit) -> Result<(), StoreError> {
        habit.validate()?;
        if self.get(&habit.id).is_some() {
            return Err(StoreError::DuplicateHabit {
                habit_id: habit.id.to_string(),
            });
        }
        habit.repair_streaks();

        self.habits.push(habit);
        self.persist();
        Ok(())
    }

    /// Edit the display fields of a habit
    pub fn update_habit(&mut self, habit_id: &HabitId, edit: HabitEdit) -> Result<Habit, StoreError> {
        let index = self.position(habit_id)?;
        let habit = &mut self.habits[index];
        habit.update(edit.title, edit.description, edit.category)?;
        let updated = habit.clone();
        self.persist();

        tracing::debug!("Updated habit: {} ({})", updated.title, updated.id);
        Ok(updated)
    }

    /// Remove a habit, returning the removed record
    pub fn delete_habit(&mut self, habit_id: &HabitId) -> Result<Habit, StoreError> {
        let index = self.position(habit_id)?;
        let removed = self.habits.remove(index);
        self.persist();

        tracing::debug!("Deleted habit: {} ({})", removed.title, removed.id);
        Ok(removed)
    }

    pub fn completed_today_count(&self) -> usize {
        analytics::completed_today_count(&self.habits)
    }

    pub fn total_streak_sum(&self) -> u64 {
        analytics::total_streak_sum(&self.habits)
    }

    pub fn average_streak(&self) -> f64 {
        analytics::average_streak(&self.habits)
    }

    pub fn stats(&self) -> HabitStats {
        HabitStats::from_habits(&self.habits)
    }

    fn position(&self, habit_id: &HabitId) -> Result<usize, StoreError> {
        self.habits
            .iter()
            .position(|h| &h.id == habit_id)
            .ok_or_else(|| StoreError::HabitNotFound {
                habit_id: habit_id.to_string(),
            })
    }

    fn persist(&self) {
        self.gateway.save(HABITS_KEY, &self.habits);
    }

    fn load_habits(gateway: &PersistenceGateway) -> Vec<Habit> {
        // Records are decoded one at a time so a bad entry only loses itself
        let stored: Vec<serde_json::Value> = gateway.load(HABITS_KEY).unwrap_or_default();
        let mut habits: Vec<Habit> = Vec::with_capacity(stored.len());

        for (index, raw) in stored.into_iter().enumerate() {
            let mut habit: Habit = match serde_json::from_value(raw) {
                Ok(habit) => habit,
                Err(e) => {
                    tracing::warn!("Dropping undecodable stored habit at index {}: {}", index, e);
                    continue;
                }
            };
            if habits.iter().any(|h| h.id == habit.id) {
                tracing::warn!("Dropping stored habit with duplicate id {}", habit.id);
                continue;
            }
            if habit.repair_streaks() {
                tracing::warn!(
                    "Stored habit {} had longest streak below current; raised to {}",
                    habit.id,
                    habit.longest_streak
                );
            }
            habits.push(habit);
        }

        habits
    }
}
