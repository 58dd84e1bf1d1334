use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::HabitId;

/// A boolean marker that a habit was completed on a calendar date.
///
/// One record per (habit, date); an absent record means not completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    habit_id: HabitId,
    completed_on: NaiveDate,
    completed: bool,
    recorded_at: DateTime<Utc>,
}

impl CompletionRecord {
    pub fn new(habit_id: HabitId, completed_on: NaiveDate, completed: bool) -> Self {
        Self {
            habit_id,
            completed_on,
            completed,
            recorded_at: Utc::now(),
        }
    }

    pub fn restore(
        habit_id: HabitId,
        completed_on: NaiveDate,
        completed: bool,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            habit_id,
            completed_on,
            completed,
            recorded_at,
        }
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn completed_on(&self) -> NaiveDate {
        self.completed_on
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
