//! Wire-format data transfer objects.
//!
//! All DTOs serialize with camelCase field names to match the JSON shape the
//! web client consumes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use habitboard_domain::completion::CompletionRecord;
use habitboard_domain::habit::Habit;

// ============ Habit DTOs ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub frequency: String,
    pub goal: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        Self {
            id: habit.id().as_str().to_string(),
            name: habit.name().to_string(),
            category: habit.category().to_string(),
            frequency: habit.frequency().as_str().to_string(),
            goal: habit.goal(),
            created_at: habit.created_at(),
            updated_at: habit.updated_at(),
        }
    }
}

// ============ Completion DTOs ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecordDto {
    pub habit_id: String,
    pub date: NaiveDate,
    pub completed: bool,
    pub recorded_at: DateTime<Utc>,
}

impl From<&CompletionRecord> for CompletionRecordDto {
    fn from(record: &CompletionRecord) -> Self {
        Self {
            habit_id: record.habit_id().as_str().to_string(),
            date: record.completed_on(),
            completed: record.is_completed(),
            recorded_at: record.recorded_at(),
        }
    }
}

// ============ Progress DTOs ============

/// One calendar day inside a monthly progress report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCompletionDto {
    pub date: String,
    pub completed: bool,
}

/// Monthly progress for a single habit. `daily_data` covers every day of the
/// month in ascending order, with days that have no record reported as not
/// completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReportDto {
    pub habit_id: String,
    pub month: String,
    pub total_days: u32,
    pub completed_days: u32,
    pub completion_rate: f64,
    pub daily_data: Vec<DailyCompletionDto>,
}

// ============ Dashboard DTOs ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_habits: u32,
    pub completed_today: u32,
    pub weekly_average: f64,
    pub monthly_progress: f64,
    pub stats: HashMap<String, u32>,
}
