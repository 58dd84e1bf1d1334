use async_trait::async_trait;
use chrono::NaiveDate;

use super::record::CompletionRecord;
use crate::shared::{DomainError, HabitId};

#[async_trait]
pub trait CompletionLogRepository: Send + Sync {
    /// Insert or replace the record for (habit, date)
    async fn upsert(&self, record: &CompletionRecord) -> Result<(), DomainError>;

    /// Find the record for a habit on a specific date, absent means not completed
    async fn find(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<CompletionRecord>, DomainError>;

    /// Find all records for a habit within a date range (inclusive), ascending by date
    async fn find_by_habit_and_date_range(
        &self,
        habit_id: &HabitId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionRecord>, DomainError>;

    /// Find records for all habits within a date range (inclusive)
    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionRecord>, DomainError>;

    /// Delete every record belonging to a habit, returns the number of rows removed
    async fn delete_by_habit(&self, habit_id: &HabitId) -> Result<u64, DomainError>;
}
