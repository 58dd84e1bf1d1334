use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use habitboard_domain::completion::{CompletionLogRepository, CompletionRecord};
use habitboard_domain::shared::{DomainError, HabitId};

#[derive(FromRow)]
struct CompletionRow {
    habit_id: String,
    completed_on: String,
    completed: bool,
    recorded_at: DateTime<Utc>,
}

impl CompletionRow {
    fn try_into_record(self) -> Result<CompletionRecord, DomainError> {
        let date = NaiveDate::parse_from_str(&self.completed_on, "%Y-%m-%d").map_err(|e| {
            DomainError::DataIntegrity(format!(
                "Invalid completed_on: {} ({})",
                self.completed_on, e
            ))
        })?;

        Ok(CompletionRecord::restore(
            HabitId::from_string(&self.habit_id),
            date,
            self.completed,
            self.recorded_at,
        ))
    }
}

pub struct SqliteCompletionLogRepository {
    base: SqliteRepositoryBase,
}

impl SqliteCompletionLogRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl CompletionLogRepository for SqliteCompletionLogRepository {
    async fn upsert(&self, record: &CompletionRecord) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO completions (
                habit_id,
                completed_on,
                completed,
                recorded_at
            ) VALUES (?1, ?2, ?3, ?4)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(record.habit_id().as_str())
                    .bind(record.completed_on().format("%Y-%m-%d").to_string())
                    .bind(record.is_completed())
                    .bind(record.recorded_at()),
                "Upsert completion record",
            )
            .await?;

        Ok(())
    }

    async fn find(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<CompletionRecord>, DomainError> {
        let query = r#"
            SELECT
                habit_id,
                completed_on,
                completed,
                recorded_at
            FROM completions
            WHERE habit_id = ?1 AND completed_on = ?2
        "#;

        let row: Option<CompletionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query)
                    .bind(habit_id.as_str())
                    .bind(date.format("%Y-%m-%d").to_string()),
                "Find completion record",
            )
            .await?;

        row.map(|r| r.try_into_record()).transpose()
    }

    async fn find_by_habit_and_date_range(
        &self,
        habit_id: &HabitId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionRecord>, DomainError> {
        let query = r#"
            SELECT
                habit_id,
                completed_on,
                completed,
                recorded_at
            FROM completions
            WHERE habit_id = ?1
              AND completed_on >= ?2
              AND completed_on <= ?3
            ORDER BY completed_on ASC
        "#;

        let rows: Vec<CompletionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(habit_id.as_str())
                    .bind(start.format("%Y-%m-%d").to_string())
                    .bind(end.format("%Y-%m-%d").to_string()),
                "Find completion records by habit and date range",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_record()).collect()
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionRecord>, DomainError> {
        let query = r#"
            SELECT
                habit_id,
                completed_on,
                completed,
                recorded_at
            FROM completions
            WHERE completed_on >= ?1
              AND completed_on <= ?2
            ORDER BY completed_on ASC
        "#;

        let rows: Vec<CompletionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(start.format("%Y-%m-%d").to_string())
                    .bind(end.format("%Y-%m-%d").to_string()),
                "Find completion records by date range",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_record()).collect()
    }

    async fn delete_by_habit(&self, habit_id: &HabitId) -> Result<u64, DomainError> {
        let query = "DELETE FROM completions WHERE habit_id = ?1";

        let result = self
            .base
            .execute(
                sqlx::query(query).bind(habit_id.as_str()),
                "Delete completion records by habit",
            )
            .await?;

        Ok(result.rows_affected())
    }
}
