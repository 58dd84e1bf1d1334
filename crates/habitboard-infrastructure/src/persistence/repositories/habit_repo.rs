use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use habitboard_domain::habit::{Frequency, Habit, HabitRepository};
use habitboard_domain::shared::{DomainError, HabitId};

#[derive(FromRow)]
struct HabitRow {
    id: String,
    name: String,
    category: String,
    frequency: String,
    goal: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HabitRow {
    fn try_into_habit(self) -> Result<Habit, DomainError> {
        let frequency = Frequency::from_string(&self.frequency).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Invalid frequency '{}' stored for habit {}",
                self.frequency, self.id
            ))
        })?;

        Ok(Habit::restore(
            HabitId::from_string(&self.id),
            self.name,
            self.category,
            frequency,
            self.goal,
            self.created_at,
            self.updated_at,
        ))
    }
}

pub struct SqliteHabitRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO habits (
                id,
                name,
                category,
                frequency,
                goal,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(habit.id().as_str())
                    .bind(habit.name())
                    .bind(habit.category())
                    .bind(habit.frequency().as_str())
                    .bind(habit.goal())
                    .bind(habit.created_at())
                    .bind(habit.updated_at()),
                "Save habit",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let query = r#"
            SELECT
                id,
                name,
                category,
                frequency,
                goal,
                created_at,
                updated_at
            FROM habits
            WHERE id = ?1
        "#;

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(id.as_str()), "Find habit by ID")
            .await?;

        row.map(|r| r.try_into_habit()).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Habit>, DomainError> {
        let query = r#"
            SELECT
                id,
                name,
                category,
                frequency,
                goal,
                created_at,
                updated_at
            FROM habits
            ORDER BY name ASC
        "#;

        let rows: Vec<HabitRow> = self
            .base
            .fetch_all(sqlx::query_as(query), "List all habits")
            .await?;

        rows.into_iter().map(|r| r.try_into_habit()).collect()
    }

    async fn delete(&self, id: &HabitId) -> Result<bool, DomainError> {
        let query = "DELETE FROM habits WHERE id = ?1";

        let result = self
            .base
            .execute(sqlx::query(query).bind(id.as_str()), "Delete habit")
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
