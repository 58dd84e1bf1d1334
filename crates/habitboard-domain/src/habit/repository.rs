use async_trait::async_trait;

use super::aggregate::Habit;
use crate::shared::{DomainError, HabitId};

#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Insert or update a habit
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;

    /// Find a habit by id
    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;

    /// List all habits
    async fn find_all(&self) -> Result<Vec<Habit>, DomainError>;

    /// Delete a habit by id, returns true when a row was removed
    async fn delete(&self, id: &HabitId) -> Result<bool, DomainError>;
}
