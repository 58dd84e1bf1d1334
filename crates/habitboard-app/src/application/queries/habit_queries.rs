use std::sync::Arc;

use habitboard_domain::habit::HabitRepository;
use habitboard_domain::shared::HabitId;
use habitboard_domain::DomainError;

use crate::application::dtos::HabitDto;

/// Read-side access to the habit catalog.
pub struct HabitQueryService {
    habit_repository: Arc<dyn HabitRepository>,
}

impl HabitQueryService {
    pub fn new(habit_repository: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repository }
    }

    /// All habits, ordered by name.
    pub async fn get_all_habits(&self) -> Result<Vec<HabitDto>, DomainError> {
        let habits = self.habit_repository.find_all().await?;
        log::debug!("[habits] Listed {} habits", habits.len());
        Ok(habits.iter().map(HabitDto::from).collect())
    }

    pub async fn get_habit_by_id(&self, habit_id: &str) -> Result<Option<HabitDto>, DomainError> {
        let id = HabitId::from_string(habit_id);
        let habit = self.habit_repository.find_by_id(&id).await?;
        Ok(habit.as_ref().map(HabitDto::from))
    }
}
