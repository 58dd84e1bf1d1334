use async_trait::async_trait;
use std::sync::Arc;

use habitboard_domain::habit::HabitRepository;
use habitboard_domain::shared::HabitId;
use habitboard_domain::DomainError;

use crate::application::commands::{CommandHandler, UpdateHabitCommand, UpdateHabitResult};
use crate::application::dtos::HabitDto;

pub struct UpdateHabitHandler {
    habit_repository: Arc<dyn HabitRepository>,
}

impl UpdateHabitHandler {
    pub fn new(habit_repository: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repository }
    }
}

#[async_trait]
impl CommandHandler<UpdateHabitCommand> for UpdateHabitHandler {
    type Result = UpdateHabitResult;

    async fn handle(&self, command: UpdateHabitCommand) -> Result<Self::Result, DomainError> {
        log::info!("Handling UpdateHabitCommand for habit: {}", command.habit_id);

        // 1. Load the aggregate
        let habit_id = HabitId::from_string(&command.habit_id);
        let mut habit = self
            .habit_repository
            .find_by_id(&habit_id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(command.habit_id.clone()))?;

        // 2. Apply only the fields present in the command
        if let Some(name) = command.name {
            habit.update_name(name)?;
        }
        if let Some(category) = command.category {
            habit.update_category(category)?;
        }
        if let Some(frequency) = command.frequency {
            habit.update_frequency(frequency);
        }
        if let Some(goal) = command.goal {
            habit.update_goal(goal)?;
        }

        // 3. Persist
        self.habit_repository.save(&habit).await?;

        log::info!("Habit updated successfully: {}", habit.id());

        Ok(UpdateHabitResult {
            habit: HabitDto::from(&habit),
        })
    }
}
