use async_trait::async_trait;
use std::sync::Arc;

use habitboard_domain::habit::{Habit, HabitRepository};
use habitboard_domain::DomainError;

use crate::application::commands::{CommandHandler, CreateHabitCommand, CreateHabitResult};
use crate::application::dtos::HabitDto;

pub struct CreateHabitHandler {
    habit_repository: Arc<dyn HabitRepository>,
}

impl CreateHabitHandler {
    pub fn new(habit_repository: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repository }
    }
}

#[async_trait]
impl CommandHandler<CreateHabitCommand> for CreateHabitHandler {
    type Result = CreateHabitResult;

    async fn handle(&self, command: CreateHabitCommand) -> Result<Self::Result, DomainError> {
        log::info!("Handling CreateHabitCommand for habit: {}", command.name);

        // 1. Build the aggregate; validation happens in the constructor
        let habit = Habit::new(
            command.name,
            command.category,
            command.frequency,
            command.goal,
        )?;

        // 2. Persist
        self.habit_repository.save(&habit).await?;

        log::info!("Habit created successfully: {}", habit.id());

        Ok(CreateHabitResult {
            habit: HabitDto::from(&habit),
        })
    }
}
