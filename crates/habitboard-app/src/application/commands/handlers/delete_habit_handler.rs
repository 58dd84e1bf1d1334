use async_trait::async_trait;
use std::sync::Arc;

use habitboard_domain::completion::CompletionLogRepository;
use habitboard_domain::habit::HabitRepository;
use habitboard_domain::shared::HabitId;
use habitboard_domain::DomainError;

use crate::application::commands::{CommandHandler, DeleteHabitCommand, DeleteHabitResult};

pub struct DeleteHabitHandler {
    habit_repository: Arc<dyn HabitRepository>,
    completion_log_repository: Arc<dyn CompletionLogRepository>,
}

impl DeleteHabitHandler {
    pub fn new(
        habit_repository: Arc<dyn HabitRepository>,
        completion_log_repository: Arc<dyn CompletionLogRepository>,
    ) -> Self {
        Self {
            habit_repository,
            completion_log_repository,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteHabitCommand> for DeleteHabitHandler {
    type Result = DeleteHabitResult;

    async fn handle(&self, command: DeleteHabitCommand) -> Result<Self::Result, DomainError> {
        log::info!("Handling DeleteHabitCommand for habit: {}", command.habit_id);

        let habit_id = HabitId::from_string(&command.habit_id);

        // 1. Remove the habit row; aggregations stop seeing the habit here
        let removed = self.habit_repository.delete(&habit_id).await?;
        if !removed {
            return Err(DomainError::HabitNotFound(command.habit_id));
        }

        // 2. Cascade to the completion log
        let removed_completions = self
            .completion_log_repository
            .delete_by_habit(&habit_id)
            .await?;

        log::info!(
            "Habit deleted successfully: {} ({} completion records removed)",
            habit_id,
            removed_completions
        );

        Ok(DeleteHabitResult {
            removed_completions,
        })
    }
}
