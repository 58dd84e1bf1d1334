use async_trait::async_trait;
use std::sync::Arc;

use habitboard_domain::completion::{CompletionLogRepository, CompletionRecord};
use habitboard_domain::habit::HabitRepository;
use habitboard_domain::shared::HabitId;
use habitboard_domain::DomainError;

use crate::application::commands::{
    CommandHandler, RecordCompletionCommand, RecordCompletionResult,
};
use crate::application::dtos::CompletionRecordDto;

pub struct RecordCompletionHandler {
    habit_repository: Arc<dyn HabitRepository>,
    completion_log_repository: Arc<dyn CompletionLogRepository>,
}

impl RecordCompletionHandler {
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
impl CommandHandler<RecordCompletionCommand> for RecordCompletionHandler {
    type Result = RecordCompletionResult;

    async fn handle(&self, command: RecordCompletionCommand) -> Result<Self::Result, DomainError> {
        log::info!(
            "Handling RecordCompletionCommand for habit: {} on {}",
            command.habit_id,
            command.date
        );

        // 1. The habit must exist before anything is logged against it
        let habit_id = HabitId::from_string(&command.habit_id);
        self.habit_repository
            .find_by_id(&habit_id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(command.habit_id.clone()))?;

        // 2. Upsert the mark; one row per (habit, date)
        let record = CompletionRecord::new(habit_id, command.date, command.completed);
        self.completion_log_repository.upsert(&record).await?;

        log::info!(
            "Completion recorded: habit {} on {} -> {}",
            record.habit_id(),
            record.completed_on(),
            record.is_completed()
        );

        Ok(RecordCompletionResult {
            record: CompletionRecordDto::from(&record),
        })
    }
}
