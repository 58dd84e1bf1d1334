use chrono::NaiveDate;

use crate::application::dtos::CompletionRecordDto;

/// Mark a habit as done or not done on a calendar day.
///
/// Recording the same (habit, date, completed) twice is idempotent; recording
/// a different `completed` value replaces the earlier mark.
#[derive(Debug, Clone)]
pub struct RecordCompletionCommand {
    pub habit_id: String,
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct RecordCompletionResult {
    pub record: CompletionRecordDto,
}
