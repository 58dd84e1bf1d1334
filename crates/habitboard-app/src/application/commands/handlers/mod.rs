pub mod create_habit_handler;
pub mod delete_habit_handler;
pub mod record_completion_handler;
pub mod update_habit_handler;

#[cfg(test)]
mod handlers_test;

pub use create_habit_handler::CreateHabitHandler;
pub use delete_habit_handler::DeleteHabitHandler;
pub use record_completion_handler::RecordCompletionHandler;
pub use update_habit_handler::UpdateHabitHandler;
