pub mod command_handler;
pub mod completion_commands;
pub mod habit_commands;
pub mod handlers;

pub use command_handler::CommandHandler;
pub use completion_commands::{RecordCompletionCommand, RecordCompletionResult};
pub use habit_commands::{
    CreateHabitCommand, CreateHabitResult, DeleteHabitCommand, DeleteHabitResult,
    UpdateHabitCommand, UpdateHabitResult,
};
