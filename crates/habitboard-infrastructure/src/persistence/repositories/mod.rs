pub mod completion_log_repo;
pub mod habit_repo;

pub use completion_log_repo::SqliteCompletionLogRepository;
pub use habit_repo::SqliteHabitRepository;
