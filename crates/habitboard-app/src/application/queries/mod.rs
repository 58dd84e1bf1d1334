pub mod dashboard_queries;
pub mod habit_queries;
pub mod progress_queries;

pub use dashboard_queries::DashboardQueryService;
pub use habit_queries::HabitQueryService;
pub use progress_queries::ProgressQueryService;
