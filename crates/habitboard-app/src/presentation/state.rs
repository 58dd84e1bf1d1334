//! Shared application state wired at startup.

use std::sync::Arc;

use sqlx::SqlitePool;

use habitboard_domain::completion::CompletionLogRepository;
use habitboard_domain::habit::HabitRepository;
use habitboard_domain::DomainError;
use habitboard_infrastructure::persistence::Database;

use crate::application::commands::handlers::{
    CreateHabitHandler, DeleteHabitHandler, RecordCompletionHandler, UpdateHabitHandler,
};
use crate::application::config::AppConfig;
use crate::application::queries::{DashboardQueryService, HabitQueryService, ProgressQueryService};
use crate::presentation::bootstrap;

/// Infrastructure handles kept alive for the process lifetime.
pub struct Runtime {
    pub pool: Arc<SqlitePool>,
    pub db: Arc<Database>,
}

/// Repository implementations behind their domain traits.
pub struct Repositories {
    pub habit: Arc<dyn HabitRepository>,
    pub completion_log: Arc<dyn CompletionLogRepository>,
}

/// Read-side services.
pub struct Queries {
    pub habit: Arc<HabitQueryService>,
    pub progress: Arc<ProgressQueryService>,
    pub dashboard: Arc<DashboardQueryService>,
}

/// Write-side use cases.
pub struct CommandHandlers {
    pub create_habit: Arc<CreateHabitHandler>,
    pub update_habit: Arc<UpdateHabitHandler>,
    pub delete_habit: Arc<DeleteHabitHandler>,
    pub record_completion: Arc<RecordCompletionHandler>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self, DomainError> {
        bootstrap::build_app_state(config).await
    }
}
