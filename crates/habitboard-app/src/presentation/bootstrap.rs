//! Startup wiring: database, repositories, services, handlers.

use std::sync::Arc;
use std::time::Instant;

use log::info;

use habitboard_domain::completion::CompletionLogRepository;
use habitboard_domain::habit::HabitRepository;
use habitboard_domain::DomainError;
use habitboard_infrastructure::persistence::repositories::{
    SqliteCompletionLogRepository, SqliteHabitRepository,
};
use habitboard_infrastructure::persistence::Database;

use crate::application::commands::handlers::{
    CreateHabitHandler, DeleteHabitHandler, RecordCompletionHandler, UpdateHabitHandler,
};
use crate::application::config::AppConfig;
use crate::application::queries::{DashboardQueryService, HabitQueryService, ProgressQueryService};
use crate::presentation::state::{AppState, CommandHandlers, Queries, Repositories, Runtime};

pub async fn build_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let started_at = Instant::now();
    info!("Building application state...");

    // 1. Database
    let db_path = config.db_path();
    let db = Database::new(&db_path.to_string_lossy()).await?;
    db.run_migrations().await?;
    let pool = Arc::new(db.pool().clone());
    let db = Arc::new(db);
    info!(
        "Database ready at {} ({}ms)",
        db_path.display(),
        started_at.elapsed().as_millis()
    );

    // 2. Repositories
    let habit_repository: Arc<dyn HabitRepository> =
        Arc::new(SqliteHabitRepository::new(pool.clone()));
    let completion_log_repository: Arc<dyn CompletionLogRepository> =
        Arc::new(SqliteCompletionLogRepository::new(pool.clone()));
    info!("Repositories initialized ({}ms)", started_at.elapsed().as_millis());

    // 3. Query services
    let habit_queries = Arc::new(HabitQueryService::new(habit_repository.clone()));
    let progress_queries = Arc::new(ProgressQueryService::new(
        habit_repository.clone(),
        completion_log_repository.clone(),
    ));
    let dashboard_queries = Arc::new(DashboardQueryService::new(
        habit_repository.clone(),
        completion_log_repository.clone(),
    ));
    info!("Query services initialized ({}ms)", started_at.elapsed().as_millis());

    // 4. Command handlers
    let create_habit = Arc::new(CreateHabitHandler::new(habit_repository.clone()));
    let update_habit = Arc::new(UpdateHabitHandler::new(habit_repository.clone()));
    let delete_habit = Arc::new(DeleteHabitHandler::new(
        habit_repository.clone(),
        completion_log_repository.clone(),
    ));
    let record_completion = Arc::new(RecordCompletionHandler::new(
        habit_repository.clone(),
        completion_log_repository.clone(),
    ));
    info!("Command handlers initialized ({}ms)", started_at.elapsed().as_millis());

    info!(
        "Application state built in {}ms",
        started_at.elapsed().as_millis()
    );

    Ok(AppState {
        runtime: Runtime { pool, db },
        repositories: Repositories {
            habit: habit_repository,
            completion_log: completion_log_repository,
        },
        queries: Queries {
            habit: habit_queries,
            progress: progress_queries,
            dashboard: dashboard_queries,
        },
        command_handlers: CommandHandlers {
            create_habit,
            update_habit,
            delete_habit,
            record_completion,
        },
    })
}
