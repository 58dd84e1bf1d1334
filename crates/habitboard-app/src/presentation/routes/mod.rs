pub mod dashboard;
pub mod habits;
pub mod health;
pub mod progress;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::presentation::state::AppState;

/// Assemble the HTTP API router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/habits",
            get(habits::list_habits).post(habits::create_habit),
        )
        .route(
            "/api/habits/{id}",
            get(habits::get_habit)
                .put(habits::update_habit)
                .delete(habits::delete_habit),
        )
        .route(
            "/api/habits/{id}/completions",
            post(habits::record_completion),
        )
        .route("/api/habits/{id}/progress", get(progress::habit_progress))
        .route("/api/dashboard", get(dashboard::dashboard))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
