use axum::extract::State;
use axum::Json;
use chrono::Local;
use std::sync::Arc;

use crate::application::dtos::DashboardSummaryDto;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSummaryDto>, ApiError> {
    let today = Local::now().date_naive();
    let summary = state.queries.dashboard.dashboard(today).await?;
    Ok(Json(summary))
}
