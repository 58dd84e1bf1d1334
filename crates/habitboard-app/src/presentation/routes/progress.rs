use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::dtos::ProgressReportDto;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProgressParams {
    pub year: i32,
    pub month: u32,
}

pub async fn habit_progress(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ProgressParams>,
) -> Result<Json<ProgressReportDto>, ApiError> {
    let report = state
        .queries
        .progress
        .monthly_progress(&id, params.year, params.month)
        .await?;
    Ok(Json(report))
}
