use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use habitboard_domain::habit::Frequency;

use crate::application::commands::{
    CommandHandler, CreateHabitCommand, DeleteHabitCommand, RecordCompletionCommand,
    UpdateHabitCommand,
};
use crate::application::dtos::{CompletionRecordDto, HabitDto};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitRequest {
    pub name: String,
    pub category: String,
    pub frequency: Option<String>,
    pub goal: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabitRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub frequency: Option<String>,
    pub goal: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCompletionRequest {
    pub date: NaiveDate,
    pub completed: Option<bool>,
}

pub async fn list_habits(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HabitDto>>, ApiError> {
    let habits = state.queries.habit.get_all_habits().await?;
    Ok(Json(habits))
}

pub async fn get_habit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<HabitDto>, ApiError> {
    let habit = state
        .queries
        .habit
        .get_habit_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Habit not found: {}", id)))?;
    Ok(Json(habit))
}

pub async fn create_habit(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateHabitRequest>,
) -> Result<(StatusCode, Json<HabitDto>), ApiError> {
    let frequency = match body.frequency {
        Some(raw) => Frequency::from_string(&raw)?,
        None => Frequency::Daily,
    };

    let result = state
        .command_handlers
        .create_habit
        .handle(CreateHabitCommand {
            name: body.name,
            category: body.category,
            frequency,
            goal: body.goal.unwrap_or(100.0),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.habit)))
}

pub async fn update_habit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateHabitRequest>,
) -> Result<Json<HabitDto>, ApiError> {
    let frequency = match body.frequency {
        Some(raw) => Some(Frequency::from_string(&raw)?),
        None => None,
    };

    let result = state
        .command_handlers
        .update_habit
        .handle(UpdateHabitCommand {
            habit_id: id,
            name: body.name,
            category: body.category,
            frequency,
            goal: body.goal,
        })
        .await?;

    Ok(Json(result.habit))
}

pub async fn delete_habit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .command_handlers
        .delete_habit
        .handle(DeleteHabitCommand { habit_id: id })
        .await?;

    Ok(Json(json!({
        "deleted": true,
        "removedCompletions": result.removed_completions,
    })))
}

pub async fn record_completion(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<RecordCompletionRequest>,
) -> Result<(StatusCode, Json<CompletionRecordDto>), ApiError> {
    let result = state
        .command_handlers
        .record_completion
        .handle(RecordCompletionCommand {
            habit_id: id,
            date: body.date,
            completed: body.completed.unwrap_or(true),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.record)))
}
