//! Habit Routes
//!
//! CRUD endpoints for habits and the per-day completion toggle.
//!
//! - GET /api/v1/habits - List habits with current streaks
//! - POST /api/v1/habits - Create a habit
//! - PUT /api/v1/habits/:id - Update habit metadata
//! - DELETE /api/v1/habits/:id - Delete a habit
//! - POST /api/v1/habits/:id/toggle - Toggle completion for one date

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::analytics::streaks;
use crate::api::dto::{
    AsOfParams, CreateHabitRequest, HabitListResponse, HabitResponse, ToggleRequest,
    ToggleResponse, UpdateHabitRequest,
};
use crate::api::error::ApiResult;
use crate::api::routes::resolve_as_of;
use crate::api::state::AppState;
use crate::storage::types::{Habit, HabitDraft};

/// GET /api/v1/habits
///
/// List all habits in creation order, each with its current streak as of
/// the reference date.
pub async fn list_habits(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AsOfParams>,
) -> ApiResult<Json<HabitListResponse>> {
    let as_of = resolve_as_of(&params)?;
    let habits = state.storage.habits().await;

    let responses: Vec<HabitResponse> = habits
        .iter()
        .map(|habit| habit_to_response(habit, streaks::current_streak(&habit.completed_dates, as_of)))
        .collect();

    Ok(Json(HabitListResponse {
        total: responses.len(),
        habits: responses,
    }))
}

/// POST /api/v1/habits
///
/// Create a new habit with an empty completion set.
pub async fn create_habit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateHabitRequest>,
) -> ApiResult<(StatusCode, Json<HabitResponse>)> {
    let habit = state.storage.create_habit(draft_from_request(req)).await?;
    Ok((StatusCode::CREATED, Json(habit_to_response(&habit, 0))))
}

/// PUT /api/v1/habits/:id
///
/// Update name/description/category; the completion set is untouched.
pub async fn update_habit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateHabitRequest>,
) -> ApiResult<Json<HabitResponse>> {
    let habit = state.storage.update_habit(id, draft_from_request(req)).await?;
    let today = chrono::Local::now().date_naive();
    let streak = streaks::current_streak(&habit.completed_dates, today);
    Ok(Json(habit_to_response(&habit, streak)))
}

/// DELETE /api/v1/habits/:id
pub async fn delete_habit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    state.storage.delete_habit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/habits/:id/toggle
///
/// Flip completion for one date key; toggling twice restores the set.
pub async fn toggle_completion(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<ToggleRequest>,
) -> ApiResult<Json<ToggleResponse>> {
    let completed = state.storage.toggle_completion(id, &req.date).await?;
    Ok(Json(ToggleResponse {
        id,
        date: req.date,
        completed,
    }))
}

fn draft_from_request(req: CreateHabitRequest) -> HabitDraft {
    HabitDraft {
        name: req.name,
        description: req.description,
        category: req.category,
    }
}

fn habit_to_response(habit: &Habit, current_streak: u32) -> HabitResponse {
    HabitResponse {
        id: habit.id,
        name: habit.name.clone(),
        description: habit.description.clone(),
        category: habit.category.clone(),
        completed_dates: habit.completed_dates.iter().cloned().collect(),
        current_streak,
    }
}
