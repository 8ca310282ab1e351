//! Sleep Routes
//!
//! - GET /api/v1/sleep - Full sleep log, normalized
//! - PUT /api/v1/sleep/:date - Save one night (hours derived server-side)
//! - GET /api/v1/sleep/series - Per-day hours for one calendar month

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::analytics::sleep;
use crate::api::dto::{SleepEntryResponse, SleepLogRequest, SleepLogResponse, SleepSeriesResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::validate_month;
use crate::api::state::AppState;

/// GET /api/v1/sleep
///
/// The whole log with every record normalized to the detailed shape;
/// legacy bare-number records surface with no time detail.
pub async fn get_sleep_log(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SleepLogResponse>> {
    let log = state.storage.sleep_log().await;

    let entries = log
        .iter()
        .map(|(date, record)| (date.clone(), record.normalized()))
        .collect();

    Ok(Json(SleepLogResponse {
        total: log.len(),
        entries,
    }))
}

/// PUT /api/v1/sleep/:date
///
/// Save one night against its wake-up date, overwriting any existing
/// record wholesale.
pub async fn save_sleep_entry(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    Json(req): Json<SleepLogRequest>,
) -> ApiResult<Json<SleepEntryResponse>> {
    let entry = state
        .storage
        .save_sleep(&date, &req.start_time, &req.wakeup_time)
        .await?;

    // Both times were just validated by the store
    let display = match (
        entry.start_time.as_deref().and_then(sleep::parse_time),
        entry.wakeup_time.as_deref().and_then(sleep::parse_time),
    ) {
        (Some(start), Some(wake)) => sleep::duration_display(start, wake),
        _ => format!("{}h", entry.hours),
    };

    Ok(Json(SleepEntryResponse {
        date,
        entry,
        display,
    }))
}

/// Query parameters for the month series
#[derive(Debug, Deserialize)]
pub struct SeriesParams {
    pub year: i32,
    pub month: u32,
}

/// GET /api/v1/sleep/series?year=2025&month=6
///
/// Hours per day for the calendar chart; days without a record report 0.
pub async fn sleep_series(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeriesParams>,
) -> ApiResult<Json<SleepSeriesResponse>> {
    validate_month(params.month)?;
    if params.year < 1 {
        return Err(ApiError::Validation(format!(
            "Invalid year: {}",
            params.year
        )));
    }

    let log = state.storage.sleep_log().await;
    let days = sleep::sleep_day_series(&log, params.year, params.month);

    Ok(Json(SleepSeriesResponse {
        year: params.year,
        month: params.month,
        days,
    }))
}
