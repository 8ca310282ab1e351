//! Analytics Routes
//!
//! Read-only endpoints that run the analytics engine over a store snapshot.
//!
//! - GET /api/v1/dashboard - Summary cards (totals, 30-day rate, best streak)
//! - GET /api/v1/dashboard/monthly-rates - Six-month rate series
//! - GET /api/v1/dashboard/categories - Category distribution
//! - GET /api/v1/dashboard/comparison - Rolling 30-vs-30 ranking
//! - GET /api/v1/dashboard/achievements - Milestones in fixed order
//! - GET /api/v1/months/:year/:month - Month view payload

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::{achievements, compare, dates, rates, sleep, streaks};
use crate::api::dto::{
    AchievementsResponse, AsOfParams, CategoriesResponse, ComparisonResponse, DashboardResponse,
    MonthDay, MonthHabitRow, MonthViewResponse, MonthlyRatesResponse,
};
use crate::api::error::ApiResult;
use crate::api::routes::{resolve_as_of, validate_month};
use crate::api::state::AppState;

/// GET /api/v1/dashboard
pub async fn dashboard_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AsOfParams>,
) -> ApiResult<Json<DashboardResponse>> {
    let as_of = resolve_as_of(&params)?;
    let habits = state.storage.habits().await;

    let window = dates::trailing_days(as_of, compare::ROLLING_WINDOW_DAYS);

    Ok(Json(DashboardResponse {
        total_habits: habits.len(),
        completion_rate: rates::completion_rate(&habits, &window),
        best_streak: streaks::best_streak(&habits, as_of),
    }))
}

/// GET /api/v1/dashboard/monthly-rates
pub async fn monthly_rates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AsOfParams>,
) -> ApiResult<Json<MonthlyRatesResponse>> {
    let as_of = resolve_as_of(&params)?;
    let habits = state.storage.habits().await;

    Ok(Json(MonthlyRatesResponse {
        months: rates::monthly_series(&habits, as_of),
    }))
}

/// GET /api/v1/dashboard/categories
pub async fn categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CategoriesResponse>> {
    let habits = state.storage.habits().await;

    Ok(Json(CategoriesResponse {
        categories: rates::category_distribution(&habits),
    }))
}

/// GET /api/v1/dashboard/comparison
///
/// Trailing 30 days vs the 30 before, ranked descending by current rate.
pub async fn rolling_comparison(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AsOfParams>,
) -> ApiResult<Json<ComparisonResponse>> {
    let as_of = resolve_as_of(&params)?;
    let habits = state.storage.habits().await;

    Ok(Json(ComparisonResponse {
        habits: compare::rolling_comparison(&habits, as_of),
    }))
}

/// GET /api/v1/dashboard/achievements
pub async fn achievement_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AsOfParams>,
) -> ApiResult<Json<AchievementsResponse>> {
    let as_of = resolve_as_of(&params)?;
    let habits = state.storage.habits().await;
    let sleep_log = state.storage.sleep_log().await;

    Ok(Json(AchievementsResponse {
        achievements: achievements::evaluate(&habits, &sleep_log, as_of),
    }))
}

/// GET /api/v1/months/:year/:month
///
/// Everything the month view renders: the day header, one row of marks and
/// a progress percent per habit, the month-over-month comparison, and the
/// sleep series.
pub async fn month_view(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(i32, u32)>,
) -> ApiResult<Json<MonthViewResponse>> {
    validate_month(month)?;

    let habits = state.storage.habits().await;
    let sleep_log = state.storage.sleep_log().await;

    let month_days = dates::days_in_month(year, month);
    let keys = dates::month_keys(year, month);

    let days = month_days
        .iter()
        .zip(&keys)
        .map(|(date, key)| MonthDay {
            date: key.clone(),
            day: chrono::Datelike::day(date),
            day_name: dates::day_name(*date),
        })
        .collect();

    let rows = habits
        .iter()
        .map(|habit| MonthHabitRow {
            id: habit.id,
            name: habit.name.clone(),
            marks: keys.iter().map(|key| habit.is_completed_on(key)).collect(),
            progress: rates::habit_month_progress(habit, year, month),
        })
        .collect();

    Ok(Json(MonthViewResponse {
        year,
        month,
        days,
        habits: rows,
        comparison: compare::monthly_comparison(&habits, year, month),
        sleep: sleep::sleep_day_series(&sleep_log, year, month),
    }))
}
