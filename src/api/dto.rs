//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON with the same
//! camelCase field names the persisted JSON uses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analytics::{AchievementStatus, CategorySlice, HabitComparison, MonthlyRate, SleepDay};
use crate::storage::types::SleepEntry;

// ============================================
// HABIT DTOs
// ============================================

/// Create-habit request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitRequest {
    /// Habit name, non-empty after trimming
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text category; empty means uncategorized
    #[serde(default)]
    pub category: String,
}

/// Update-habit request (metadata only; completions are toggled, not edited)
pub type UpdateHabitRequest = CreateHabitRequest;

/// One habit with its derived streak
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitResponse {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub completed_dates: Vec<String>,
    /// Current streak as of the request's reference date
    pub current_streak: u32,
}

/// Habit list response
#[derive(Debug, Serialize)]
pub struct HabitListResponse {
    pub total: usize,
    pub habits: Vec<HabitResponse>,
}

/// Toggle-completion request
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    /// Date key in `YYYY-MM-DD` form
    pub date: String,
}

/// Toggle-completion response
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: u64,
    pub date: String,
    /// New state: `true` if the date is now marked complete
    pub completed: bool,
}

// ============================================
// SLEEP DTOs
// ============================================

/// Save-sleep request; hours are derived server-side, never accepted
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepLogRequest {
    /// Bedtime as `HH:mm`
    pub start_time: String,
    /// Wake time as `HH:mm`
    pub wakeup_time: String,
}

/// One saved night
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntryResponse {
    pub date: String,
    #[serde(flatten)]
    pub entry: SleepEntry,
    /// Live display value, e.g. "7h 30m"
    pub display: String,
}

/// Full sleep log, normalized entries keyed by date
#[derive(Debug, Serialize)]
pub struct SleepLogResponse {
    pub total: usize,
    pub entries: BTreeMap<String, SleepEntry>,
}

/// Calendar chart series for one month
#[derive(Debug, Serialize)]
pub struct SleepSeriesResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<SleepDay>,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Reference-date query parameter shared by the analytics endpoints
///
/// When omitted, handlers resolve the local calendar date once at the
/// boundary; the engine itself never reads the clock.
#[derive(Debug, Default, Deserialize)]
pub struct AsOfParams {
    /// `YYYY-MM-DD`; defaults to today
    #[serde(default)]
    pub as_of: Option<String>,
}

/// Dashboard summary cards
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_habits: usize,
    /// Aggregate completion rate over the trailing 30 days, 0-100
    pub completion_rate: u32,
    /// Best active streak across all habits, in days
    pub best_streak: u32,
}

/// Six-month rate series
#[derive(Debug, Serialize)]
pub struct MonthlyRatesResponse {
    pub months: Vec<MonthlyRate>,
}

/// Category distribution
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySlice>,
}

/// Habit comparison series (rolling or monthly)
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub habits: Vec<HabitComparison>,
}

/// Achievement evaluation, always in fixed order
#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub achievements: Vec<AchievementStatus>,
}

// ============================================
// MONTH VIEW DTOs
// ============================================

/// One day column of the month view header
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDay {
    /// Canonical date key
    pub date: String,
    /// Day of month, 1-based
    pub day: u32,
    /// Short weekday label ("Mon")
    pub day_name: String,
}

/// One habit row of the month view grid
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthHabitRow {
    pub id: u64,
    pub name: String,
    /// One mark per day of the month, in day order
    pub marks: Vec<bool>,
    /// Completion percent over this month, 0-100
    pub progress: u32,
}

/// Full month view payload: grid, progress, and month-over-month comparison
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthViewResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<MonthDay>,
    pub habits: Vec<MonthHabitRow>,
    pub comparison: Vec<HabitComparison>,
    pub sleep: Vec<SleepDay>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
    pub uptime_seconds: u64,
    pub version: String,
}
