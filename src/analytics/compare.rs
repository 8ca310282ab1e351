//! Window comparison
//!
//! Builds "current window vs previous window" series for the dashboard and
//! monthly charts: each habit is rated independently over both windows.

use crate::analytics::dates::{month_keys, previous_month, trailing_days};
use crate::analytics::rates::habit_window_rate;
use crate::storage::types::Habit;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::cmp::Reverse;

/// How many days each side of the rolling comparison covers
pub const ROLLING_WINDOW_DAYS: u32 = 30;

/// One habit's rates over the two compared windows
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HabitComparison {
    pub name: String,
    /// Rate over the current window, 0-100
    pub current_rate: u32,
    /// Rate over the previous window, 0-100
    pub previous_rate: u32,
}

/// Rate every habit over an explicit pair of windows, in habit order
pub fn compare_windows(
    habits: &[Habit],
    current: &[String],
    previous: &[String],
) -> Vec<HabitComparison> {
    habits
        .iter()
        .map(|habit| HabitComparison {
            name: habit.name.clone(),
            current_rate: habit_window_rate(habit, current),
            previous_rate: habit_window_rate(habit, previous),
        })
        .collect()
}

/// Trailing 30 days vs the 30 before them, ranked by current rate
///
/// Sorted descending; the sort is stable, so ties keep habit order.
pub fn rolling_comparison(habits: &[Habit], as_of: NaiveDate) -> Vec<HabitComparison> {
    let current = trailing_days(as_of, ROLLING_WINDOW_DAYS);
    let previous = trailing_days(
        as_of - Duration::days(i64::from(ROLLING_WINDOW_DAYS)),
        ROLLING_WINDOW_DAYS,
    );

    let mut rows = compare_windows(habits, &current, &previous);
    rows.sort_by_key(|row| Reverse(row.current_rate));
    rows
}

/// One calendar month vs the immediately preceding month, in habit order
///
/// The previous month keeps its own day count; January compares against
/// December of the prior year.
pub fn monthly_comparison(habits: &[Habit], year: i32, month: u32) -> Vec<HabitComparison> {
    let current = month_keys(year, month);
    let (prev_year, prev_month) = previous_month(year, month);
    let previous = month_keys(prev_year, prev_month);

    compare_windows(habits, &current, &previous)
}
