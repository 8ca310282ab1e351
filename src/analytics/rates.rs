//! Completion-rate aggregation
//!
//! Rates are integer percents over explicit windows of date keys. The
//! denominator is `|habits| × |window|` for aggregate rates and `|window|`
//! for single-habit rates; both degrade to 0 when the denominator is 0
//! rather than dividing by zero.

use crate::analytics::dates::{month_keys, month_label, months_back};
use crate::storage::types::Habit;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Bucket label for habits without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// How many months the dashboard rate series spans
pub const MONTHLY_SERIES_LEN: u32 = 6;

/// One month of the dashboard rate series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyRate {
    /// Short month label ("Jan")
    pub label: String,
    /// Aggregate completion rate over that month, 0-100
    pub rate: u32,
}

/// One slice of the category distribution
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySlice {
    pub label: String,
    pub count: usize,
}

/// Integer percent, rounded to nearest; 0 when the denominator is 0
pub(crate) fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u32
    }
}

/// Aggregate completion rate over a window of date keys
///
/// `opportunities = |habits| × |window|`; completed counts every
/// (habit, day) pair where the day's key is in the habit's completion set.
pub fn completion_rate(habits: &[Habit], window: &[String]) -> u32 {
    let opportunities = habits.len() * window.len();
    let completed: usize = habits
        .iter()
        .map(|habit| {
            window
                .iter()
                .filter(|key| habit.completed_dates.contains(key.as_str()))
                .count()
        })
        .sum();
    percent(completed, opportunities)
}

/// Single-habit completion rate over a window of date keys
pub fn habit_window_rate(habit: &Habit, window: &[String]) -> u32 {
    let matched = window
        .iter()
        .filter(|key| habit.completed_dates.contains(key.as_str()))
        .count();
    percent(matched, window.len())
}

/// Single-habit completion rate over one calendar month
pub fn habit_month_progress(habit: &Habit, year: i32, month: u32) -> u32 {
    habit_window_rate(habit, &month_keys(year, month))
}

/// Aggregate rate for each of the trailing 6 calendar months, oldest first
///
/// Each month is rated over its own full day list, ending with the month
/// containing `as_of`.
pub fn monthly_series(habits: &[Habit], as_of: NaiveDate) -> Vec<MonthlyRate> {
    (0..MONTHLY_SERIES_LEN)
        .rev()
        .map(|back| {
            let (year, month) = months_back(as_of.year(), as_of.month(), back);
            MonthlyRate {
                label: month_label(year, month),
                rate: completion_rate(habits, &month_keys(year, month)),
            }
        })
        .collect()
}

/// Habit counts per category, in order of first occurrence
///
/// Empty categories bucket under [`UNCATEGORIZED`]. Order is part of the
/// contract, so the scan is over a Vec rather than a map.
pub fn category_distribution(habits: &[Habit]) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for habit in habits {
        let label = if habit.category.trim().is_empty() {
            UNCATEGORIZED
        } else {
            habit.category.as_str()
        };
        match slices.iter_mut().find(|slice| slice.label == label) {
            Some(slice) => slice.count += 1,
            None => slices.push(CategorySlice {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::dates::trailing_days;
    use crate::storage::types::HabitDraft;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit_with(name: &str, keys: &[&str]) -> Habit {
        let mut habit = Habit::new(1, HabitDraft::new(name));
        habit.completed_dates = keys.iter().map(|k| k.to_string()).collect();
        habit
    }

    #[test]
    fn test_rate_is_zero_without_habits_or_window() {
        let window = trailing_days(date(2025, 6, 10), 30);
        assert_eq!(completion_rate(&[], &window), 0);

        let habits = vec![habit_with("Run", &["2025-06-10"])];
        assert_eq!(completion_rate(&habits, &[]), 0);
    }

    #[test]
    fn test_rate_counts_all_habit_day_pairs() {
        // 2 habits x 4 days = 8 opportunities, 4 completed
        let window = trailing_days(date(2025, 6, 10), 4);
        let habits = vec![
            habit_with("Run", &["2025-06-07", "2025-06-08", "2025-06-09"]),
            habit_with("Read", &["2025-06-10"]),
        ];
        assert_eq!(completion_rate(&habits, &window), 50);
    }

    #[test]
    fn test_rate_rounds_to_nearest() {
        // 1 of 3 days -> 33.33 -> 33; 2 of 3 -> 66.67 -> 67
        let window = trailing_days(date(2025, 6, 3), 3);
        let one = vec![habit_with("Run", &["2025-06-03"])];
        assert_eq!(completion_rate(&one, &window), 33);

        let two = vec![habit_with("Run", &["2025-06-02", "2025-06-03"])];
        assert_eq!(completion_rate(&two, &window), 67);
    }

    #[test]
    fn test_habit_window_rate_is_per_habit() {
        let window = trailing_days(date(2025, 6, 10), 30);
        let habit = habit_with("Run", &["2025-06-09", "2025-06-10", "2025-06-08"]);
        assert_eq!(habit_window_rate(&habit, &window), 10);
        assert_eq!(habit_window_rate(&habit, &[]), 0);
    }

    #[test]
    fn test_habit_month_progress_uses_month_length() {
        // 15 of 30 days in June
        let keys: Vec<String> = (1..=15).map(|d| format!("2025-06-{:02}", d)).collect();
        let refs: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        let habit = habit_with("Run", &refs);
        assert_eq!(habit_month_progress(&habit, 2025, 6), 50);
    }

    #[test]
    fn test_monthly_series_spans_six_months_oldest_first() {
        let habits = vec![habit_with("Run", &["2025-01-15"])];
        let series = monthly_series(&habits, date(2025, 3, 10));

        assert_eq!(series.len(), 6);
        let labels: Vec<&str> = series.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);

        // January: 1 of 31 days -> 3%
        assert_eq!(series[3].rate, 3);
        assert_eq!(series[0].rate, 0);
    }

    #[test]
    fn test_category_distribution_buckets_and_order() {
        let habits = vec![
            Habit::new(1, HabitDraft::new("Run").category("Health")),
            Habit::new(2, HabitDraft::new("Doodle")),
            Habit::new(3, HabitDraft::new("Walk").category("Health")),
        ];
        let slices = category_distribution(&habits);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Health");
        assert_eq!(slices[0].count, 2);
        assert_eq!(slices[1].label, UNCATEGORIZED);
        assert_eq!(slices[1].count, 1);
    }
}
