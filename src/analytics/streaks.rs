//! Streak computation
//!
//! A streak is the count of consecutive calendar days, ending at or
//! immediately before the reference date, on which a habit was marked
//! complete.

use crate::analytics::dates::format_date;
use crate::storage::types::Habit;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Current streak for one completion set as of a reference date
///
/// If `as_of` itself is unmarked, counting starts at the day before: today
/// not yet marked does not break a streak that ran through yesterday. The
/// walk stops at the first missing day, so an empty set yields 0.
pub fn current_streak(completed: &BTreeSet<String>, as_of: NaiveDate) -> u32 {
    let mut day = as_of;
    if !completed.contains(&format_date(day)) {
        day -= Duration::days(1);
    }

    let mut streak = 0;
    while completed.contains(&format_date(day)) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Best *active* streak across all habits
///
/// A habit whose streak was broken contributes 0 regardless of how long it
/// once ran. Returns 0 when there are no habits.
pub fn best_streak(habits: &[Habit], as_of: NaiveDate) -> u32 {
    habits
        .iter()
        .map(|habit| current_streak(&habit.completed_dates, as_of))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::HabitDraft;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn completed(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_empty_set_has_zero_streak() {
        assert_eq!(current_streak(&BTreeSet::new(), date(2025, 6, 10)), 0);
    }

    #[test]
    fn test_three_consecutive_days_ending_today() {
        let set = completed(&["2025-06-08", "2025-06-09", "2025-06-10"]);
        assert_eq!(current_streak(&set, date(2025, 6, 10)), 3);
    }

    #[test]
    fn test_today_unmarked_does_not_break_streak() {
        // Yesterday and the day before are marked, today is not
        let set = completed(&["2025-06-08", "2025-06-09"]);
        assert_eq!(current_streak(&set, date(2025, 6, 10)), 2);
    }

    #[test]
    fn test_gap_before_yesterday_means_zero() {
        let set = completed(&["2025-06-01", "2025-06-02"]);
        assert_eq!(current_streak(&set, date(2025, 6, 10)), 0);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let set = completed(&["2025-05-30", "2025-05-31", "2025-06-01"]);
        assert_eq!(current_streak(&set, date(2025, 6, 1)), 3);
    }

    #[test]
    fn test_streak_crosses_leap_day() {
        let set = completed(&["2024-02-28", "2024-02-29", "2024-03-01"]);
        assert_eq!(current_streak(&set, date(2024, 3, 1)), 3);
    }

    #[test]
    fn test_best_streak_takes_max_over_habits() {
        let mut strong = Habit::new(1, HabitDraft::new("Run"));
        strong.completed_dates = completed(&[
            "2025-06-04",
            "2025-06-05",
            "2025-06-06",
            "2025-06-07",
            "2025-06-08",
            "2025-06-09",
            "2025-06-10",
        ]);
        let mut weak = Habit::new(2, HabitDraft::new("Read"));
        weak.completed_dates = completed(&["2025-06-10"]);

        assert_eq!(best_streak(&[strong, weak], date(2025, 6, 10)), 7);
        assert_eq!(best_streak(&[], date(2025, 6, 10)), 0);
    }

    #[test]
    fn test_broken_streak_no_longer_contributes() {
        // A long run in the past, nothing recent: active streak is 0
        let mut habit = Habit::new(1, HabitDraft::new("Write"));
        habit.completed_dates = completed(&[
            "2025-05-01",
            "2025-05-02",
            "2025-05-03",
            "2025-05-04",
            "2025-05-05",
        ]);
        assert_eq!(best_streak(&[habit], date(2025, 6, 10)), 0);
    }
}
