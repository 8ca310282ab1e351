//! Achievement evaluation
//!
//! Pure boolean milestones over aggregate stats, re-derived on every call.
//! Nothing is persisted as "earned": the same inputs always produce the same
//! flags, and the output order is fixed because the presentation layer relies
//! on it.

use crate::analytics::dates::format_date;
use crate::analytics::streaks;
use crate::storage::types::{Habit, SleepLog};
use chrono::NaiveDate;
use serde::Serialize;

/// Hours of sleep that unlock `sleep-guru`
pub const SLEEP_GURU_HOURS: f64 = 7.0;

/// The fixed set of milestones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    FirstStep,
    StreakMaster,
    ConsistencyKing,
    DailyChampion,
    SleepGuru,
}

impl Achievement {
    /// All achievements in evaluation order (part of the contract)
    pub fn all() -> &'static [Achievement] {
        &[
            Achievement::FirstStep,
            Achievement::StreakMaster,
            Achievement::ConsistencyKing,
            Achievement::DailyChampion,
            Achievement::SleepGuru,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Achievement::FirstStep => "first-step",
            Achievement::StreakMaster => "streak-master",
            Achievement::ConsistencyKing => "consistency-king",
            Achievement::DailyChampion => "daily-champion",
            Achievement::SleepGuru => "sleep-guru",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstStep => "First Step",
            Achievement::StreakMaster => "Streak Master",
            Achievement::ConsistencyKing => "Consistency King",
            Achievement::DailyChampion => "Daily Champion",
            Achievement::SleepGuru => "Sleep Guru",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstStep => "Create your first habit",
            Achievement::StreakMaster => "Reach a 7-day streak",
            Achievement::ConsistencyKing => "Reach a 30-day streak",
            Achievement::DailyChampion => "Complete all habits in a day",
            Achievement::SleepGuru => "Log 7+ hours sleep",
        }
    }
}

/// One evaluated milestone
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AchievementStatus {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Evaluate every milestone against the current snapshot
///
/// Returns one entry per achievement, always in [`Achievement::all`] order.
pub fn evaluate(habits: &[Habit], sleep_log: &SleepLog, as_of: NaiveDate) -> Vec<AchievementStatus> {
    let best = streaks::best_streak(habits, as_of);
    let today_key = format_date(as_of);

    Achievement::all()
        .iter()
        .map(|achievement| {
            let unlocked = match achievement {
                Achievement::FirstStep => !habits.is_empty(),
                Achievement::StreakMaster => best >= 7,
                Achievement::ConsistencyKing => best >= 30,
                Achievement::DailyChampion => {
                    !habits.is_empty()
                        && habits.iter().all(|h| h.completed_dates.contains(&today_key))
                }
                Achievement::SleepGuru => {
                    sleep_log.values().any(|record| record.hours() >= SLEEP_GURU_HOURS)
                }
            };
            AchievementStatus {
                id: achievement.id(),
                title: achievement.title(),
                description: achievement.description(),
                unlocked,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::{HabitDraft, SleepRecord};
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit_with(id: u64, name: &str, keys: &[&str]) -> Habit {
        let mut habit = Habit::new(id, HabitDraft::new(name));
        habit.completed_dates = keys.iter().map(|k| k.to_string()).collect();
        habit
    }

    #[test]
    fn test_order_is_fixed_regardless_of_input() {
        let statuses = evaluate(&[], &BTreeMap::new(), date(2025, 6, 10));
        let ids: Vec<&str> = statuses.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "first-step",
                "streak-master",
                "consistency-king",
                "daily-champion",
                "sleep-guru"
            ]
        );
        assert!(statuses.iter().all(|s| !s.unlocked));
    }

    #[test]
    fn test_seven_day_streak_unlocks_streak_master_only() {
        let week: Vec<String> = (4..=10).map(|d| format!("2025-06-{:02}", d)).collect();
        let refs: Vec<&str> = week.iter().map(|k| k.as_str()).collect();
        let habits = vec![
            habit_with(1, "Run", &refs),
            habit_with(2, "Read", &["2025-06-10"]),
        ];

        let statuses = evaluate(&habits, &BTreeMap::new(), date(2025, 6, 10));
        let by_id = |id: &str| statuses.iter().find(|s| s.id == id).unwrap().unlocked;

        assert!(by_id("first-step"));
        assert!(by_id("streak-master"));
        assert!(!by_id("consistency-king"));
    }

    #[test]
    fn test_daily_champion_requires_every_habit_today() {
        let habits = vec![
            habit_with(1, "Run", &["2025-06-10"]),
            habit_with(2, "Read", &["2025-06-10"]),
        ];
        let statuses = evaluate(&habits, &BTreeMap::new(), date(2025, 6, 10));
        assert!(statuses.iter().find(|s| s.id == "daily-champion").unwrap().unlocked);

        let partial = vec![
            habit_with(1, "Run", &["2025-06-10"]),
            habit_with(2, "Read", &["2025-06-09"]),
        ];
        let statuses = evaluate(&partial, &BTreeMap::new(), date(2025, 6, 10));
        assert!(!statuses.iter().find(|s| s.id == "daily-champion").unwrap().unlocked);
    }

    #[test]
    fn test_daily_champion_needs_at_least_one_habit() {
        let statuses = evaluate(&[], &BTreeMap::new(), date(2025, 6, 10));
        assert!(!statuses.iter().find(|s| s.id == "daily-champion").unwrap().unlocked);
    }

    #[test]
    fn test_sleep_guru_accepts_both_record_shapes() {
        let mut log: SleepLog = BTreeMap::new();
        log.insert("2025-06-09".to_string(), SleepRecord::Legacy(6.0));
        let statuses = evaluate(&[], &log, date(2025, 6, 10));
        assert!(!statuses.iter().find(|s| s.id == "sleep-guru").unwrap().unlocked);

        log.insert("2025-06-10".to_string(), SleepRecord::Legacy(7.5));
        let statuses = evaluate(&[], &log, date(2025, 6, 10));
        assert!(statuses.iter().find(|s| s.id == "sleep-guru").unwrap().unlocked);
    }
}
