//! HabitFlow analytics engine
//!
//! The pure, stateless computation layer: every function takes an immutable
//! snapshot (habit list, sleep log) plus an explicit reference date and
//! returns freshly built value objects. Nothing here reads the clock,
//! mutates state, or fails on well-typed input — empty collections and
//! windows degrade to zero rates, missing sleep entries count as 0 hours.
//!
//! - [`dates`]: canonical date keys and window constructors
//! - [`streaks`]: current and best-active streak walks
//! - [`rates`]: completion rates, monthly series, category distribution
//! - [`compare`]: current-vs-previous window series
//! - [`achievements`]: fixed-order milestone evaluation
//! - [`sleep`]: duration math, 12-hour entry fields, calendar series

pub mod achievements;
pub mod compare;
pub mod dates;
pub mod rates;
pub mod sleep;
pub mod streaks;

pub use achievements::{evaluate, Achievement, AchievementStatus};
pub use compare::{
    compare_windows, monthly_comparison, rolling_comparison, HabitComparison,
    ROLLING_WINDOW_DAYS,
};
pub use dates::{
    day_name, days_in_month, format_date, month_keys, month_label, months_back, parse_date,
    previous_month, trailing_days,
};
pub use rates::{
    category_distribution, completion_rate, habit_month_progress, habit_window_rate,
    monthly_series, CategorySlice, MonthlyRate, UNCATEGORIZED,
};
pub use sleep::{
    duration_display, duration_hours, format_time, parse_time, sleep_day_series, Meridiem,
    SleepDay, TimeField,
};
pub use streaks::{best_streak, current_streak};
