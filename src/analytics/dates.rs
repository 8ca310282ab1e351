//! Calendar helpers
//!
//! Canonical `YYYY-MM-DD` date keys and the window constructors every other
//! analytics component builds on. Month lengths and leap years come from the
//! actual calendar via chrono, never a table. Months are 1-based throughout.

use chrono::{Datelike, Duration, NaiveDate};

/// Canonical date key format
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a date as its canonical key, zero-padded
///
/// `NaiveDate` carries no time-of-day component, so two values for the same
/// calendar day always format identically.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a canonical date key back into a date
pub fn parse_date(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Short weekday label ("Mon"), display only
pub fn day_name(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Short month label ("Jan") for series axes
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

/// Every day of a calendar month, ascending
pub fn days_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first.iter_days().take_while(|d| d.month() == month).collect()
}

/// Date keys for every day of a calendar month, ascending
pub fn month_keys(year: i32, month: u32) -> Vec<String> {
    days_in_month(year, month)
        .into_iter()
        .map(format_date)
        .collect()
}

/// Date keys for the N days ending at `as_of` inclusive, ascending
pub fn trailing_days(as_of: NaiveDate, n: u32) -> Vec<String> {
    (0..i64::from(n))
        .rev()
        .map(|back| format_date(as_of - Duration::days(back)))
        .collect()
}

/// The calendar month immediately before the given one
///
/// January maps to December of the prior year.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The calendar month N months before the given one
pub fn months_back(year: i32, month: u32, n: u32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - n as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}
