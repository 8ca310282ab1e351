//! Sleep duration computation
//!
//! Bedtime and wake time are clock-of-day values on an arbitrary shared
//! reference date; a wake time earlier than the bedtime means the interval
//! crossed midnight and gains 24 hours. Also provides the 12-hour entry
//! model whose fields clamp on commit, and the per-day month series for the
//! calendar chart.

use crate::analytics::dates::month_keys;
use crate::storage::types::SleepLog;
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MINUTES_PER_DAY: i64 = 24 * 60;

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").expect("valid regex"))
}

/// Parse an `HH:mm` 24-hour wire value
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let caps = time_pattern().captures(value.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Format a time back to the `HH:mm` wire value
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Whole minutes slept, wrapping past midnight when needed
fn minutes_between(start: NaiveTime, wake: NaiveTime) -> i64 {
    let mut diff = (wake - start).num_minutes();
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }
    diff
}

/// Hours slept, rounded to 2 decimals
///
/// `22:00 -> 07:00` is 9.0; `07:00 -> 22:00` is 15.0 (no wrap when the wake
/// time is later in the day).
pub fn duration_hours(start: NaiveTime, wake: NaiveTime) -> f64 {
    let hours = minutes_between(start, wake) as f64 / 60.0;
    (hours * 100.0).round() / 100.0
}

/// Live `"{h}h {m}m"` display value, unrounded
///
/// Derived for display on every input change; the persisted value is
/// [`duration_hours`].
pub fn duration_display(start: NaiveTime, wake: NaiveTime) -> String {
    let minutes = minutes_between(start, wake);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// AM/PM half of the 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

/// One time field of the 12-hour entry form
///
/// Out-of-range numeric edits are clamped when the field commits, never
/// rejected: hours land in 1-12, minutes in 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeField {
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

impl TimeField {
    /// Commit raw numeric input, clamping into range
    pub fn clamped(hour: i64, minute: i64, meridiem: Meridiem) -> Self {
        Self {
            hour: hour.clamp(1, 12) as u32,
            minute: minute.clamp(0, 59) as u32,
            meridiem,
        }
    }

    /// Convert to the 24-hour clock value
    pub fn to_time(self) -> NaiveTime {
        let hour24 = match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Pm, hour) if hour != 12 => hour + 12,
            (_, hour) => hour,
        };
        NaiveTime::from_hms_opt(hour24 % 24, self.minute.min(59), 0).unwrap_or(NaiveTime::MIN)
    }

    /// Break a 24-hour clock value into 12-hour fields
    pub fn from_time(time: NaiveTime) -> Self {
        let hour24 = time.hour();
        let meridiem = if hour24 >= 12 { Meridiem::Pm } else { Meridiem::Am };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute: time.minute(),
            meridiem,
        }
    }
}

/// One day of the sleep calendar chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SleepDay {
    /// Canonical date key
    pub date: String,
    /// Hours slept that night; 0 when nothing was logged
    pub hours: f64,
}

/// Hours slept for every day of a calendar month, ascending
///
/// Days without a record report 0 hours, so the chart axis always covers the
/// whole month. Legacy bare-number records normalize like any other.
pub fn sleep_day_series(log: &SleepLog, year: i32, month: u32) -> Vec<SleepDay> {
    month_keys(year, month)
        .into_iter()
        .map(|key| {
            let hours = log.get(&key).map(|record| record.hours()).unwrap_or(0.0);
            SleepDay { date: key, hours }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::SleepRecord;
    use std::collections::BTreeMap;

    fn time(value: &str) -> NaiveTime {
        parse_time(value).unwrap()
    }

    #[test]
    fn test_overnight_duration_wraps() {
        assert_eq!(duration_hours(time("22:00"), time("07:00")), 9.0);
        assert_eq!(duration_hours(time("23:30"), time("00:15")), 0.75);
    }

    #[test]
    fn test_same_day_duration_does_not_wrap() {
        assert_eq!(duration_hours(time("07:00"), time("22:00")), 15.0);
    }

    #[test]
    fn test_identical_times_is_zero_not_24() {
        assert_eq!(duration_hours(time("08:00"), time("08:00")), 0.0);
    }

    #[test]
    fn test_duration_rounds_to_two_decimals() {
        // 7h 25m = 7.4166... -> 7.42
        assert_eq!(duration_hours(time("23:00"), time("06:25")), 7.42);
    }

    #[test]
    fn test_duration_display_floors_hours() {
        assert_eq!(duration_display(time("23:00"), time("06:25")), "7h 25m");
        assert_eq!(duration_display(time("22:00"), time("07:00")), "9h 0m");
    }

    #[test]
    fn test_parse_time_accepts_wire_format_only() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("9:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert!(parse_time("24:00").is_none());
        assert!(parse_time("12:60").is_none());
        assert!(parse_time("noon").is_none());
    }

    #[test]
    fn test_time_field_clamps_on_commit() {
        let field = TimeField::clamped(0, 75, Meridiem::Am);
        assert_eq!(field.hour, 1);
        assert_eq!(field.minute, 59);

        let field = TimeField::clamped(13, -5, Meridiem::Pm);
        assert_eq!(field.hour, 12);
        assert_eq!(field.minute, 0);
    }

    #[test]
    fn test_time_field_twelve_hour_conversion() {
        // 12 AM is midnight, 12 PM is noon
        assert_eq!(
            TimeField::clamped(12, 0, Meridiem::Am).to_time(),
            time("00:00")
        );
        assert_eq!(
            TimeField::clamped(12, 0, Meridiem::Pm).to_time(),
            time("12:00")
        );
        assert_eq!(
            TimeField::clamped(10, 30, Meridiem::Pm).to_time(),
            time("22:30")
        );

        let round_trip = TimeField::from_time(time("22:30"));
        assert_eq!(round_trip, TimeField::clamped(10, 30, Meridiem::Pm));
        assert_eq!(TimeField::from_time(time("00:05")).hour, 12);
    }

    #[test]
    fn test_sleep_day_series_covers_whole_month() {
        let mut log: SleepLog = BTreeMap::new();
        log.insert("2025-06-01".to_string(), SleepRecord::Legacy(8.0));
        log.insert(
            "2025-06-15".to_string(),
            SleepRecord::Detailed(crate::storage::types::SleepEntry {
                hours: 6.5,
                start_time: Some("23:30".to_string()),
                wakeup_time: Some("06:00".to_string()),
            }),
        );

        let series = sleep_day_series(&log, 2025, 6);
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].hours, 8.0);
        assert_eq!(series[14].hours, 6.5);
        assert_eq!(series[1].hours, 0.0);
    }
}
