//! Core data types for the HabitFlow store
//!
//! This module defines the two persisted collections:
//! - `Habit`: a tracked habit with its set of completion date keys
//! - `SleepRecord` / `SleepEntry`: one night of sleep, keyed by date
//!
//! Persisted JSON keeps the camelCase field names of the legacy export format
//! (`completedDates`, `startTime`, `wakeupTime`), so existing exports load
//! unchanged.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A tracked habit
///
/// Completion state is a set of `YYYY-MM-DD` keys; a key is present exactly
/// when the habit was marked complete on that calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier (creation timestamp in milliseconds), immutable
    pub id: u64,
    /// Human-readable name, non-empty
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text category; empty string means uncategorized
    #[serde(default)]
    pub category: String,
    /// Completion date keys, unique by construction
    #[serde(default)]
    pub completed_dates: BTreeSet<String>,
}

impl Habit {
    /// Create a new habit from a draft, with an empty completion set
    pub fn new(id: u64, draft: HabitDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            completed_dates: BTreeSet::new(),
        }
    }

    /// Check whether the habit was completed on a given date key
    pub fn is_completed_on(&self, date_key: &str) -> bool {
        self.completed_dates.contains(date_key)
    }

    /// Flip completion for one date key
    ///
    /// Returns the new state: `true` if the key is now present. Toggling the
    /// same key twice restores the original set.
    pub fn toggle(&mut self, date_key: &str) -> bool {
        if self.completed_dates.remove(date_key) {
            false
        } else {
            self.completed_dates.insert(date_key.to_string());
            true
        }
    }
}

/// Mutable habit fields, used for creation and metadata updates
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HabitDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
}

impl HabitDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: set description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Builder: set category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// One night of sleep as stored on disk
///
/// Two shapes exist in the wild: the detailed object written by current
/// versions, and a legacy bare number of hours. Both deserialize here and
/// normalize to [`SleepEntry`] before any computation.
///
/// The map key is the wake-up date: the calendar day the night is logged
/// against. A start time later than the wake time is read as the evening
/// before.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SleepRecord {
    /// Current shape: hours plus the bed/wake times they derive from
    Detailed(SleepEntry),
    /// Legacy shape: hours only, no time detail
    Legacy(f64),
}

impl SleepRecord {
    /// Numeric hours regardless of shape
    pub fn hours(&self) -> f64 {
        match self {
            SleepRecord::Detailed(entry) => entry.hours,
            SleepRecord::Legacy(hours) => *hours,
        }
    }

    /// Normalize to the internal entry shape
    ///
    /// Legacy records carry no time detail; their time fields are `None`.
    pub fn normalized(&self) -> SleepEntry {
        match self {
            SleepRecord::Detailed(entry) => entry.clone(),
            SleepRecord::Legacy(hours) => SleepEntry {
                hours: *hours,
                start_time: None,
                wakeup_time: None,
            },
        }
    }
}

/// Normalized sleep entry
///
/// `hours` is always derived from the two times with overnight-wrap logic
/// when a log is saved; it is never edited independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntry {
    /// Duration in hours, rounded to 2 decimals
    pub hours: f64,
    /// Bedtime as `HH:mm`, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Wake time as `HH:mm`, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wakeup_time: Option<String>,
}

/// The persisted sleep log: one record per date key
///
/// A `BTreeMap` keeps keys in calendar order, since `YYYY-MM-DD` sorts
/// chronologically.
pub type SleepLog = BTreeMap<String, SleepRecord>;
