//! HabitFlow storage engine
//!
//! JSON snapshot persistence for the two collections: habits and the sleep
//! log. State loads once on open and persists after every mutation, the way
//! a browser's key-value storage would. Reads hand out cloned snapshots so
//! the analytics layer always sees a consistent view.
//!
//! Thread-safe via Tokio's async RwLock for concurrent access.

use crate::analytics::{dates, sleep};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::types::{Habit, HabitDraft, SleepEntry, SleepLog, SleepRecord};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Configuration for the store
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for all data
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("habitflow_data"),
        }
    }
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get path to the habits file
    pub fn habits_path(&self) -> PathBuf {
        self.data_dir.join("habits.json")
    }

    /// Get path to the sleep log file
    pub fn sleep_path(&self) -> PathBuf {
        self.data_dir.join("sleep.json")
    }
}

/// In-memory state guarded by the store's lock
#[derive(Debug, Default)]
struct StoreState {
    habits: Vec<Habit>,
    sleep: SleepLog,
}

/// The HabitFlow store
///
/// Owns mutation and persistence of habits and sleep records. The analytics
/// engine never touches this directly; callers pass it snapshots from
/// [`HabitStore::habits`] and [`HabitStore::sleep_log`].
pub struct HabitStore {
    config: StorageConfig,
    state: RwLock<StoreState>,
}

impl HabitStore {
    /// Open the store, loading any existing state from disk
    ///
    /// Absent files mean empty collections, not errors.
    pub async fn open(config: StorageConfig) -> StorageResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let habits: Vec<Habit> = load_json(&config.habits_path())?.unwrap_or_default();
        let sleep: SleepLog = load_json(&config.sleep_path())?.unwrap_or_default();

        tracing::info!(
            habits = habits.len(),
            sleep_entries = sleep.len(),
            data_dir = %config.data_dir.display(),
            "Opened habit store"
        );

        Ok(Self {
            config,
            state: RwLock::new(StoreState { habits, sleep }),
        })
    }

    /// Snapshot of all habits, in creation order
    pub async fn habits(&self) -> Vec<Habit> {
        self.state.read().await.habits.clone()
    }

    /// Snapshot of the sleep log
    pub async fn sleep_log(&self) -> SleepLog {
        self.state.read().await.sleep.clone()
    }

    /// Look up one habit by id
    pub async fn get_habit(&self, id: u64) -> Option<Habit> {
        self.state
            .read()
            .await
            .habits
            .iter()
            .find(|h| h.id == id)
            .cloned()
    }

    /// Create a new habit with an empty completion set
    pub async fn create_habit(&self, draft: HabitDraft) -> StorageResult<Habit> {
        let draft = validate_draft(draft)?;
        let mut state = self.state.write().await;

        // Creation-timestamp ids, bumped past any collision
        let mut id = Utc::now().timestamp_millis() as u64;
        while state.habits.iter().any(|h| h.id == id) {
            id += 1;
        }

        let habit = Habit::new(id, draft);
        state.habits.push(habit.clone());
        self.persist_habits(&state)?;

        tracing::info!(habit_id = id, name = %habit.name, "Created habit");
        Ok(habit)
    }

    /// Update a habit's metadata; the completion set is untouched
    pub async fn update_habit(&self, id: u64, draft: HabitDraft) -> StorageResult<Habit> {
        let draft = validate_draft(draft)?;
        let mut state = self.state.write().await;

        let habit = state
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(StorageError::HabitNotFound(id))?;

        habit.name = draft.name;
        habit.description = draft.description;
        habit.category = draft.category;
        let updated = habit.clone();

        self.persist_habits(&state)?;
        tracing::info!(habit_id = id, "Updated habit");
        Ok(updated)
    }

    /// Delete a habit
    ///
    /// The completion set vanishes with it; nothing else references a habit,
    /// so there is nothing to orphan.
    pub async fn delete_habit(&self, id: u64) -> StorageResult<()> {
        let mut state = self.state.write().await;

        let before = state.habits.len();
        state.habits.retain(|h| h.id != id);
        if state.habits.len() == before {
            return Err(StorageError::HabitNotFound(id));
        }

        self.persist_habits(&state)?;
        tracing::info!(habit_id = id, "Deleted habit");
        Ok(())
    }

    /// Flip completion of one date key for one habit
    ///
    /// Returns the new state (`true` = now completed). Toggling the same key
    /// twice restores the original set.
    pub async fn toggle_completion(&self, id: u64, date_key: &str) -> StorageResult<bool> {
        if dates::parse_date(date_key).is_none() {
            return Err(StorageError::Validation(format!(
                "Invalid date key: {date_key}"
            )));
        }

        let mut state = self.state.write().await;
        let habit = state
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(StorageError::HabitNotFound(id))?;

        let now_completed = habit.toggle(date_key);
        self.persist_habits(&state)?;

        tracing::debug!(
            habit_id = id,
            date = date_key,
            completed = now_completed,
            "Toggled completion"
        );
        Ok(now_completed)
    }

    /// Save one night of sleep, overwriting any existing record wholesale
    ///
    /// Hours are always recomputed from the two times here; callers cannot
    /// set them independently. The date key is the wake-up date.
    pub async fn save_sleep(
        &self,
        date_key: &str,
        start_time: &str,
        wakeup_time: &str,
    ) -> StorageResult<SleepEntry> {
        if dates::parse_date(date_key).is_none() {
            return Err(StorageError::Validation(format!(
                "Invalid date key: {date_key}"
            )));
        }
        let start = sleep::parse_time(start_time).ok_or_else(|| {
            StorageError::Validation(format!("Invalid start time: {start_time}"))
        })?;
        let wake = sleep::parse_time(wakeup_time).ok_or_else(|| {
            StorageError::Validation(format!("Invalid wakeup time: {wakeup_time}"))
        })?;

        let entry = SleepEntry {
            hours: sleep::duration_hours(start, wake),
            start_time: Some(sleep::format_time(start)),
            wakeup_time: Some(sleep::format_time(wake)),
        };

        let mut state = self.state.write().await;
        state
            .sleep
            .insert(date_key.to_string(), SleepRecord::Detailed(entry.clone()));
        self.persist_sleep(&state)?;

        tracing::info!(date = date_key, hours = entry.hours, "Saved sleep log");
        Ok(entry)
    }

    fn persist_habits(&self, state: &StoreState) -> StorageResult<()> {
        save_json(&self.config.habits_path(), &state.habits)
    }

    fn persist_sleep(&self, state: &StoreState) -> StorageResult<()> {
        save_json(&self.config.sleep_path(), &state.sleep)
    }
}

/// Reject drafts that would create an unusable habit
fn validate_draft(mut draft: HabitDraft) -> StorageResult<HabitDraft> {
    draft.name = draft.name.trim().to_string();
    if draft.name.is_empty() {
        return Err(StorageError::Validation(
            "Habit name cannot be empty".to_string(),
        ));
    }
    draft.category = draft.category.trim().to_string();
    Ok(draft)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

fn save_json<T: serde::Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
