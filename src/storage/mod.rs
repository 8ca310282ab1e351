//! Persistence layer
//!
//! JSON snapshot storage of the habit list and sleep log, plus the persisted
//! data types shared with the analytics engine.

pub mod engine;
pub mod error;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use engine::{HabitStore, StorageConfig};
pub use types::{Habit, HabitDraft, SleepEntry, SleepLog, SleepRecord};
