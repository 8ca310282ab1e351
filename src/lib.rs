//! # HabitFlow
//!
//! A Rust backend for tracking daily habits and nightly sleep, with a pure
//! analytics engine deriving streaks, completion rates, month-over-month
//! comparisons, achievements, and chart-ready sleep series.
//!
//! ## Features
//!
//! - **Pure analytics**: every computation takes an explicit snapshot and
//!   reference date; deterministic and trivially testable
//! - **Correct calendars**: month lengths, leap years, and year rollover
//!   come from the real calendar, never a table
//! - **Simple persistence**: habits and the sleep log live in two JSON
//!   files, loaded on open and written on every mutation
//! - **REST API**: Axum server feeding an external presentation layer
//!
//! ## Modules
//!
//! - [`analytics`]: the stateless computation layer
//! - [`storage`]: JSON snapshot persistence and persisted types
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use habitflow::analytics;
//! use habitflow::storage::{HabitDraft, HabitStore, StorageConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = HabitStore::open(StorageConfig::new("habitflow_data")).await?;
//!
//!     // Track a habit and mark today complete
//!     let habit = store
//!         .create_habit(HabitDraft::new("Meditate").category("Health"))
//!         .await?;
//!     let today = chrono::Local::now().date_naive();
//!     store
//!         .toggle_completion(habit.id, &analytics::format_date(today))
//!         .await?;
//!
//!     // Derive stats from a snapshot
//!     let habits = store.habits().await;
//!     let streak = analytics::best_streak(&habits, today);
//!     let window = analytics::trailing_days(today, 30);
//!     let rate = analytics::completion_rate(&habits, &window);
//!
//!     println!("best streak: {streak} days, 30-day rate: {rate}%");
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod storage;

// Re-export top-level types for convenience
pub use analytics::{
    Achievement, AchievementStatus, CategorySlice, HabitComparison, MonthlyRate, SleepDay,
    TimeField,
};

pub use storage::{
    Habit, HabitDraft, HabitStore, SleepEntry, SleepLog, SleepRecord, StorageConfig, StorageError,
    StorageResult,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
