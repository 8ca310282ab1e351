//! Store error types

use thiserror::Error;

/// Errors that can occur in the store
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Requested habit does not exist
    #[error("Habit not found: {0}")]
    HabitNotFound(u64),

    /// Input rejected before touching state
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::HabitNotFound(42);
        assert_eq!(err.to_string(), "Habit not found: 42");

        let err = StorageError::Validation("name cannot be empty".to_string());
        assert_eq!(err.to_string(), "Validation error: name cannot be empty");
    }
}
