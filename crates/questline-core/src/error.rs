//! Core error types for questline-core.
//!
//! The algorithms themselves are total; these errors come from the
//! boundary where data and configuration enter the library.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for questline-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Snapshot file could not be read
    #[error("Failed to read snapshot {path}: {source}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors raised at the data boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Difficulty outside 1..=5
    #[error("Difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(i64),

    /// Two quests share an id
    #[error("Duplicate quest id {0}")]
    DuplicateQuest(Uuid),

    /// A submission points at a quest that is not in the data set
    #[error("Submission {submission} references unknown quest {quest}")]
    UnknownQuest { submission: Uuid, quest: Uuid },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_into_core_error() {
        let err: CoreError = ValidationError::DifficultyOutOfRange(9).into();
        assert_eq!(
            err.to_string(),
            "Validation error: Difficulty must be between 1 and 5, got 9"
        );
    }

    #[test]
    fn test_unknown_quest_message_names_both_ids() {
        let submission = Uuid::nil();
        let quest = Uuid::from_u128(7);
        let msg = ValidationError::UnknownQuest { submission, quest }.to_string();
        assert!(msg.contains(&submission.to_string()));
        assert!(msg.contains(&quest.to_string()));
    }
}
