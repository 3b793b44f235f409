//! Core error types for pastor-planner-core.
//!
//! This module defines the error hierarchy using thiserror. Only one
//! rule violation is fatal to a submission (a devotional shorter than the
//! minimum); everything else is either an input problem caught at the
//! boundary or a configuration failure.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pastor-planner-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A blocking scheduling rule rejected the submission
    #[error("Submission blocked: {reason}")]
    SubmissionBlocked { reason: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

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

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// No usable configuration directory
    #[error("Cannot determine configuration directory")]
    NoConfigDir,
}

/// Boundary input errors.
///
/// These are raised before the scheduling rules run, e.g. when a form field
/// is missing or a value cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is required
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// Rest day outside 0..=6
    #[error("Rest day index {0} is out of range (expected 0-6)")]
    RestDayOutOfRange(i64),

    /// Unparseable value for a named field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::EmptyTitle.into();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyTitle)));
        assert_eq!(err.to_string(), "Validation error: Task title must not be empty");
    }

    #[test]
    fn blocked_submission_message_carries_reason() {
        let err = CoreError::SubmissionBlocked {
            reason: "too short".to_string(),
        };
        assert_eq!(err.to_string(), "Submission blocked: too short");
    }
}
