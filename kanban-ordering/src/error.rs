//! Error types for the ordering engine

use crate::config::ConfigError;
use thiserror::Error;

/// Result type for ordering operations
pub type Result<T> = std::result::Result<T, OrderingError>;

/// Errors that can occur while computing task positions.
///
/// Every failing call returns before `updated_tasks` is built, so callers can
/// treat an error as a no-op for the requested move.
#[derive(Debug, Error)]
pub enum OrderingError {
    /// A required argument is missing or has an unrecognised value
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A referenced task does not exist where it was expected
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Configuration could not be loaded or failed validation
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl OrderingError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// The task being placed is not part of the snapshot
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: "task".into(),
            id: id.into(),
        }
    }

    /// The reference task of a `before`/`after` drop is not in the target column
    pub fn target_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: "target task".into(),
            id: id.into(),
        }
    }

    /// Check if this error was caused by the caller's arguments rather than
    /// the engine's configuration
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::NotFound { .. })
    }
}
