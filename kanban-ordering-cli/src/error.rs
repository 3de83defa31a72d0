//! Error type for CLI commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by `kanban-order` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected the request
    #[error(transparent)]
    Ordering(#[from] kanban_ordering::OrderingError),

    /// Reading the snapshot failed
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid task JSON
    #[error("invalid task snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
