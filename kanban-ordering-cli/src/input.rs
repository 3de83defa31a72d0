//! Task snapshot input.

use std::io::Read;
use std::path::Path;

use kanban_ordering::Task;
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

/// Accepted snapshot shapes: a bare array or `{ "tasks": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Tasks(Vec<Task>),
    Board { tasks: Vec<Task> },
}

/// Read a snapshot from `path`, or from stdin when `path` is `-`
pub fn read_snapshot(path: &Path) -> Result<Vec<Task>, CliError> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    let tasks = parse_snapshot(&raw)?;
    debug!(count = tasks.len(), "read task snapshot");
    Ok(tasks)
}

/// Parse snapshot JSON
pub fn parse_snapshot(raw: &str) -> Result<Vec<Task>, CliError> {
    let snapshot: Snapshot = serde_json::from_str(raw).map_err(CliError::Snapshot)?;
    Ok(match snapshot {
        Snapshot::Tasks(tasks) | Snapshot::Board { tasks } => tasks,
    })
}
