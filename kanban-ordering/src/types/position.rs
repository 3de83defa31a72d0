//! Placement types: drop semantics and the results handed back to callers.

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use crate::error::OrderingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested placement of a dropped task relative to its new column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DropPosition {
    /// Top of the column
    First,
    /// Bottom of the column
    Last,
    /// Directly above the target task
    Before,
    /// Directly below the target task
    After,
}

impl DropPosition {
    /// All drop positions, in declaration order
    pub const ALL: [DropPosition; 4] = [Self::First, Self::Last, Self::Before, Self::After];

    /// Whether this drop needs a reference task
    pub fn requires_target(self) -> bool {
        matches!(self, Self::Before | Self::After)
    }

    /// Get the wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for DropPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropPosition {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(OrderingError::invalid_argument(format!(
                "unknown drop position '{other}' (expected first, last, before or after)"
            ))),
        }
    }
}

impl TryFrom<String> for DropPosition {
    type Error = OrderingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One row the persistence layer has to write after a placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdate {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub position: f64,
}

impl From<&Task> for PositionUpdate {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            column_id: task.column_id.clone(),
            position: task.position,
        }
    }
}

/// Outcome of placing a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    /// Final position of the moved task (after any rebalance)
    pub new_position: f64,
    /// The destination column was renumbered
    pub needs_rebalancing: bool,
    /// Full snapshot, in input order, with the placement applied
    pub updated_tasks: Vec<Task>,
}

impl PositionResult {
    /// Find a task of the updated snapshot, typically the one that was moved
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.updated_tasks.iter().find(|t| &t.id == id)
    }

    /// Rows whose column or position differ from `original`.
    ///
    /// `original` must be the snapshot the result was computed from;
    /// `updated_tasks` keeps its order and length.
    pub fn write_set(&self, original: &[Task]) -> Vec<PositionUpdate> {
        changed_positions(original, &self.updated_tasks)
    }
}

/// Outcome of an explicit rebalancing pass over one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceResult {
    pub column_id: ColumnId,
    /// Number of tasks whose position actually changed
    pub changed: usize,
    pub updated_tasks: Vec<Task>,
}

impl RebalanceResult {
    /// Rows whose position differs from `original`
    pub fn write_set(&self, original: &[Task]) -> Vec<PositionUpdate> {
        changed_positions(original, &self.updated_tasks)
    }
}

fn changed_positions(original: &[Task], updated: &[Task]) -> Vec<PositionUpdate> {
    original
        .iter()
        .zip(updated)
        .filter(|(before, after)| {
            before.column_id != after.column_id || before.position != after.position
        })
        .map(|(_, after)| PositionUpdate::from(after))
        .collect()
}
