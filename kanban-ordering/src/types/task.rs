//! Task types: Task, Priority

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Task priority as shown on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A task/card on a kanban board.
///
/// The ordering engine reads and writes only `id`, `column_id` and `position`.
/// Every other field, including keys this struct does not know about, is
/// carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    #[serde(default)]
    pub title: String,

    /// Sort key within the column, ascending
    pub position: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Fields owned by other parts of the application
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Create a new task with a generated id
    pub fn new(title: impl Into<String>, column_id: impl Into<ColumnId>, position: f64) -> Self {
        Self {
            id: TaskId::new(),
            column_id: column_id.into(),
            title: title.into(),
            position,
            status: None,
            priority: None,
            description: None,
            due_date: None,
            extra: Map::new(),
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Copy of this task placed at `position` in `column_id`
    pub fn placed(&self, column_id: &ColumnId, position: f64) -> Self {
        Self {
            column_id: column_id.clone(),
            position,
            ..self.clone()
        }
    }

    /// Whether the task belongs to the given column
    pub fn is_in(&self, column_id: &ColumnId) -> bool {
        &self.column_id == column_id
    }
}
