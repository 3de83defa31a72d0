//! Ordered view of one column inside a task snapshot

use crate::types::{ColumnId, Task, TaskId};
use tracing::trace;

/// The tasks of one column sorted by ascending position.
///
/// Ties keep their snapshot order (stable sort).
#[derive(Debug, Clone)]
pub struct ColumnSnapshot<'a> {
    column_id: &'a ColumnId,
    tasks: Vec<&'a Task>,
}

impl<'a> ColumnSnapshot<'a> {
    /// Read the ordered column `column_id` out of `tasks`
    pub fn read(tasks: &'a [Task], column_id: &'a ColumnId) -> Self {
        Self::read_excluding(tasks, column_id, None)
    }

    /// Read the ordered column, leaving `exclude` out of the comparison set
    pub fn read_excluding(
        tasks: &'a [Task],
        column_id: &'a ColumnId,
        exclude: Option<&TaskId>,
    ) -> Self {
        let column: Vec<&Task> = column_order(tasks, column_id, exclude)
            .into_iter()
            .map(|index| &tasks[index])
            .collect();

        trace!(
            column_id = %column_id,
            count = column.len(),
            "read column snapshot"
        );

        Self {
            column_id,
            tasks: column,
        }
    }

    pub fn column_id(&self) -> &ColumnId {
        self.column_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn first(&self) -> Option<&'a Task> {
        self.tasks.first().copied()
    }

    pub fn last(&self) -> Option<&'a Task> {
        self.tasks.last().copied()
    }

    /// Index of a task within the ordered column
    pub fn index_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Task at `index` in display order
    pub fn get(&self, index: usize) -> Option<&'a Task> {
        self.tasks.get(index).copied()
    }

    /// Iterate in display order
    pub fn iter(&self) -> impl Iterator<Item = &'a Task> + '_ {
        self.tasks.iter().copied()
    }

    /// Positions in display order
    pub fn positions(&self) -> Vec<f64> {
        self.tasks.iter().map(|t| t.position).collect()
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|t| t.id.clone()).collect()
    }
}

/// Snapshot indices of the column's tasks in display order
pub(crate) fn column_order(
    tasks: &[Task],
    column_id: &ColumnId,
    exclude: Option<&TaskId>,
) -> Vec<usize> {
    let mut order: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_in(column_id) && exclude != Some(&t.id))
        .map(|(index, _)| index)
        .collect();
    order.sort_by(|&a, &b| tasks[a].position.total_cmp(&tasks[b].position));
    order
}
