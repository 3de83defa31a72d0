//! Placement strategies for dropped and newly created tasks

use crate::config::OrderingConfig;
use crate::error::{OrderingError, Result};
use crate::gap::{self, GapVerdict};
use crate::rebalance::renumber;
use crate::snapshot::{column_order, ColumnSnapshot};
use crate::types::{ColumnId, DropPosition, PositionResult, Task, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Move a task to a position in a (possibly different) column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// The task being placed
    pub task_id: TaskId,
    /// Destination column
    pub target_column_id: ColumnId,
    /// Where in the column the task lands
    pub drop_position: DropPosition,
    /// Reference task for `before`/`after` drops
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_task_id: Option<TaskId>,
}

impl PlacementRequest {
    /// Create a placement request without a reference task
    pub fn new(
        task_id: impl Into<TaskId>,
        target_column_id: impl Into<ColumnId>,
        drop_position: DropPosition,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            target_column_id: target_column_id.into(),
            drop_position,
            target_task_id: None,
        }
    }

    /// Move a task to the top of a column
    pub fn first(task_id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self::new(task_id, column, DropPosition::First)
    }

    /// Move a task to the bottom of a column
    pub fn last(task_id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self::new(task_id, column, DropPosition::Last)
    }

    /// Move a task directly above `target`
    pub fn before(
        task_id: impl Into<TaskId>,
        column: impl Into<ColumnId>,
        target: impl Into<TaskId>,
    ) -> Self {
        Self::new(task_id, column, DropPosition::Before).with_target(target)
    }

    /// Move a task directly below `target`
    pub fn after(
        task_id: impl Into<TaskId>,
        column: impl Into<ColumnId>,
        target: impl Into<TaskId>,
    ) -> Self {
        Self::new(task_id, column, DropPosition::After).with_target(target)
    }

    /// Set the reference task
    pub fn with_target(mut self, target: impl Into<TaskId>) -> Self {
        self.target_task_id = Some(target.into());
        self
    }

    fn require_target(&self) -> Result<&TaskId> {
        self.target_task_id.as_ref().ok_or_else(|| {
            OrderingError::invalid_argument(format!(
                "target_task_id is required for '{}' placement",
                self.drop_position
            ))
        })
    }
}

/// Position chosen for the moved task before any renumbering
#[derive(Debug, Clone, Copy, PartialEq)]
enum Candidate {
    /// Safe to write as-is
    Position(f64),
    /// The neighbour gap is exhausted; insert at `rank` and renumber the column
    Rebalance { provisional: f64, rank: usize },
}

/// Compute where `request.task_id` lands and derive the new snapshot.
///
/// `tasks` is never modified; the result holds a fresh copy in which only the
/// moved task differs, unless the destination column had to be rebalanced.
pub fn place(
    tasks: &[Task],
    request: &PlacementRequest,
    config: &OrderingConfig,
) -> Result<PositionResult> {
    let moved_index = tasks
        .iter()
        .position(|t| t.id == request.task_id)
        .ok_or_else(|| OrderingError::task_not_found(request.task_id.as_str()))?;

    let column = ColumnSnapshot::read_excluding(
        tasks,
        &request.target_column_id,
        Some(&request.task_id),
    );

    let candidate = choose(&column, request, config)?;
    debug!(
        task_id = %request.task_id,
        column_id = %request.target_column_id,
        drop_position = %request.drop_position,
        ?candidate,
        "placement candidate"
    );

    let mut updated = tasks.to_vec();
    match candidate {
        Candidate::Position(position) => {
            if position.abs() < config.min_gap {
                warn!(
                    task_id = %request.task_id,
                    position,
                    "position is below the precision floor; rebalance the column"
                );
            }
            updated[moved_index] = tasks[moved_index].placed(&request.target_column_id, position);

            Ok(PositionResult {
                new_position: position,
                needs_rebalancing: false,
                updated_tasks: updated,
            })
        }
        Candidate::Rebalance { provisional, rank } => {
            updated[moved_index] =
                tasks[moved_index].placed(&request.target_column_id, provisional);

            let mut order = column_order(tasks, &request.target_column_id, Some(&request.task_id));
            order.insert(rank, moved_index);
            renumber(&mut updated, &order, config.gap);

            let new_position = updated[moved_index].position;
            info!(
                task_id = %request.task_id,
                column_id = %request.target_column_id,
                count = order.len(),
                new_position,
                "rebalanced column"
            );

            Ok(PositionResult {
                new_position,
                needs_rebalancing: true,
                updated_tasks: updated,
            })
        }
    }
}

fn choose(
    column: &ColumnSnapshot<'_>,
    request: &PlacementRequest,
    config: &OrderingConfig,
) -> Result<Candidate> {
    match request.drop_position {
        DropPosition::First => Ok(Candidate::Position(match column.first() {
            Some(first) => first.position / 2.0,
            None => config.gap,
        })),
        DropPosition::Last => Ok(Candidate::Position(match column.last() {
            Some(last) => last.position + config.gap,
            None => config.gap,
        })),
        DropPosition::Before => {
            let (index, target) = find_target(column, request.require_target()?)?;
            if index == 0 {
                return Ok(Candidate::Position(target.position / 2.0));
            }
            let prev = neighbour(column, index - 1)?;
            Ok(
                match gap::midpoint(prev.position, target.position, config.rebalance_threshold) {
                    GapVerdict::Safe { midpoint } => Candidate::Position(midpoint),
                    GapVerdict::Exhausted { .. } => Candidate::Rebalance {
                        provisional: target.position,
                        rank: index,
                    },
                },
            )
        }
        DropPosition::After => {
            let (index, target) = find_target(column, request.require_target()?)?;
            if index + 1 == column.len() {
                return Ok(Candidate::Position(target.position + config.gap));
            }
            let next = neighbour(column, index + 1)?;
            Ok(
                match gap::midpoint(target.position, next.position, config.rebalance_threshold) {
                    GapVerdict::Safe { midpoint } => Candidate::Position(midpoint),
                    GapVerdict::Exhausted { .. } => Candidate::Rebalance {
                        provisional: target.position,
                        rank: index + 1,
                    },
                },
            )
        }
    }
}

fn find_target<'a>(column: &ColumnSnapshot<'a>, target_id: &TaskId) -> Result<(usize, &'a Task)> {
    column
        .index_of(target_id)
        .and_then(|index| column.get(index).map(|task| (index, task)))
        .ok_or_else(|| OrderingError::target_not_found(target_id.as_str()))
}

fn neighbour<'a>(column: &ColumnSnapshot<'a>, index: usize) -> Result<&'a Task> {
    column.get(index).ok_or_else(|| {
        OrderingError::invalid_argument(format!(
            "column '{}' has no task at index {index}",
            column.column_id()
        ))
    })
}

/// Position for a task created at the end of `column_id`
pub fn new_task_position(tasks: &[Task], column_id: &ColumnId, config: &OrderingConfig) -> f64 {
    match ColumnSnapshot::read(tasks, column_id).last() {
        Some(last) => last.position + config.gap,
        None => config.gap,
    }
}
