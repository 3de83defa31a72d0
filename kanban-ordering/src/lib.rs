//! Fractional task ordering for kanban boards
//!
//! This crate computes the `position` a task should get when it is dropped
//! into a kanban column, and renumbers a column when repeated insertions
//! have worn the gaps between neighbours too thin.
//!
//! ## Overview
//!
//! - **Fractional positions** - Each task carries an `f64` sort key; inserting
//!   between two tasks takes the midpoint instead of shifting every follower
//! - **Snapshot in, snapshot out** - Every call borrows the full task list and
//!   returns a new one; nothing is cached between calls and no I/O happens
//! - **Rebalancing** - When a neighbour gap drops to the rebalance threshold
//!   the whole destination column is renumbered to multiples of the gap
//! - **Write sets** - Results report exactly which rows the persistence layer
//!   has to update
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_ordering::{calculate_position, get_new_task_position, ColumnId, PlacementRequest, Task};
//!
//! # fn example() -> kanban_ordering::Result<()> {
//! let tasks = vec![
//!     Task::new("Write docs", "todo", 1000.0).with_id("1"),
//!     Task::new("Review", "todo", 2000.0).with_id("2"),
//! ];
//!
//! // Drag task 2 to the top of the column
//! let result = calculate_position(&tasks, &PlacementRequest::first("2", "todo"))?;
//! assert_eq!(result.new_position, 500.0);
//! assert!(!result.needs_rebalancing);
//!
//! // Only the moved task has to be written back
//! assert_eq!(result.write_set(&tasks).len(), 1);
//!
//! // New tasks go to the end of their column
//! assert_eq!(get_new_task_position(&tasks, &ColumnId::from("todo")), 3000.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Configuration
//!
//! [`OrderingEngine`] carries an [`OrderingConfig`] (gap, rebalance threshold,
//! precision floor). The free functions use the defaults; `OrderingEngine::load`
//! merges a config file and `KANBAN_ORDERING_*` environment variables.
//!
//! ## Concurrency
//!
//! The engine has no shared state. Two callers computing moves against the
//! same stale snapshot can produce overlapping positions until the next read;
//! serializing writes per column is the persistence layer's job.

pub mod config;
mod engine;
mod error;
pub mod gap;
pub mod placement;
pub mod rebalance;
pub mod snapshot;
pub mod types;

pub use config::{ConfigError, OrderingConfig, DEFAULT_GAP, MIN_GAP, REBALANCE_THRESHOLD};
pub use engine::{calculate_position, get_new_task_position, OrderingEngine};
pub use error::{OrderingError, Result};
pub use gap::ColumnHealth;
pub use placement::PlacementRequest;

// Re-export commonly used types
pub use types::{
    ColumnId, DropPosition, PositionResult, PositionUpdate, Priority, RebalanceResult, Task,
    TaskId,
};
