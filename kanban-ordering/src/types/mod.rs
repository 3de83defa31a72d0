//! Core types for the ordering engine

mod ids;
mod position;
mod task;

// Re-export all types
pub use ids::{ColumnId, TaskId};
pub use position::{DropPosition, PositionResult, PositionUpdate, RebalanceResult};
pub use task::{Priority, Task};
