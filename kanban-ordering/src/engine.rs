//! The ordering engine: a configured entry point over the placement,
//! gap-analysis and rebalancing modules.

use crate::config::OrderingConfig;
use crate::error::Result;
use crate::gap::{self, ColumnHealth};
use crate::placement::{self, PlacementRequest};
use crate::rebalance::rebalance_column;
use crate::types::{ColumnId, PositionResult, RebalanceResult, Task};
use std::path::Path;
use tracing::debug;

/// Computes task positions for one board snapshot at a time.
///
/// The engine holds nothing but its configuration. Every call takes the full
/// snapshot by reference and returns a new derived snapshot, so a single
/// engine can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct OrderingEngine {
    config: OrderingConfig,
}

impl OrderingEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: OrderingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an engine from defaults, an optional config file and the
    /// `KANBAN_ORDERING_*` environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            config: OrderingConfig::load(path)?,
        })
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Place a task and return the updated snapshot
    pub fn calculate_position(
        &self,
        tasks: &[Task],
        request: &PlacementRequest,
    ) -> Result<PositionResult> {
        placement::place(tasks, request, &self.config)
    }

    /// Position for a task created at the end of `column_id`
    pub fn new_task_position(&self, tasks: &[Task], column_id: &ColumnId) -> f64 {
        placement::new_task_position(tasks, column_id, &self.config)
    }

    /// Create a task appended to the end of `column_id`
    pub fn create_task(
        &self,
        tasks: &[Task],
        title: impl Into<String>,
        column_id: impl Into<ColumnId>,
    ) -> Task {
        let column_id = column_id.into();
        let position = self.new_task_position(tasks, &column_id);
        Task::new(title, column_id, position)
    }

    /// Uniformly renumber one column
    pub fn rebalance(&self, tasks: &[Task], column_id: &ColumnId) -> RebalanceResult {
        let updated_tasks = rebalance_column(tasks, column_id, self.config.gap);
        let changed = tasks
            .iter()
            .zip(&updated_tasks)
            .filter(|(before, after)| before.position != after.position)
            .count();
        debug!(column_id = %column_id, changed, "rebalance pass");

        RebalanceResult {
            column_id: column_id.clone(),
            changed,
            updated_tasks,
        }
    }

    /// Report gap statistics for one column
    pub fn column_health(&self, tasks: &[Task], column_id: &ColumnId) -> ColumnHealth {
        gap::column_health(tasks, column_id, self.config.rebalance_threshold)
    }
}

/// Place a task using the default configuration
pub fn calculate_position(tasks: &[Task], request: &PlacementRequest) -> Result<PositionResult> {
    placement::place(tasks, request, &OrderingConfig::default())
}

/// Position for a new task at the end of `column_id`, using the default gap
pub fn get_new_task_position(tasks: &[Task], column_id: &ColumnId) -> f64 {
    placement::new_task_position(tasks, column_id, &OrderingConfig::default())
}
