//! Column rebalancing
//!
//! Renumbers every task of a column to `(index + 1) * gap` in display order.
//! The whole column is rewritten rather than a local neighbourhood, which
//! costs one larger write batch and leaves every gap at full size.

use crate::snapshot::column_order;
use crate::types::{ColumnId, Task};
use tracing::debug;

/// Return a copy of `tasks` with `column_id` uniformly renumbered.
///
/// Tasks in other columns are returned unchanged and the snapshot order is
/// preserved. Rebalancing an already rebalanced column is a no-op.
pub fn rebalance_column(tasks: &[Task], column_id: &ColumnId, gap: f64) -> Vec<Task> {
    let order = column_order(tasks, column_id, None);
    let mut updated = tasks.to_vec();
    renumber(&mut updated, &order, gap);
    updated
}

/// Assign `(rank + 1) * gap` following `order`
pub(crate) fn renumber(tasks: &mut [Task], order: &[usize], gap: f64) {
    for (rank, &index) in order.iter().enumerate() {
        tasks[index].position = (rank + 1) as f64 * gap;
    }
    debug!(count = order.len(), gap, "renumbered column");
}
