//! Gap analysis between neighbouring positions
//!
//! Bisecting the same pair of neighbours over and over halves their gap each
//! time. Doubles run out of precision long before the gap reaches zero, so a
//! gap is treated as exhausted once splitting it would leave either side at
//! or below the rebalance threshold, and the column is renumbered instead.

use crate::snapshot::ColumnSnapshot;
use crate::types::{ColumnId, Task};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Decision for inserting between two neighbours
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapVerdict {
    /// The midpoint leaves a usable gap on both sides
    Safe { midpoint: f64 },
    /// The gap is too small to split; the column must be rebalanced
    Exhausted { gap: f64 },
}

impl GapVerdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe { .. })
    }
}

/// Analyze the gap between `lower` and `upper` (`lower <= upper`).
///
/// Safe only if both halves around the midpoint stay above `threshold`.
pub fn midpoint(lower: f64, upper: f64, threshold: f64) -> GapVerdict {
    let gap = upper - lower;
    let midpoint = lower + gap / 2.0;

    if gap <= threshold || midpoint - lower <= threshold || upper - midpoint <= threshold {
        debug!(lower, upper, gap, threshold, "gap exhausted");
        GapVerdict::Exhausted { gap }
    } else {
        GapVerdict::Safe { midpoint }
    }
}

/// Gap statistics for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHealth {
    pub column_id: ColumnId,
    pub task_count: usize,
    /// Smallest gap between neighbours, including the gap between zero and
    /// the first task. `None` for an empty column.
    pub min_gap: Option<f64>,
    pub needs_rebalancing: bool,
}

/// Inspect a column and report whether its gaps are still healthy.
///
/// The leading gap counts too: repeated drops at the top halve the first
/// position towards zero just like bisection does between two neighbours.
pub fn column_health(tasks: &[Task], column_id: &ColumnId, threshold: f64) -> ColumnHealth {
    let snapshot = ColumnSnapshot::read(tasks, column_id);
    let positions = snapshot.positions();

    let leading = positions.first().map(|first| first.abs());
    let min_gap = positions
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .chain(leading)
        .min_by(|a, b| a.total_cmp(b));

    let needs_rebalancing = min_gap.is_some_and(|gap| gap <= threshold);

    ColumnHealth {
        column_id: column_id.clone(),
        task_count: positions.len(),
        min_gap,
        needs_rebalancing,
    }
}
