//! Table rendering for `--format table`.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use kanban_ordering::{ColumnHealth, PositionUpdate, Task};

/// Create a table with the shared preset
pub fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Truncate a string to `max` characters, appending "..." if truncated.
///
/// Safe for multi-byte (UTF-8) strings.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// One row per task, in the order given
pub fn tasks_table(tasks: &[Task]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Id", "Column", "Position", "Title"]);
    for task in tasks {
        table.add_row(vec![
            task.id.to_string(),
            task.column_id.to_string(),
            task.position.to_string(),
            truncate_str(&task.title, 40),
        ]);
    }
    table
}

/// One row per persisted change
pub fn updates_table(updates: &[PositionUpdate]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Id", "Column", "Position"]);
    for update in updates {
        table.add_row(vec![
            update.id.to_string(),
            update.column_id.to_string(),
            update.position.to_string(),
        ]);
    }
    table
}

/// Key/value rows describing a column
pub fn health_table(health: &ColumnHealth) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Column", "Tasks", "Min gap", "Needs rebalancing"]);
    table.add_row(vec![
        health.column_id.to_string(),
        health.task_count.to_string(),
        health
            .min_gap
            .map(|gap| gap.to_string())
            .unwrap_or_else(|| "-".to_string()),
        health.needs_rebalancing.to_string(),
    ]);
    table
}
