//! Command implementations.
//!
//! Every command reads a snapshot, asks the engine for a derived result and
//! prints it. Output goes to the supplied writer so tests can capture it.

use std::io::Write;

use comfy_table::Table;
use kanban_ordering::{ColumnId, OrderingEngine, PlacementRequest, TaskId};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat, SnapshotArgs};
use crate::error::CliError;
use crate::input::read_snapshot;
use crate::table;

/// Result of `new-position`
#[derive(Debug, Serialize)]
struct NewPosition {
    column_id: ColumnId,
    position: f64,
}

/// Run the parsed command line, printing results to `out`
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let engine = OrderingEngine::load(cli.config.as_deref())?;
    debug!(config = ?engine.config(), "engine ready");
    let format = cli.format;

    match cli.command {
        Commands::Place {
            snapshot,
            task_id,
            column,
            drop,
            target,
            write_set,
        } => {
            let request = PlacementRequest {
                task_id: TaskId::from(task_id),
                target_column_id: ColumnId::from(column),
                drop_position: drop,
                target_task_id: target.map(TaskId::from),
            };
            run_place(&engine, &snapshot, &request, write_set, format, out)
        }
        Commands::NewPosition { snapshot, column } => {
            run_new_position(&engine, &snapshot, ColumnId::from(column), format, out)
        }
        Commands::Rebalance {
            snapshot,
            column,
            write_set,
        } => run_rebalance(
            &engine,
            &snapshot,
            &ColumnId::from(column),
            write_set,
            format,
            out,
        ),
        Commands::Health { snapshot, column } => {
            run_health(&engine, &snapshot, &ColumnId::from(column), format, out)
        }
    }
}

fn run_place(
    engine: &OrderingEngine,
    snapshot: &SnapshotArgs,
    request: &PlacementRequest,
    write_set: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tasks = read_snapshot(&snapshot.tasks)?;
    let result = engine.calculate_position(&tasks, request)?;

    if write_set {
        let updates = result.write_set(&tasks);
        emit(&updates, format, || table::updates_table(&updates), out)
    } else {
        emit(
            &result,
            format,
            || table::tasks_table(&result.updated_tasks),
            out,
        )
    }
}

fn run_new_position(
    engine: &OrderingEngine,
    snapshot: &SnapshotArgs,
    column_id: ColumnId,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tasks = read_snapshot(&snapshot.tasks)?;
    let position = engine.new_task_position(&tasks, &column_id);
    let result = NewPosition {
        column_id,
        position,
    };

    emit(
        &result,
        format,
        || {
            let mut table = table::new_table();
            table.set_header(vec!["Column", "Position"]);
            table.add_row(vec![result.column_id.to_string(), result.position.to_string()]);
            table
        },
        out,
    )
}

fn run_rebalance(
    engine: &OrderingEngine,
    snapshot: &SnapshotArgs,
    column_id: &ColumnId,
    write_set: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tasks = read_snapshot(&snapshot.tasks)?;
    let result = engine.rebalance(&tasks, column_id);

    if write_set {
        let updates = result.write_set(&tasks);
        emit(&updates, format, || table::updates_table(&updates), out)
    } else {
        emit(
            &result,
            format,
            || table::tasks_table(&result.updated_tasks),
            out,
        )
    }
}

fn run_health(
    engine: &OrderingEngine,
    snapshot: &SnapshotArgs,
    column_id: &ColumnId,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tasks = read_snapshot(&snapshot.tasks)?;
    let health = engine.column_health(&tasks, column_id);
    emit(&health, format, || table::health_table(&health), out)
}

fn emit<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce() -> Table,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
        OutputFormat::Yaml => write!(out, "{}", serde_yaml_ng::to_string(value)?)?,
        OutputFormat::Table => writeln!(out, "{}", table())?,
    }
    Ok(())
}
