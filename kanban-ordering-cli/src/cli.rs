//! CLI definition for the kanban-order command-line interface.
//!
//! This module only depends on `clap`, `std` and the engine's public types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kanban_ordering::DropPosition;

/// kanban-order - compute task positions for kanban board snapshots.
///
/// Every command reads a JSON snapshot of tasks (an array of task objects,
/// or an object with a `tasks` array) from a file or from stdin (`-`), and
/// prints the derived result. Nothing is written back; the output tells the
/// caller what to persist.
#[derive(Parser, Debug)]
#[command(name = "kanban-order")]
#[command(version)]
#[command(about = "Compute fractional task positions for kanban board snapshots")]
#[command(
    long_about = "kanban-order computes where a dragged task lands in a kanban column and \
    when a column has to be renumbered.\n\n\
    Environment variables:\n  \
    KANBAN_ORDERING_GAP                  Spacing between rebalanced tasks (default 1000)\n  \
    KANBAN_ORDERING_REBALANCE_THRESHOLD  Gap that forces a rebalance (default 0.001)\n  \
    KANBAN_ORDERING_MIN_GAP              Precision floor (default 0.000001)\n  \
    RUST_LOG                             Log filter when --debug is not set"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file (.toml, .yaml, .yml or .json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Where to read the task snapshot from
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Task snapshot as JSON; `-` reads stdin
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub tasks: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place a task and print the updated snapshot
    Place {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Id of the task being moved
        #[arg(long = "task", value_name = "ID")]
        task_id: String,
        /// Destination column
        #[arg(long, value_name = "ID")]
        column: String,
        /// Drop position
        #[arg(long, value_name = "POSITION", value_parser = parse_drop_position)]
        drop: DropPosition,
        /// Reference task for `before` and `after`
        #[arg(long, value_name = "ID")]
        target: Option<String>,
        /// Print only the rows that have to be persisted
        #[arg(long)]
        write_set: bool,
    },

    /// Print the position for a new task at the end of a column
    NewPosition {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Column the task is created in
        #[arg(long, value_name = "ID")]
        column: String,
    },

    /// Uniformly renumber a column
    Rebalance {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Column to renumber
        #[arg(long, value_name = "ID")]
        column: String,
        /// Print only the rows that have to be persisted
        #[arg(long)]
        write_set: bool,
    },

    /// Report gap statistics for a column
    Health {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Column to inspect
        #[arg(long, value_name = "ID")]
        column: String,
    },
}

fn parse_drop_position(value: &str) -> Result<DropPosition, String> {
    value.parse().map_err(|e: kanban_ordering::OrderingError| e.to_string())
}
