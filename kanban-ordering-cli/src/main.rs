//! kanban-order - compute task positions for kanban board snapshots.
//!
//! Commands:
//! - `kanban-order place`: Drop a task first, last, before or after another task
//! - `kanban-order new-position`: Position for a task created at the end of a column
//! - `kanban-order rebalance`: Uniformly renumber a column
//! - `kanban-order health`: Report the smallest gap in a column
//!
//! Environment variables:
//! - KANBAN_ORDERING_GAP: Spacing between rebalanced tasks
//! - KANBAN_ORDERING_REBALANCE_THRESHOLD: Gap that forces a rebalance
//! - KANBAN_ORDERING_MIN_GAP: Precision floor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - 2: Invalid command line

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kanban_order_cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("kanban_ordering=debug,kanban_order_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let exit_code = match kanban_order_cli::run(cli, &mut stdout.lock()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
