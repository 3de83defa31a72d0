//! kanban-order - command-line front end for the `kanban-ordering` engine.
//!
//! This library crate exposes the CLI definition and command runners so
//! they can be tested without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod table;

pub use cli::{Cli, Commands, OutputFormat, SnapshotArgs};
pub use commands::run;
pub use error::CliError;
