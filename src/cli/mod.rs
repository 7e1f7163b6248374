//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load config and catalog, then run the HTTP service
//! - query: One-shot collection query or key lookup, printed as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, DEFAULT_CONFIG_PATH};
pub use commands::{query, run, run_command, run_query, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
