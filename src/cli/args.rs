//! CLI argument definitions using clap
//!
//! Commands:
//! - odata-catalog serve --config <path> [--port <n>]
//! - odata-catalog query --config <path> [--filter ..] [--select ..] [--top ..] [--skip ..]
//! - odata-catalog query --config <path> --id <key>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default config location; a missing file means built-in defaults
pub const DEFAULT_CONFIG_PATH: &str = "./odata-catalog.json";

/// OData v4 product catalog service
#[derive(Parser, Debug)]
#[command(name = "odata-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Port to listen on (overrides PORT and the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single query against the catalog and print the JSON response
    Query {
        /// Path to configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// `$filter` expression, e.g. "Price gt 100"
        #[arg(long)]
        filter: Option<String>,

        /// `$select` field list, e.g. "Name,Price"
        #[arg(long)]
        select: Option<String>,

        /// `$top` value
        #[arg(long, allow_hyphen_values = true)]
        top: Option<String>,

        /// `$skip` value
        #[arg(long, allow_hyphen_values = true)]
        skip: Option<String>,

        /// Look up a single entity by key instead
        #[arg(long, conflicts_with_all = ["filter", "select", "top", "skip"])]
        id: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
