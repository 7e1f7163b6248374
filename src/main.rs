//! odata-catalog CLI entry point
//!
//! Installs logging, then delegates everything to the CLI module. Errors are
//! printed to stderr and the process exits non-zero.

use odata_catalog::{cli, observability};

fn main() {
    observability::init_tracing();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
