//! JSON output for CLI commands
//!
//! Responses go to stdout as a single pretty-printed JSON document. Logs go
//! to stderr, so stdout stays machine-readable.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a response to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    write_json_to(value, &mut stdout)
}

/// Write a response to any writer
pub fn write_json_to<T: Serialize, W: Write>(value: &T, writer: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
