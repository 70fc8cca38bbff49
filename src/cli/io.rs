//! JSON file input and line output for the CLI
//!
//! - Results: one JSON object, join key -> result object
//! - Documents: one JSON array of objects
//! - Output: one JSON object per line on stdout

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};
use crate::results::ExternalResultStore;

fn read_json(path: &Path) -> CliResult<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&content)?)
}

/// Read external results from a JSON object file
pub fn read_results(path: &Path) -> CliResult<ExternalResultStore<Value>> {
    match read_json(path)? {
        Value::Object(entries) => Ok(entries.into_iter().collect()),
        _ => Err(CliError::input_error(format!(
            "{}: results must be a JSON object keyed by join value",
            path.display()
        ))),
    }
}

/// Read documents from a JSON array file
pub fn read_documents(path: &Path) -> CliResult<Vec<Value>> {
    match read_json(path)? {
        Value::Array(docs) => Ok(docs),
        _ => Err(CliError::input_error(format!(
            "{}: documents must be a JSON array",
            path.display()
        ))),
    }
}

/// Write rows to stdout, one JSON object per line
pub fn write_rows(rows: &[Value]) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for row in rows {
        serde_json::to_writer(&mut out, row)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Write an error object as one JSON line
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
