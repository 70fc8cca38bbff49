//! CLI for xjoin
//!
//! - eval: evaluate an xjoin function for JSON documents against a JSON
//!   map of external results

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, EvalArgs, LogLevel};
pub use commands::{eval, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_documents, read_results, write_error, write_rows};
