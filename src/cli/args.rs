//! CLI argument definitions using clap
//!
//! Commands:
//! - xjoin eval --results <path> --docs <path> --field <name> [options]

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::executor::SortDirection;
use crate::observability::Severity;

/// xjoin - join external process results into scoring and sorting
#[derive(Parser, Debug)]
#[command(name = "xjoin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Minimum log severity
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate an xjoin function for a set of documents
    Eval(EvalArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    /// JSON object mapping join keys to external results
    #[arg(long)]
    pub results: PathBuf,

    /// JSON array of documents
    #[arg(long)]
    pub docs: PathBuf,

    /// Document field holding the join value
    #[arg(long)]
    pub field: String,

    /// Upstream join component name
    #[arg(long, default_value = "xjoin")]
    pub component: String,

    /// Attribute to read; taken from --call when omitted
    #[arg(long)]
    pub attribute: Option<String>,

    /// Function call supplying arguments not configured, e.g. "xjoin(score)"
    #[arg(long)]
    pub call: Option<String>,

    /// Value for join keys without a result
    #[arg(long = "default", default_value_t = 0.0)]
    pub default_value: f64,

    /// Sort output by value
    #[arg(long, value_enum)]
    pub sort: Option<SortDirection>,
}

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn severity(&self) -> Severity {
        match self {
            LogLevel::Trace => Severity::Trace,
            LogLevel::Info => Severity::Info,
            LogLevel::Warn => Severity::Warn,
            LogLevel::Error => Severity::Error,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
