//! xjoin CLI entry point
//!
//! All logic lives in the CLI module; failures are already reported
//! on stdout as a JSON error object, this only sets the exit code.

use xjoin::cli;

fn main() {
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
