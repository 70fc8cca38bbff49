//! CLI-specific error types

use std::fmt;
use std::io;

use crate::value_source::JoinError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Input file missing or unreadable
    IoError,
    /// Input file is not the expected JSON shape
    InputError,
    /// Binding or evaluating the xjoin function failed
    EvalFailed(&'static str),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "XJOIN_CLI_IO_ERROR",
            Self::InputError => "XJOIN_CLI_INPUT_ERROR",
            Self::EvalFailed(code) => *code,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Input shape error
    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InputError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::input_error(format!("JSON error: {}", e))
    }
}

impl From<JoinError> for CliError {
    fn from(e: JoinError) -> Self {
        Self::new(CliErrorCode::EvalFailed(e.code()), e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_error_keeps_code() {
        let err: CliError = JoinError::UnknownComponent("nope".into()).into();
        assert_eq!(err.code_str(), "XJOIN_UNKNOWN_COMPONENT");
        assert!(err.message().contains("nope"));
    }

    #[test]
    fn test_display() {
        let err = CliError::input_error("expected an array");
        assert_eq!(err.to_string(), "XJOIN_CLI_INPUT_ERROR: expected an array");
    }
}
