//! xjoin value source errors
//!
//! Error codes:
//! - XJOIN_CONFIGURATION (setup)
//! - XJOIN_DUPLICATE_COMPONENT (setup)
//! - XJOIN_UNKNOWN_COMPONENT (query)
//! - XJOIN_SYNTAX (query)
//! - XJOIN_MISSING_CONTEXT (query)
//! - XJOIN_FIELD_MISMATCH (query)
//! - XJOIN_ATTRIBUTE_RESOLUTION (document)
//! - XJOIN_NO_JOIN_VALUE (document)
//!
//! Documents without a join value and join keys without a result are not
//! errors. They surface as `exists == false` and the default value.

use std::fmt;

use thiserror::Error;

use crate::docvalues::DocId;

/// How far an error reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// Rejects configuration before any query runs
    Setup,
    /// Aborts the current query before scoring
    Query,
    /// Raised while scoring one document; aborts the current query
    Document,
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorScope::Setup => write!(f, "SETUP"),
            ErrorScope::Query => write!(f, "QUERY"),
            ErrorScope::Document => write!(f, "DOCUMENT"),
        }
    }
}

/// xjoin errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JoinError {
    #[error("Invalid xjoin configuration: {0}")]
    Configuration(String),

    #[error("xjoin component already registered: {0}")]
    DuplicateComponent(String),

    #[error("Unknown xjoin component: {0}")]
    UnknownComponent(String),

    #[error("Syntax error in xjoin arguments: {0}")]
    Syntax(String),

    #[error("No xjoin results in query context for component '{component}' (tag '{tag}')")]
    MissingContext { component: String, tag: String },

    #[error("Doc values are for field '{found}', xjoin joins on '{expected}'")]
    FieldMismatch { expected: String, found: String },

    #[error("Cannot read attribute '{attribute}' via {accessor}{}: {reason}", key_suffix(.key))]
    AttributeResolution {
        attribute: String,
        accessor: String,
        key: Option<String>,
        reason: String,
    },

    #[error("No join value for doc {0}")]
    NoJoinValue(DocId),
}

fn key_suffix(key: &Option<String>) -> String {
    match key {
        Some(k) => format!(" for join key '{}'", k),
        None => String::new(),
    }
}

impl JoinError {
    /// Returns the machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            JoinError::Configuration(_) => "XJOIN_CONFIGURATION",
            JoinError::DuplicateComponent(_) => "XJOIN_DUPLICATE_COMPONENT",
            JoinError::UnknownComponent(_) => "XJOIN_UNKNOWN_COMPONENT",
            JoinError::Syntax(_) => "XJOIN_SYNTAX",
            JoinError::MissingContext { .. } => "XJOIN_MISSING_CONTEXT",
            JoinError::FieldMismatch { .. } => "XJOIN_FIELD_MISMATCH",
            JoinError::AttributeResolution { .. } => "XJOIN_ATTRIBUTE_RESOLUTION",
            JoinError::NoJoinValue(_) => "XJOIN_NO_JOIN_VALUE",
        }
    }

    /// Returns how far the error reaches
    pub fn scope(&self) -> ErrorScope {
        match self {
            JoinError::Configuration(_) | JoinError::DuplicateComponent(_) => ErrorScope::Setup,
            JoinError::UnknownComponent(_)
            | JoinError::Syntax(_)
            | JoinError::MissingContext { .. }
            | JoinError::FieldMismatch { .. } => ErrorScope::Query,
            JoinError::AttributeResolution { key, .. } => {
                if key.is_some() {
                    ErrorScope::Document
                } else {
                    ErrorScope::Query
                }
            }
            JoinError::NoJoinValue(_) => ErrorScope::Document,
        }
    }

    /// Returns true if the error was raised for a single document
    pub fn is_per_document(&self) -> bool {
        self.scope() == ErrorScope::Document
    }
}

/// Result type for xjoin operations
pub type JoinResult<T> = Result<T, JoinError>;
