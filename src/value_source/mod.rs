//! xjoin value source
//!
//! A numeric function over documents whose values come from an external
//! process, joined on a document field.
//!
//! # Evaluation (per document)
//!
//! 1. Read the document's join field; none means `exists == false`
//! 2. Decode it to the join key
//! 3. Look the key up in the published external results
//! 4. No result: the configured default value
//! 5. Result: the configured attribute, which must be numeric
//!
//! # Invariants
//!
//! - Documents without a join value never reach the results
//! - Missing results are not errors; unreadable attributes always are
//! - Sources compare equal exactly when they read the same store

mod args;
mod config;
mod errors;
mod parser;
mod source;
mod values;

pub use args::FunctionArgs;
pub use config::{ParserConfig, INIT_ATTRIBUTE, INIT_COMPONENT, INIT_DEFAULT_VALUE};
pub use errors::{ErrorScope, JoinError, JoinResult};
pub use parser::JoinValueSourceParser;
pub use source::{CacheKey, JoinValueSource};
pub use values::JoinValues;
