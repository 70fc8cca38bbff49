//! Attribute resolution for external results
//!
//! Converts the attribute names used in configuration and function
//! arguments (`score`, `matchCount`) into the accessor names result
//! types answer to (`getScore`, `getMatchCount`).
//!
//! The conversion is pure and total. Whether a concrete result actually
//! exposes the accessor is decided later, against the result itself.

mod naming;
mod resolver;

pub use naming::{AccessorName, ACCESSOR_PREFIX};
pub use resolver::{AttributeResolver, DEFAULT_CACHE_LIMIT};
