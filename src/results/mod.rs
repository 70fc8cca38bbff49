//! External result store for xjoin
//!
//! Holds the results of an external process, keyed by join value, for
//! the lifetime of one query execution.
//!
//! # Invariants
//!
//! - A store is filled before it is published and never changes after
//! - Store equality is identity: two stores with identical content are
//!   still different stores
//! - Result shapes stay opaque; numbers are pulled out through
//!   [`NumericAttributes`]

mod attributes;
mod store;

pub use attributes::{AttributeLookup, NumericAttributes};
pub use store::{AccessorCheck, ExternalResultStore, ResultSet, SharedResults, StoreId};
