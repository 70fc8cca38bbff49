//! Identity-keyed store of external results

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::attributes::{AttributeLookup, NumericAttributes};
use crate::attribute::AccessorName;

/// Identity of one store instance.
///
/// Assigned at construction and never derived from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(Uuid);

impl StoreId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a result type declares an accessor ahead of time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorCheck {
    /// The type declares this accessor
    Declared,
    /// The type declares its accessors and this one is not among them
    Undeclared,
    /// The type does not declare accessors; only a lookup can tell
    Unverifiable,
}

/// External results produced for one query execution.
///
/// Filled by the component that ran the external process, then published
/// into the query context where it is only read. Not `Clone`: sharing
/// goes through [`SharedResults`] so identity is preserved.
#[derive(Debug)]
pub struct ExternalResultStore<R> {
    id: StoreId,
    created_at: DateTime<Utc>,
    results: HashMap<String, R>,
}

impl<R> ExternalResultStore<R> {
    /// Creates an empty store with a fresh identity
    pub fn new() -> Self {
        Self {
            id: StoreId::fresh(),
            created_at: Utc::now(),
            results: HashMap::new(),
        }
    }

    /// Add a result under its join key, replacing any earlier one
    pub fn insert(&mut self, key: impl Into<String>, result: R) -> Option<R> {
        self.results.insert(key.into(), result)
    }

    /// Look up the result for a join key
    pub fn get(&self, key: &str) -> Option<&R> {
        self.results.get(key)
    }

    /// Returns the store identity
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Returns when the store was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the number of results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if there are no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over join keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }
}

impl<R> Default for ExternalResultStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, K: Into<String>> FromIterator<(K, R)> for ExternalResultStore<R> {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, result) in iter {
            store.insert(key, result);
        }
        store
    }
}

impl<R> PartialEq for ExternalResultStore<R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<R> Eq for ExternalResultStore<R> {}

/// Type-erased, read-only view of a store.
///
/// This is what the query context holds and what value sources bind to,
/// so neither needs to know the concrete result type.
pub trait ResultSet: Send + Sync + fmt::Debug {
    /// Identity of the underlying store
    fn id(&self) -> StoreId;

    /// Number of results
    fn len(&self) -> usize;

    /// Returns true if the store holds no results
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a result exists for the key
    fn contains(&self, key: &str) -> bool;

    /// Read a numeric attribute from the result for `key`.
    ///
    /// Returns `None` when the key has no result.
    fn lookup(&self, key: &str, accessor: &AccessorName) -> Option<AttributeLookup>;

    /// Check an accessor against the result type's declared accessors
    fn check_accessor(&self, accessor: &AccessorName) -> AccessorCheck;
}

/// Shared handle to a published store
pub type SharedResults = Arc<dyn ResultSet>;

impl<R> ResultSet for ExternalResultStore<R>
where
    R: NumericAttributes + Send + Sync + fmt::Debug,
{
    fn id(&self) -> StoreId {
        self.id
    }

    fn len(&self) -> usize {
        self.results.len()
    }

    fn contains(&self, key: &str) -> bool {
        self.results.contains_key(key)
    }

    fn lookup(&self, key: &str, accessor: &AccessorName) -> Option<AttributeLookup> {
        self.results
            .get(key)
            .map(|result| result.numeric_attribute(accessor))
    }

    fn check_accessor(&self, accessor: &AccessorName) -> AccessorCheck {
        match R::known_accessors() {
            Some(known) if known.contains(&accessor.as_str()) => AccessorCheck::Declared,
            Some(_) => AccessorCheck::Undeclared,
            None => AccessorCheck::Unverifiable,
        }
    }
}
