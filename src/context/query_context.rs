//! Per-query execution context

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::component::JoinComponent;
use crate::observability::{Event, Logger};
use crate::results::{ExternalResultStore, NumericAttributes, SharedResults};

/// State carried through one query execution.
///
/// Upstream components publish their external results here before scoring
/// starts; value sources read them when they are bound. Dropped with the
/// query, releasing every store it holds.
pub struct QueryContext {
    /// Query ID for log correlation
    pub query_id: Uuid,

    started_at: DateTime<Utc>,

    results: HashMap<String, SharedResults>,
}

impl QueryContext {
    /// Create an empty context for a new query
    pub fn new() -> Self {
        Self {
            query_id: Uuid::new_v4(),
            started_at: Utc::now(),
            results: HashMap::new(),
        }
    }

    /// Returns when the query started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Publish a filled store under `tag` and return the shared handle.
    ///
    /// The store can no longer be modified once published.
    pub fn publish<R>(&mut self, tag: impl Into<String>, store: ExternalResultStore<R>) -> SharedResults
    where
        R: NumericAttributes + Send + Sync + fmt::Debug + 'static,
    {
        let shared: SharedResults = Arc::new(store);
        self.publish_shared(tag, Arc::clone(&shared));
        shared
    }

    /// Publish an already shared store under `tag`
    pub fn publish_shared(&mut self, tag: impl Into<String>, results: SharedResults) {
        let tag = tag.into();
        let query_id = self.query_id.to_string();
        let store_id = results.id().to_string();
        let size = results.len().to_string();
        Logger::event(
            Event::ResultsPublished,
            &[
                ("query_id", query_id.as_str()),
                ("results", size.as_str()),
                ("store_id", store_id.as_str()),
                ("tag", tag.as_str()),
            ],
        );
        self.results.insert(tag, results);
    }

    /// Results published under `tag`
    pub fn results(&self, tag: &str) -> Option<SharedResults> {
        self.results.get(tag).cloned()
    }

    /// Results published by `component`
    pub fn results_for(&self, component: &JoinComponent) -> Option<SharedResults> {
        self.results(component.results_tag())
    }

    /// Returns true if anything was published under `tag`
    pub fn has_results(&self, tag: &str) -> bool {
        self.results.contains_key(tag)
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&String> = self.results.keys().collect();
        tags.sort();
        f.debug_struct("QueryContext")
            .field("query_id", &self.query_id)
            .field("started_at", &self.started_at)
            .field("tags", &tags)
            .finish()
    }
}
