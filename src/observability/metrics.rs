//! Evaluation counters
//!
//! Counters only, monotonic, relaxed atomics. Each value source owns its
//! own [`JoinMetrics`]; concurrent queries never share counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for one value source
#[derive(Debug, Default)]
pub struct JoinMetrics {
    /// Documents whose value was requested
    documents_evaluated: AtomicU64,
    /// Documents without a join value
    join_values_absent: AtomicU64,
    /// Join keys that resolved to a result
    results_hit: AtomicU64,
    /// Join keys without a result, answered with the default
    defaults_applied: AtomicU64,
    /// Results the attribute could not be read from
    attribute_failures: AtomicU64,
}

impl JoinMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_evaluated(&self) {
        self.documents_evaluated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_absent(&self) {
        self.join_values_absent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_hit(&self) {
        self.results_hit.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_default(&self) {
        self.defaults_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.attribute_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            documents_evaluated: self.documents_evaluated.load(Ordering::Relaxed),
            join_values_absent: self.join_values_absent.load(Ordering::Relaxed),
            results_hit: self.results_hit.load(Ordering::Relaxed),
            defaults_applied: self.defaults_applied.load(Ordering::Relaxed),
            attribute_failures: self.attribute_failures.load(Ordering::Relaxed),
        }
    }

    /// Counters as a JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time copy of [`JoinMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub documents_evaluated: u64,
    pub join_values_absent: u64,
    pub results_hit: u64,
    pub defaults_applied: u64,
    pub attribute_failures: u64,
}
