//! Join value source
//!
//! One source per query execution. It owns its binding (join field,
//! published results, accessor, default) and answers per-document values
//! through [`JoinValues`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::errors::{JoinError, JoinResult};
use super::values::JoinValues;
use crate::attribute::AccessorName;
use crate::docvalues::JoinFieldReader;
use crate::observability::{Event, JoinMetrics, Logger, MetricsSnapshot};
use crate::results::{AttributeLookup, SharedResults, StoreId};

/// Strict identity of a value source: store, join field and accessor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub store: StoreId,
    pub join_field: String,
    pub accessor: AccessorName,
}

/// Numeric function over documents backed by external results.
///
/// Two sources are equal when they read the same published store, whatever
/// their join field or attribute. Use [`JoinValueSource::cache_key`] where
/// sources with different attributes must stay apart.
#[derive(Clone)]
pub struct JoinValueSource {
    join_field: String,
    results: SharedResults,
    attribute: String,
    accessor: AccessorName,
    default_value: f64,
    metrics: Arc<JoinMetrics>,
}

impl JoinValueSource {
    /// Bind a source reading `attribute` from `results`, default 0.0
    pub fn new(join_field: impl Into<String>, results: SharedResults, attribute: &str) -> Self {
        Self::resolved(
            join_field,
            results,
            attribute,
            AccessorName::from_attribute(attribute),
        )
    }

    /// Bind a source with an accessor resolved ahead of time
    pub fn resolved(
        join_field: impl Into<String>,
        results: SharedResults,
        attribute: impl Into<String>,
        accessor: AccessorName,
    ) -> Self {
        Self {
            join_field: join_field.into(),
            results,
            attribute: attribute.into(),
            accessor,
            default_value: 0.0,
            metrics: Arc::new(JoinMetrics::new()),
        }
    }

    /// Set the value for join keys without a result
    pub fn with_default_value(mut self, default_value: f64) -> Self {
        self.default_value = default_value;
        self
    }

    pub fn join_field(&self) -> &str {
        &self.join_field
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn accessor(&self) -> &AccessorName {
        &self.accessor
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    /// Identity of the bound store
    pub fn store_id(&self) -> StoreId {
        self.results.id()
    }

    /// Key that also separates sources by join field and accessor
    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            store: self.results.id(),
            join_field: self.join_field.clone(),
            accessor: self.accessor.clone(),
        }
    }

    /// Human-readable form, as shown in explain output
    pub fn description(&self) -> String {
        format!("xjoin({},{})", self.join_field, self.accessor)
    }

    /// Counters for this source
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Function values over the documents of one reader.
    ///
    /// The reader must carry the join field.
    pub fn values<'a>(&'a self, reader: &'a dyn JoinFieldReader) -> JoinResult<JoinValues<'a>> {
        if reader.field() != self.join_field {
            return Err(JoinError::FieldMismatch {
                expected: self.join_field.clone(),
                found: reader.field().to_string(),
            });
        }
        Ok(JoinValues::new(self, reader))
    }

    /// Value for a decoded join key.
    ///
    /// Keys without a result yield the default value. Results that do not
    /// expose the attribute as a number are an error, never defaulted.
    pub fn value_for_key(&self, key: &str) -> JoinResult<f64> {
        match self.results.lookup(key, &self.accessor) {
            None => {
                self.metrics.record_default();
                Ok(self.default_value)
            }
            Some(AttributeLookup::Value(v)) => {
                self.metrics.record_hit();
                Ok(v)
            }
            Some(AttributeLookup::Missing) => {
                Err(self.attribute_failure(key, "result has no such accessor".to_string()))
            }
            Some(AttributeLookup::NotNumeric(kind)) => {
                Err(self.attribute_failure(key, format!("value is {}, not a number", kind)))
            }
        }
    }

    pub(crate) fn metrics_handle(&self) -> &JoinMetrics {
        &self.metrics
    }

    fn attribute_failure(&self, key: &str, reason: String) -> JoinError {
        self.metrics.record_failure();
        Logger::event(
            Event::AttributeFailed,
            &[
                ("accessor", self.accessor.as_str()),
                ("attribute", self.attribute.as_str()),
                ("field", self.join_field.as_str()),
                ("key", key),
                ("reason", reason.as_str()),
            ],
        );
        JoinError::AttributeResolution {
            attribute: self.attribute.clone(),
            accessor: self.accessor.to_string(),
            key: Some(key.to_string()),
            reason,
        }
    }
}

impl PartialEq for JoinValueSource {
    fn eq(&self, other: &Self) -> bool {
        self.results.id() == other.results.id()
    }
}

impl Eq for JoinValueSource {}

impl Hash for JoinValueSource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.results.id().hash(state);
    }
}

impl fmt::Debug for JoinValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinValueSource")
            .field("join_field", &self.join_field)
            .field("accessor", &self.accessor)
            .field("default_value", &self.default_value)
            .field("store", &self.results.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ExternalResultStore;
    use serde_json::{json, Value};
    use std::collections::HashSet;

    fn shared(entries: &[(&str, Value)]) -> SharedResults {
        let store: ExternalResultStore<Value> = entries.iter().cloned().collect();
        Arc::new(store)
    }

    #[test]
    fn test_value_for_present_key() {
        let source = JoinValueSource::new("id", shared(&[("42", json!({"score": 7.5}))]), "score");
        assert_eq!(source.value_for_key("42").unwrap(), 7.5);
    }

    #[test]
    fn test_default_for_absent_key() {
        let source = JoinValueSource::new("id", shared(&[]), "score").with_default_value(-2.0);
        assert_eq!(source.value_for_key("99").unwrap(), -2.0);
        assert_eq!(source.metrics().defaults_applied, 1);
    }

    #[test]
    fn test_missing_accessor_is_error() {
        let source =
            JoinValueSource::new("id", shared(&[("42", json!({"score": 7.5}))]), "unknownAttr");
        let err = source.value_for_key("42").unwrap_err();

        assert_eq!(err.code(), "XJOIN_ATTRIBUTE_RESOLUTION");
        assert!(err.to_string().contains("unknownAttr"));
        assert_eq!(source.metrics().attribute_failures, 1);
    }

    #[test]
    fn test_non_numeric_is_error() {
        let source = JoinValueSource::new("id", shared(&[("42", json!({"score": "high"}))]), "score");
        let err = source.value_for_key("42").unwrap_err();
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn test_equality_by_store_identity() {
        let results = shared(&[("42", json!({"score": 7.5}))]);
        let a = JoinValueSource::new("id", Arc::clone(&results), "score");
        let b = JoinValueSource::new("other", Arc::clone(&results), "rank");
        let c = JoinValueSource::new("id", shared(&[("42", json!({"score": 7.5}))]), "score");

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<JoinValueSource> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_cache_key_separates_attributes() {
        let results = shared(&[]);
        let a = JoinValueSource::new("id", Arc::clone(&results), "score");
        let b = JoinValueSource::new("id", Arc::clone(&results), "rank");

        assert_eq!(a, b);
        assert_ne!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), a.clone().cache_key());
    }

    #[test]
    fn test_description() {
        let source = JoinValueSource::new("id", shared(&[]), "score");
        assert_eq!(source.description(), "xjoin(id,getScore)");
    }
}
