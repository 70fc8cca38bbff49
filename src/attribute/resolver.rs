//! Cached attribute resolution

use std::collections::HashMap;
use std::sync::RwLock;

use super::naming::AccessorName;

/// Distinct attributes a resolver caches by default
pub const DEFAULT_CACHE_LIMIT: usize = 256;

/// Resolves attribute names to accessor names, caching each distinct
/// attribute so the conversion runs once.
///
/// Shared by every query parsed through the same value source parser,
/// so the cache sits behind a lock. A poisoned lock only disables caching.
/// Attribute names come from query arguments, so at most `limit` entries
/// are kept; later attributes are converted on every call.
#[derive(Debug)]
pub struct AttributeResolver {
    cache: RwLock<HashMap<String, AccessorName>>,
    limit: usize,
}

impl Default for AttributeResolver {
    fn default() -> Self {
        Self::with_limit(DEFAULT_CACHE_LIMIT)
    }
}

impl AttributeResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty resolver caching at most `limit` attributes
    pub fn with_limit(limit: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            limit,
        }
    }

    /// Resolve an attribute name to its accessor name
    pub fn resolve(&self, attribute: &str) -> AccessorName {
        if let Ok(cache) = self.cache.read() {
            if let Some(accessor) = cache.get(attribute) {
                return accessor.clone();
            }
        }

        let accessor = AccessorName::from_attribute(attribute);
        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < self.limit {
                cache
                    .entry(attribute.to_string())
                    .or_insert_with(|| accessor.clone());
            }
        }
        accessor
    }

    /// Number of distinct attributes resolved so far
    pub fn cached(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_matches_naming() {
        let resolver = AttributeResolver::new();
        assert_eq!(
            resolver.resolve("score"),
            AccessorName::from_attribute("score")
        );
    }

    #[test]
    fn test_resolve_caches_distinct_attributes() {
        let resolver = AttributeResolver::new();
        resolver.resolve("score");
        resolver.resolve("score");
        resolver.resolve("rank");

        assert_eq!(resolver.cached(), 2);
    }

    #[test]
    fn test_cache_bounded() {
        let resolver = AttributeResolver::with_limit(2);
        for i in 0..100 {
            resolver.resolve(&format!("attr{}", i));
        }
        assert_eq!(resolver.cached(), 2);

        let uncached = resolver.resolve("score");
        assert_eq!(uncached.as_str(), "getScore");
        assert_eq!(resolver.cached(), 2);
    }

    #[test]
    fn test_default_limit() {
        let resolver = AttributeResolver::new();
        for i in 0..DEFAULT_CACHE_LIMIT + 10 {
            resolver.resolve(&format!("attr{}", i));
        }
        assert_eq!(resolver.cached(), DEFAULT_CACHE_LIMIT);
    }

    #[test]
    fn test_resolve_stable_across_calls() {
        let resolver = AttributeResolver::new();
        let first = resolver.resolve("matchCount");
        let second = resolver.resolve("matchCount");
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "getMatchCount");
    }
}
