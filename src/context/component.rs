//! Upstream join components

use std::collections::HashMap;

use crate::value_source::{JoinError, JoinResult};

/// Suffix of the default results tag
const RESULTS_TAG_SUFFIX: &str = ".results";

/// The upstream component an xjoin value source reads from.
///
/// Knows which document field carries the join value and under which tag
/// it publishes results into the query context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinComponent {
    name: String,
    join_field: String,
    results_tag: String,
}

impl JoinComponent {
    /// Create a component publishing under `<name>.results`
    pub fn new(name: impl Into<String>, join_field: impl Into<String>) -> Self {
        let name = name.into();
        let results_tag = format!("{}{}", name, RESULTS_TAG_SUFFIX);
        Self {
            name,
            join_field: join_field.into(),
            results_tag,
        }
    }

    /// Override the results tag
    pub fn with_results_tag(mut self, tag: impl Into<String>) -> Self {
        self.results_tag = tag.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn join_field(&self) -> &str {
        &self.join_field
    }

    pub fn results_tag(&self) -> &str {
        &self.results_tag
    }
}

/// Join components known to the engine, by name
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, JoinComponent>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component. Names are unique.
    pub fn register(&mut self, component: JoinComponent) -> JoinResult<()> {
        if self.components.contains_key(component.name()) {
            return Err(JoinError::DuplicateComponent(component.name().to_string()));
        }
        self.components
            .insert(component.name().to_string(), component);
        Ok(())
    }

    /// Look up a component by name
    pub fn get(&self, name: &str) -> JoinResult<&JoinComponent> {
        self.components
            .get(name)
            .ok_or_else(|| JoinError::UnknownComponent(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_results_tag() {
        let component = JoinComponent::new("xjoin", "id");
        assert_eq!(component.results_tag(), "xjoin.results");
        assert_eq!(component.join_field(), "id");
    }

    #[test]
    fn test_custom_results_tag() {
        let component = JoinComponent::new("xjoin", "id").with_results_tag("ext");
        assert_eq!(component.results_tag(), "ext");
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ComponentRegistry::new();
        registry.register(JoinComponent::new("xjoin", "id")).unwrap();

        assert_eq!(registry.get("xjoin").unwrap().join_field(), "id");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_component() {
        let registry = ComponentRegistry::new();
        assert_eq!(
            registry.get("missing").unwrap_err(),
            JoinError::UnknownComponent("missing".into())
        );
    }

    #[test]
    fn test_duplicate_name() {
        let mut registry = ComponentRegistry::new();
        registry.register(JoinComponent::new("xjoin", "id")).unwrap();
        let err = registry
            .register(JoinComponent::new("xjoin", "other"))
            .unwrap_err();
        assert_eq!(err.code(), "XJOIN_DUPLICATE_COMPONENT");
    }
}
