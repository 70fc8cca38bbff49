//! Accessor naming convention

use std::fmt;

/// Prefix carried by every accessor name
pub const ACCESSOR_PREFIX: &str = "get";

/// Name of the zero-argument accessor that yields an attribute.
///
/// Built from an attribute name by prepending [`ACCESSOR_PREFIX`] and
/// upper-casing the first character: `score` becomes `getScore`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccessorName(String);

impl AccessorName {
    /// Converts an attribute name into its accessor name.
    ///
    /// Total over all strings. The empty attribute maps to the bare prefix.
    pub fn from_attribute(attribute: &str) -> Self {
        let mut name = String::with_capacity(ACCESSOR_PREFIX.len() + attribute.len());
        name.push_str(ACCESSOR_PREFIX);

        let mut chars = attribute.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }

        Self(name)
    }

    /// Returns the accessor name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recovers the lower-camel-case attribute name behind this accessor.
    ///
    /// `getScore` yields `score`. Attributes that already started with an
    /// upper-case letter come back lower-cased.
    pub fn attribute(&self) -> String {
        let rest = self.0.strip_prefix(ACCESSOR_PREFIX).unwrap_or(&self.0);
        let mut chars = rest.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for AccessorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
