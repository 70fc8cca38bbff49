//! Value source parser configuration
//!
//! Recognized options:
//! - `component`: name of the upstream join component (optional if `attribute` given)
//! - `attribute`: external result attribute to read (optional if `component` given)
//! - `defaultValue`: value for join keys without a result (optional, 0.0)
//!
//! Whatever is left out is read positionally from the function arguments
//! at query time, component first.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{JoinError, JoinResult};

/// Option name for the upstream component
pub const INIT_COMPONENT: &str = "component";
/// Option name for the attribute
pub const INIT_ATTRIBUTE: &str = "attribute";
/// Option name for the default value
pub const INIT_DEFAULT_VALUE: &str = "defaultValue";

/// Setup-time configuration of a value source parser
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    #[serde(default)]
    pub component: Option<String>,

    #[serde(default)]
    pub attribute: Option<String>,

    #[serde(default)]
    pub default_value: f64,
}

impl ParserConfig {
    /// Configuration bound to a component, attribute taken from arguments
    pub fn for_component(component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            ..Self::default()
        }
    }

    /// Configuration with a fixed attribute, component taken from arguments
    pub fn for_attribute(attribute: impl Into<String>) -> Self {
        Self {
            attribute: Some(attribute.into()),
            ..Self::default()
        }
    }

    /// Set the attribute
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Set the default value
    pub fn with_default_value(mut self, default_value: f64) -> Self {
        self.default_value = default_value;
        self
    }

    /// Parse and validate a JSON options object
    pub fn from_json(json: &str) -> JoinResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| JoinError::Configuration(format!("invalid options JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Validate an already-parsed options object
    pub fn from_value(value: Value) -> JoinResult<Self> {
        let config: ParserConfig = serde_json::from_value(value)
            .map_err(|e| JoinError::Configuration(format!("invalid options: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that name neither component nor attribute
    pub fn validate(&self) -> JoinResult<()> {
        if self.component.is_none() && self.attribute.is_none() {
            return Err(JoinError::Configuration(format!(
                "at least one of {} or {} must be specified",
                INIT_COMPONENT, INIT_ATTRIBUTE
            )));
        }
        Ok(())
    }
}
