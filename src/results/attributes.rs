//! Numeric attribute capability for external results

use serde_json::Value;

use crate::attribute::AccessorName;

/// Outcome of asking a result for a numeric attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeLookup {
    /// The accessor exists and yielded a number
    Value(f64),
    /// The accessor exists but its value is not numeric
    NotNumeric(&'static str),
    /// The result has no such accessor
    Missing,
}

impl AttributeLookup {
    /// Returns the number if one was found
    pub fn value(&self) -> Option<f64> {
        match self {
            AttributeLookup::Value(v) => Some(*v),
            _ => None,
        }
    }
}

/// Capability every external result type implements so numeric
/// attributes can be read without knowing the concrete type.
pub trait NumericAttributes {
    /// Read the attribute behind `accessor`.
    fn numeric_attribute(&self, accessor: &AccessorName) -> AttributeLookup;

    /// Accessors this type always exposes, when fixed at compile time.
    ///
    /// Types returning `Some` let an unknown attribute be rejected when the
    /// value source is bound instead of on the first scored document.
    fn known_accessors() -> Option<&'static [&'static str]>
    where
        Self: Sized,
    {
        None
    }
}

/// JSON objects expose each field as an attribute of the same name.
impl NumericAttributes for Value {
    fn numeric_attribute(&self, accessor: &AccessorName) -> AttributeLookup {
        let Value::Object(fields) = self else {
            return AttributeLookup::Missing;
        };

        match fields.get(&accessor.attribute()) {
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) => AttributeLookup::Value(v),
                None => AttributeLookup::NotNumeric("number"),
            },
            Some(other) => AttributeLookup::NotNumeric(json_kind(other)),
            None => AttributeLookup::Missing,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn accessor(attr: &str) -> AccessorName {
        AccessorName::from_attribute(attr)
    }

    #[test]
    fn test_json_number() {
        let result = json!({"score": 7.5});
        assert_eq!(
            result.numeric_attribute(&accessor("score")),
            AttributeLookup::Value(7.5)
        );
    }

    #[test]
    fn test_json_integer() {
        let result = json!({"matchCount": 3});
        assert_eq!(
            result.numeric_attribute(&accessor("matchCount")),
            AttributeLookup::Value(3.0)
        );
    }

    #[test]
    fn test_json_missing_field() {
        let result = json!({"score": 7.5});
        assert_eq!(
            result.numeric_attribute(&accessor("unknownAttr")),
            AttributeLookup::Missing
        );
    }

    #[test]
    fn test_json_not_numeric() {
        let result = json!({"label": "high"});
        assert_eq!(
            result.numeric_attribute(&accessor("label")),
            AttributeLookup::NotNumeric("string")
        );
    }

    #[test]
    fn test_json_non_object() {
        let result = json!(7.5);
        assert_eq!(
            result.numeric_attribute(&accessor("score")),
            AttributeLookup::Missing
        );
    }

    #[test]
    fn test_json_has_no_known_accessors() {
        assert!(<Value as NumericAttributes>::known_accessors().is_none());
    }
}
