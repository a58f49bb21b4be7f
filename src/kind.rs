//! Runtime type tags for JSON values
//!
//! `type_of` reports the exact variant of a value rather than a coarse
//! category, so `null`, arrays and objects are never confused.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The runtime type of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// The tag name, e.g. `"Array"`
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Boolean => "Boolean",
            ValueKind::Number => "Number",
            ValueKind::String => "String",
            ValueKind::Array => "Array",
            ValueKind::Object => "Object",
        }
    }

    /// Whether values of this kind hold other values
    pub fn is_container(&self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure: Return the type tag of a value
///
/// # Examples
///
/// ```
/// use shapekit::{type_of, ValueKind};
/// use serde_json::json;
///
/// assert_eq!(type_of(&json!([])), ValueKind::Array);
/// assert_eq!(type_of(&json!({})).to_string(), "Object");
/// assert_eq!(type_of(&json!(null)).to_string(), "Null");
/// ```
pub fn type_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_of_distinguishes_containers_and_null() {
        assert_eq!(type_of(&json!([])), ValueKind::Array);
        assert_eq!(type_of(&json!({})), ValueKind::Object);
        assert_eq!(type_of(&json!(null)), ValueKind::Null);
    }

    #[test]
    fn test_type_of_scalars() {
        assert_eq!(type_of(&json!(true)), ValueKind::Boolean);
        assert_eq!(type_of(&json!(1.5)), ValueKind::Number);
        assert_eq!(type_of(&json!("")), ValueKind::String);
    }

    #[test]
    fn test_display_matches_tag_names() {
        let tags: Vec<String> = [
            json!(null),
            json!(false),
            json!(0),
            json!("x"),
            json!([1]),
            json!({"a": 1}),
        ]
        .iter()
        .map(|v| type_of(v).to_string())
        .collect();

        assert_eq!(
            tags,
            vec!["Null", "Boolean", "Number", "String", "Array", "Object"]
        );
    }

    #[test]
    fn test_is_container() {
        assert!(ValueKind::Array.is_container());
        assert!(ValueKind::Object.is_container());
        assert!(!ValueKind::Null.is_container());
    }
}
