use serde_json::Value;

/// Pure: Recursively copy a value
///
/// Scalars are copied directly, arrays element by element and objects key by
/// key, so the result shares no storage with the input at any depth.
/// `Value` trees cannot contain cycles, which keeps the recursion bounded by
/// the nesting depth of the input.
///
/// ```
/// use shapekit::deep_clone;
/// use serde_json::json;
///
/// let original = json!({"a": {"b": [1, 2]}});
/// assert_eq!(deep_clone(&original), original);
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, nested)| (key.clone(), deep_clone(nested)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}
