//! Object shaping functions
//!
//! Provides pure functions over JSON objects. Every function borrows its
//! input and returns a new object, so the caller's value is never mutated:
//! - `purify`: Drop null, empty-string and default-valued keys
//! - `filter_object`: Keep entries accepted by a predicate
//! - `map_object`: Transform every value, keeping keys and order
//! - `map_key`: Rename keys through a lookup table
//! - `deep_clone`: Recursive copy of any value
//!
//! # Examples
//!
//! ```
//! use shapekit::object::{map_key, purify};
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let input = json!({"name": "box", "note": "", "size": null});
//! let cleaned = purify(input.as_object().unwrap(), None, false);
//! assert_eq!(serde_json::Value::Object(cleaned), json!({"name": "box"}));
//!
//! let renames: HashMap<String, String> = [("a".into(), "x".into())].into_iter().collect();
//! let renamed = map_key(json!({"a": 1, "b": 2}).as_object().unwrap(), &renames);
//! assert_eq!(serde_json::Value::Object(renamed), json!({"x": 1, "b": 2}));
//! ```

mod clone;

pub use clone::deep_clone;

use crate::error::{ShapeError, ShapeResult};
use crate::kind::type_of;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, trace};

/// A JSON object with insertion-ordered keys
pub type Object = Map<String, Value>;

/// Pure: Remove empty and default-valued keys from an object
///
/// A key is dropped when its value is `null` or `""`, or when its value is a
/// scalar equal to the value under the same key in `defaults`. Arrays and
/// objects are never dropped by the defaults comparison. With `deep` set,
/// nested objects are purified recursively against the matching nested
/// default object.
///
/// # Arguments
///
/// * `map` - The object to clean
/// * `defaults` - Optional object of default values to strip
/// * `deep` - Recurse into nested objects
pub fn purify(map: &Object, defaults: Option<&Object>, deep: bool) -> Object {
    let mut result = Object::new();

    for (key, value) in map {
        if is_blank(value) {
            continue;
        }

        let default = defaults.and_then(|d| d.get(key));
        if default.is_some_and(|d| scalar_eq(value, d)) {
            trace!("Dropping '{}': matches default", key);
            continue;
        }

        let kept = match value {
            Value::Object(nested) if deep => {
                let nested_defaults = default.and_then(Value::as_object);
                Value::Object(purify(nested, nested_defaults, true))
            }
            other => other.clone(),
        };
        result.insert(key.clone(), kept);
    }

    result
}

/// Purify a `Value` that must hold an object
///
/// `defaults`, when given, must also be an object.
pub fn purify_value(value: &Value, defaults: Option<&Value>, deep: bool) -> ShapeResult<Value> {
    let map = expect_object(value)?;
    let defaults = defaults.map(expect_object).transpose()?;
    Ok(Value::Object(purify(map, defaults, deep)))
}

/// Pure: Keep only the entries accepted by `predicate`
///
/// The predicate receives the value, its key and the whole source object.
/// A missing object yields an empty one.
///
/// ```
/// use shapekit::filter_object;
/// use serde_json::json;
///
/// let input = json!({"a": 1, "b": 5});
/// let big = filter_object(input.as_object(), |v, _, _| v.as_i64() > Some(2));
/// assert_eq!(big.len(), 1);
/// assert!(filter_object(None, |_, _, _| true).is_empty());
/// ```
pub fn filter_object<F>(map: Option<&Object>, mut predicate: F) -> Object
where
    F: FnMut(&Value, &str, &Object) -> bool,
{
    let Some(map) = map else {
        return Object::new();
    };

    map.iter()
        .filter(|(key, value)| predicate(value, key, map))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Pure: Transform every value of an object, keeping its keys and order
///
/// A missing object yields an empty one.
pub fn map_object<F>(map: Option<&Object>, mut iterator: F) -> Object
where
    F: FnMut(&Value, &str) -> Value,
{
    let Some(map) = map else {
        return Object::new();
    };

    map.iter()
        .map(|(key, value)| (key.clone(), iterator(value, key)))
        .collect()
}

/// Pure: Rename keys found in `renames`, keeping every other key as-is
///
/// When two keys end up with the same name the later one in iteration order
/// wins.
pub fn map_key(map: &Object, renames: &HashMap<String, String>) -> Object {
    let mut result = Object::with_capacity(map.len());

    for (key, value) in map {
        let target = renames.get(key).unwrap_or(key);
        if result.contains_key(target) {
            debug!("Key collision on '{}', keeping value from '{}'", target, key);
        }
        result.insert(target.clone(), value.clone());
    }

    result
}

/// Rename the keys of a `Value` that must hold an object
pub fn map_key_value(value: &Value, renames: &HashMap<String, String>) -> ShapeResult<Value> {
    let map = expect_object(value)?;
    Ok(Value::Object(map_key(map, renames)))
}

fn expect_object(value: &Value) -> ShapeResult<&Object> {
    value.as_object().ok_or(ShapeError::NotAnObject {
        kind: type_of(value),
    })
}

/// Null and empty strings count as blank
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Compare two scalars; containers never compare equal
///
/// Numbers compare numerically so `1` and `1.0` match.
fn scalar_eq(a: &Value, b: &Value) -> bool {
    if type_of(a).is_container() {
        return false;
    }
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_purify_drops_null_and_empty_string() {
        let input = obj(json!({"a": null, "b": "", "c": 0, "d": false, "e": "x", "f": []}));

        let result = purify(&input, Some(&Object::new()), false);

        assert_eq!(
            Value::Object(result),
            json!({"c": 0, "d": false, "e": "x", "f": []})
        );
    }

    #[test]
    fn test_purify_drops_defaults() {
        let input = obj(json!({"page": 1, "size": 20, "sort": "name"}));
        let defaults = obj(json!({"page": 1, "size": 10, "sort": "name"}));

        let result = purify(&input, Some(&defaults), false);

        assert_eq!(Value::Object(result), json!({"size": 20}));
    }

    #[test]
    fn test_purify_number_defaults_compare_numerically() {
        let input = obj(json!({"ratio": 1.0}));
        let defaults = obj(json!({"ratio": 1}));

        assert!(purify(&input, Some(&defaults), false).is_empty());
    }

    #[test]
    fn test_purify_keeps_equal_containers() {
        let input = obj(json!({"tags": ["a"], "opts": {"x": 1}}));
        let defaults = input.clone();

        let result = purify(&input, Some(&defaults), false);

        assert_eq!(result, input);
    }

    #[test]
    fn test_purify_shallow_leaves_nested_untouched() {
        let input = obj(json!({"nested": {"a": null, "b": 1}}));

        let result = purify(&input, None, false);

        assert_eq!(Value::Object(result), json!({"nested": {"a": null, "b": 1}}));
    }

    #[test]
    fn test_purify_deep_uses_nested_defaults() {
        let input = obj(json!({
            "name": "job",
            "retry": {"count": 3, "delay": 5, "label": ""},
            "extra": {"x": null}
        }));
        let defaults = obj(json!({"retry": {"count": 3, "delay": 1}}));

        let result = purify(&input, Some(&defaults), true);

        assert_eq!(
            Value::Object(result),
            json!({"name": "job", "retry": {"delay": 5}, "extra": {}})
        );
    }

    #[test]
    fn test_purify_does_not_mutate_input() {
        let input = obj(json!({"a": null, "b": 2}));
        let before = input.clone();

        let _ = purify(&input, None, true);

        assert_eq!(input, before);
    }

    #[test]
    fn test_purify_value_rejects_non_objects() {
        let err = purify_value(&json!([1, 2]), None, false).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::NotAnObject {
                kind: crate::kind::ValueKind::Array
            }
        ));

        let err = purify_value(&json!({}), Some(&json!("x")), false).unwrap_err();
        assert!(matches!(err, ShapeError::NotAnObject { .. }));
    }

    #[test]
    fn test_filter_object_none_is_empty() {
        assert!(filter_object(None, |_, _, _| true).is_empty());
    }

    #[test]
    fn test_filter_object_sees_key_and_source() {
        let input = obj(json!({"keep_a": 1, "drop_b": 2, "keep_c": 3}));

        let result = filter_object(Some(&input), |_, key, source| {
            assert_eq!(source.len(), 3);
            key.starts_with("keep")
        });

        assert_eq!(Value::Object(result), json!({"keep_a": 1, "keep_c": 3}));
    }

    #[test]
    fn test_filter_object_with_captured_context() {
        let input = obj(json!({"a": 1, "b": 5, "c": 9}));
        let threshold = 4;

        let result = filter_object(Some(&input), |value, _, _| {
            value.as_i64().is_some_and(|n| n > threshold)
        });

        assert_eq!(Value::Object(result), json!({"b": 5, "c": 9}));
    }

    #[test]
    fn test_map_object_preserves_keys_and_order() {
        let input = obj(json!({"z": 1, "a": 2, "m": 3}));

        let result = map_object(Some(&input), |value, key| {
            json!(format!("{}={}", key, value))
        });

        let keys: Vec<&String> = result.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(result["a"], json!("a=2"));
    }

    #[test]
    fn test_map_object_none_is_empty() {
        assert!(map_object(None, |v, _| v.clone()).is_empty());
    }

    #[test]
    fn test_map_key_renames_and_keeps_rest() {
        let input = obj(json!({"a": 1, "b": 2}));
        let renames: HashMap<String, String> =
            [("a".into(), "x".into())].iter().cloned().collect();

        let result = map_key(&input, &renames);

        assert_eq!(Value::Object(result), json!({"x": 1, "b": 2}));
    }

    #[test]
    fn test_map_key_collision_last_write_wins() {
        let input = obj(json!({"a": 1, "b": 2}));
        let renames: HashMap<String, String> =
            [("a".into(), "b".into())].iter().cloned().collect();

        let result = map_key(&input, &renames);

        assert_eq!(result.len(), 1);
        assert_eq!(result["b"], json!(2));
    }

    #[test]
    fn test_map_key_value_rejects_scalars() {
        let err = map_key_value(&json!(3), &HashMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "Expected a JSON object, found Number");
    }
}
