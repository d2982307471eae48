use super::State;
use serde_json::{Number, Value};

/// Structural equality over JSON values.
///
/// Objects are equal when they hold the same keys with deeply equal values,
/// arrays compare element-wise, and numbers compare by numeric value so that
/// `1` and `1.0` are equal.
///
/// ```
/// use rxstore::value::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({ "a": [1, { "b": 2.0 }] }), &json!({ "a": [1.0, { "b": 2 }] })));
/// assert!(!deep_equal(&json!({ "a": 1 }), &json!({ "a": 1, "b": null })));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| deep_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => map_equal(x, y),
        _ => a == b,
    }
}

/// [`deep_equal`] for two state mappings.
pub fn map_equal(a: &State, b: &State) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| deep_equal(value, other)))
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
