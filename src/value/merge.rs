use super::State;

/// Overlay the top-level keys of `patch` onto a copy of `base`.
///
/// Nested objects in `patch` replace those in `base` wholesale; nothing is
/// merged recursively.
///
/// ```
/// use rxstore::value::{shallow_merge, State};
/// use serde_json::json;
///
/// let base: State = serde_json::from_value(json!({ "a": 1, "b": { "x": 1 } })).unwrap();
/// let patch: State = serde_json::from_value(json!({ "b": { "y": 2 } })).unwrap();
///
/// let merged = shallow_merge(&base, &patch);
/// assert_eq!(serde_json::Value::Object(merged), json!({ "a": 1, "b": { "y": 2 } }));
/// ```
pub fn shallow_merge(base: &State, patch: &State) -> State {
    let mut merged = base.clone();
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn state(value: Value) -> State {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn overwrites_top_level_keys() {
        let merged = shallow_merge(&state(json!({ "a": 1, "b": 2 })), &state(json!({ "b": 3 })));
        assert_eq!(Value::Object(merged), json!({ "a": 1, "b": 3 }));
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = state(json!({ "a": { "deep": [1, 2] } }));
        assert_eq!(shallow_merge(&base, &State::new()), base);
    }

    #[test]
    fn null_values_are_written() {
        let merged = shallow_merge(&state(json!({ "a": 1 })), &state(json!({ "a": null })));
        assert_eq!(Value::Object(merged), json!({ "a": null }));
    }
}
