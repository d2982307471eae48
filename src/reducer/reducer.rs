use crate::action::{Action, SET, UPDATE};
use crate::error::{kind_of, StoreError};
use crate::value::{shallow_merge, State};
use serde_json::Value;

/// A pure fold step over the action stream.
///
/// `reduce` returns `None` when the action leaves the state unchanged, so
/// the store can keep sharing the current state instead of cloning it.
/// `validate` runs before the action enters the store; rejected actions
/// never reach `reduce`.
pub trait Reducer: Send + Sync {
    /// Check that an action can be folded. Defaults to accepting everything.
    fn validate(&self, _action: &Action) -> Result<(), StoreError> {
        Ok(())
    }

    fn reduce(&self, state: &State, action: &Action) -> Option<State>;
}

impl<F> Reducer for F
where
    F: Fn(&State, &Action) -> Option<State> + Send + Sync,
{
    fn reduce(&self, state: &State, action: &Action) -> Option<State> {
        self(state, action)
    }
}

/// The built-in reducer.
///
/// - `SET` replaces the state with the payload object.
/// - `UPDATE` shallow-merges the payload object into the state; a missing
///   or `null` payload changes nothing.
/// - every other type leaves the state as it is.
///
/// # Examples
///
/// ```
/// use rxstore::{Action, Reducer, RootReducer};
/// use rxstore::value::State;
/// use serde_json::json;
///
/// let next = RootReducer
///     .reduce(&State::new(), &Action::with_payload("SET", json!({ "hello": "world" })))
///     .unwrap();
/// assert_eq!(next.get("hello"), Some(&json!("world")));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RootReducer;

impl Reducer for RootReducer {
    fn validate(&self, action: &Action) -> Result<(), StoreError> {
        match (action.kind(), action.payload()) {
            (SET, None) => Err(StoreError::MissingPayload {
                kind: SET.to_string(),
            }),
            (SET, Some(Value::Object(_))) => Ok(()),
            (UPDATE, None | Some(Value::Null | Value::Object(_))) => Ok(()),
            (kind @ (SET | UPDATE), Some(other)) => Err(StoreError::InvalidPayload {
                kind: kind.to_string(),
                found: kind_of(other),
            }),
            _ => Ok(()),
        }
    }

    fn reduce(&self, state: &State, action: &Action) -> Option<State> {
        match (action.kind(), action.payload()) {
            (SET, Some(Value::Object(payload))) => Some(payload.clone()),
            (UPDATE, Some(Value::Object(patch))) => Some(shallow_merge(state, patch)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(value: Value) -> State {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn set_replaces_wholesale() {
        let prior = state(json!({ "a": 1, "b": 2 }));
        let next = RootReducer
            .reduce(&prior, &Action::with_payload(SET, json!({ "c": 3 })))
            .unwrap();
        assert_eq!(Value::Object(next), json!({ "c": 3 }));
    }

    #[test]
    fn update_merges_shallowly() {
        let prior = state(json!({ "a": 1, "b": { "x": 1 } }));
        let next = RootReducer
            .reduce(&prior, &Action::with_payload(UPDATE, json!({ "b": { "y": 2 } })))
            .unwrap();
        assert_eq!(Value::Object(next), json!({ "a": 1, "b": { "y": 2 } }));
    }

    #[test]
    fn unknown_type_is_identity() {
        let prior = state(json!({ "a": 1 }));
        assert!(RootReducer
            .reduce(&prior, &Action::with_payload("DELETE", json!({ "a": null })))
            .is_none());
        assert!(RootReducer.validate(&Action::new("DELETE")).is_ok());
    }

    #[test]
    fn update_without_payload_is_noop() {
        let prior = state(json!({ "a": 1 }));
        assert!(RootReducer.validate(&Action::new(UPDATE)).is_ok());
        assert!(RootReducer.reduce(&prior, &Action::new(UPDATE)).is_none());
        assert!(RootReducer
            .reduce(&prior, &Action::with_payload(UPDATE, Value::Null))
            .is_none());
    }

    #[test]
    fn validate_rejects_bad_payloads() {
        assert!(matches!(
            RootReducer.validate(&Action::new(SET)),
            Err(StoreError::MissingPayload { .. })
        ));
        assert!(matches!(
            RootReducer.validate(&Action::with_payload(SET, json!("x"))),
            Err(StoreError::InvalidPayload { found: "string", .. })
        ));
        assert!(matches!(
            RootReducer.validate(&Action::with_payload(SET, Value::Null)),
            Err(StoreError::InvalidPayload { found: "null", .. })
        ));
        assert!(matches!(
            RootReducer.validate(&Action::with_payload(UPDATE, json!([1]))),
            Err(StoreError::InvalidPayload { found: "array", .. })
        ));
    }

    #[test]
    fn closures_are_reducers() {
        let counter = |state: &State, action: &Action| -> Option<State> {
            (action.kind() == "INCREMENT").then(|| {
                let count = state.get("count").and_then(Value::as_i64).unwrap_or(0);
                let mut next = state.clone();
                next.insert("count".to_string(), json!(count + 1));
                next
            })
        };

        let next = counter.reduce(&State::new(), &Action::new("INCREMENT")).unwrap();
        assert_eq!(next.get("count"), Some(&json!(1)));
        assert!(counter.validate(&Action::new("ANYTHING")).is_ok());
    }
}
