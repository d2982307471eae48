use crate::error::StoreError;
use crate::value::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Replace the whole state with the payload.
pub const SET: &str = "SET";

/// Shallow-merge the payload into the current state.
pub const UPDATE: &str = "UPDATE";

/// An immutable action: a type tag plus an optional payload.
///
/// Serializes as `{"type": "...", "payload": ...}`; the payload is omitted
/// when absent.
///
/// # Examples
///
/// ```
/// use rxstore::Action;
/// use serde_json::json;
///
/// let action = Action::with_payload("SET", json!({ "hello": "world" }));
/// assert_eq!(action.kind(), "SET");
/// assert_eq!(action.payload(), Some(&json!({ "hello": "world" })));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

impl Action {
    /// Create an action without a payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Create an action carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
        }
    }

    /// A `SET` action replacing the state with `state`.
    pub fn set(state: State) -> Self {
        Self::with_payload(SET, Value::Object(state))
    }

    /// An `UPDATE` action merging `patch` into the state.
    pub fn update(patch: State) -> Self {
        Self::with_payload(UPDATE, Value::Object(patch))
    }

    /// The type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The payload, if the action carries one.
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Decode an action from its JSON form.
    pub fn from_json(input: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse one line of textual input.
    ///
    /// Accepts either the JSON form or the shorthand `TYPE [payload]`, where
    /// the optional payload is any JSON value.
    ///
    /// ```
    /// use rxstore::Action;
    /// use serde_json::json;
    ///
    /// let action = Action::parse(r#"UPDATE {"a": 1}"#).unwrap();
    /// assert_eq!(action, Action::with_payload("UPDATE", json!({ "a": 1 })));
    /// ```
    pub fn parse(line: &str) -> Result<Self, StoreError> {
        let line = line.trim();
        if line.starts_with('{') {
            return Self::from_json(line);
        }

        match line.split_once(char::is_whitespace) {
            Some((kind, rest)) if !rest.trim().is_empty() => {
                let payload = serde_json::from_str(rest.trim())?;
                Ok(Self::with_payload(kind, payload))
            }
            Some((kind, _)) => Ok(Self::new(kind)),
            None => Ok(Self::new(line)),
        }
    }
}
