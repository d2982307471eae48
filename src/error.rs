use thiserror::Error;

/// Errors surfaced by the store and its helpers.
///
/// The store itself is permissive: unknown action types are absorbed and
/// missing paths resolve to `null`. These variants only cover actions whose
/// payload cannot produce a valid state, and decoding of external input.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("`{kind}` action requires a payload")]
    MissingPayload { kind: String },

    #[error("`{kind}` payload must be an object, got {found}")]
    InvalidPayload { kind: String, found: &'static str },

    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Short name of a JSON value's kind, used in diagnostics.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
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

    #[test]
    fn display_messages() {
        let err = StoreError::InvalidPayload {
            kind: "SET".to_string(),
            found: kind_of(&json!([1, 2])),
        };
        assert_eq!(err.to_string(), "`SET` payload must be an object, got array");

        let err = StoreError::MissingPayload {
            kind: "SET".to_string(),
        };
        assert_eq!(err.to_string(), "`SET` action requires a payload");
    }
}
