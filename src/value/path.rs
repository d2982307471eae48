use super::State;
use serde_json::Value;
use std::fmt;

/// A parsed dotted path such as `spanish.hola` or `todos[0].title`.
///
/// Segments are separated by `.`. Bracketed segments accept bare keys
/// (`a[0]`, `a[key]`) or quoted keys (`a["x.y"]`, `a['x']`) with `\`
/// escapes. Empty segments are literal empty keys, so `a..b` has three
/// segments. An unterminated bracket consumes the rest of the path as one
/// key.
///
/// When the whole path is itself a top-level key of the state (`"a.b"`, or
/// the empty key `""`), that key wins over segment lookup.
///
/// # Examples
///
/// ```
/// use rxstore::value::Path;
///
/// let path = Path::parse(r#"users[0]["first.name"]"#);
/// assert_eq!(path.segments(), ["users", "0", "first.name"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    raw: String,
    segments: Vec<String>,
}

impl Path {
    /// Parse `raw` into segments. Parsing never fails.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: parse_segments(raw),
        }
    }

    /// The path as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The segments used when the path is not a top-level key.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve the path against a state mapping.
    ///
    /// A top-level key equal to the whole path is returned as is. Otherwise
    /// returns `None` when any segment is missing, when a segment indexes
    /// into a scalar, or when the path has no segments.
    pub fn resolve<'a>(&self, state: &'a State) -> Option<&'a Value> {
        if let Some(value) = state.get(&self.raw) {
            return Some(value);
        }
        let (first, rest) = self.segments.split_first()?;
        rest.iter()
            .try_fold(state.get(first)?, |value, segment| step(value, segment))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Resolve `path` against `state` in one call.
///
/// ```
/// use rxstore::value::{get, State};
/// use serde_json::json;
///
/// let state: State = serde_json::from_value(json!({ "spanish": { "hola": "mundo" } })).unwrap();
/// assert_eq!(get(&state, "spanish.hola"), Some(&json!("mundo")));
/// assert_eq!(get(&state, "spanish.adios"), None);
/// ```
pub fn get<'a>(state: &'a State, path: &str) -> Option<&'a Value> {
    Path::parse(path).resolve(state)
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn parse_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    if path.is_empty() {
        return segments;
    }

    // `None` right after a closing bracket: no segment is open.
    let mut current = Some(String::new());
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if let Some(segment) = current.take() {
                    segments.push(segment);
                }
                current = Some(String::new());
            }
            '[' => {
                if let Some(segment) = current.take() {
                    if !segment.is_empty() {
                        segments.push(segment);
                    }
                }

                let quote = match chars.peek() {
                    Some(&q) if q == '"' || q == '\'' => {
                        chars.next();
                        Some(q)
                    }
                    _ => None,
                };

                let mut key = String::new();
                while let Some(c) = chars.next() {
                    match quote {
                        Some(q) => {
                            if c == '\\' {
                                if let Some(escaped) = chars.next() {
                                    key.push(escaped);
                                }
                            } else if c == q && chars.peek() == Some(&']') {
                                chars.next();
                                break;
                            } else {
                                key.push(c);
                            }
                        }
                        None => {
                            if c == ']' {
                                break;
                            }
                            key.push(c);
                        }
                    }
                }
                segments.push(key);
            }
            _ => current.get_or_insert_with(String::new).push(c),
        }
    }

    if let Some(segment) = current {
        segments.push(segment);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(value: Value) -> State {
        match value {
            Value::Object(map) => map,
            _ => panic!("test state must be an object"),
        }
    }

    fn segments(path: &str) -> Vec<String> {
        Path::parse(path).segments().to_vec()
    }

    #[test]
    fn dotted_segments() {
        assert_eq!(segments("spanish.hola"), ["spanish", "hola"]);
        assert_eq!(segments("hello"), ["hello"]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(segments("a..b"), ["a", "", "b"]);
        assert_eq!(segments(".a"), ["", "a"]);
        assert_eq!(segments("a."), ["a", ""]);
    }

    #[test]
    fn bracket_segments() {
        assert_eq!(segments("a[0].b"), ["a", "0", "b"]);
        assert_eq!(segments("[0]"), ["0"]);
        assert_eq!(segments("a[0][1]"), ["a", "0", "1"]);
        assert_eq!(segments("a[key]"), ["a", "key"]);
        assert_eq!(segments(r#"a["x.y"]"#), ["a", "x.y"]);
        assert_eq!(segments("a['x']"), ["a", "x"]);
        assert_eq!(segments(r#"a["q\"uote"]"#), ["a", "q\"uote"]);
        assert_eq!(segments("a[unterminated"), ["a", "unterminated"]);
    }

    #[test]
    fn resolve_nested() {
        let s = state(json!({
            "spanish": { "hola": "mundo" },
            "todos": [{ "title": "first" }, { "title": "second" }],
            "": { "": 1 }
        }));

        assert_eq!(get(&s, "spanish.hola"), Some(&json!("mundo")));
        assert_eq!(get(&s, "spanish"), Some(&json!({ "hola": "mundo" })));
        assert_eq!(get(&s, "todos[1].title"), Some(&json!("second")));
        assert_eq!(get(&s, "todos.0.title"), Some(&json!("first")));
        assert_eq!(get(&s, "."), Some(&json!(1)));
    }

    #[test]
    fn resolve_missing() {
        let s = state(json!({ "hello": "world", "list": [1] }));

        assert_eq!(get(&s, "missing.path"), None);
        assert_eq!(get(&s, "hello.length"), None);
        assert_eq!(get(&s, "list[3]"), None);
        assert_eq!(get(&s, "list[-1]"), None);
        assert_eq!(get(&s, ""), None);
        assert_eq!(get(&State::new(), "anything"), None);
    }

    #[test]
    fn resolve_explicit_null() {
        let s = state(json!({ "a": null }));
        assert_eq!(get(&s, "a"), Some(&Value::Null));
    }

    #[test]
    fn whole_path_key_wins() {
        let s = state(json!({ "a.b": 1, "": 2, "a": { "b": 3 } }));

        assert_eq!(get(&s, "a.b"), Some(&json!(1)));
        assert_eq!(get(&s, ""), Some(&json!(2)));
        assert_eq!(get(&s, "a"), Some(&json!({ "b": 3 })));
    }

    #[test]
    fn dotted_key_absent_falls_back_to_segments() {
        let s = state(json!({ "a": { "b": 3 } }));
        assert_eq!(get(&s, "a.b"), Some(&json!(3)));
        assert_eq!(get(&s, ""), None);
    }

    #[test]
    fn display_round_trips_raw() {
        let path = Path::from("a[0].b");
        assert_eq!(path.to_string(), "a[0].b");
        assert_eq!(path.as_str(), "a[0].b");
    }
}
