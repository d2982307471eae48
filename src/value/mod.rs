//! Pure helpers over JSON state: path resolution, deep equality and
//! shallow merge.

mod equal;
mod merge;
mod path;

pub use equal::{deep_equal, map_equal};
pub use merge::shallow_merge;
pub use path::{get, Path};

/// The store's state: always a JSON object.
pub type State = serde_json::Map<String, serde_json::Value>;
