use super::Store;
use crate::subject::{distinct, Subscription};
use crate::value::{deep_equal, Path, State};
use serde_json::Value;

/// A slice of a store's state at a dotted path.
///
/// Subscribers receive the current slice immediately, then a new value only
/// when the slice changes under deep equality. A path that does not resolve
/// yields `null`.
#[derive(Clone)]
pub struct Selection {
    store: Store,
    path: Path,
}

impl Selection {
    pub(crate) fn new(store: Store, path: Path) -> Self {
        Self { store, path }
    }

    /// The path this selection watches.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The slice as of now.
    pub fn get(&self) -> Value {
        resolve(&self.path, &self.store.state())
    }

    /// Observe distinct values of the slice.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let path = self.path.clone();
        let observer = distinct(deep_equal, observer);
        self.store.subscribe(move |state| observer(&resolve(&path, state)))
    }
}

fn resolve(path: &Path, state: &State) -> Value {
    path.resolve(state).cloned().unwrap_or(Value::Null)
}
