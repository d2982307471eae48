use super::Component;
use crate::store::Store;
use crate::subject::Subscription;
use crate::value::Path;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Path watched by [`ObservableComponent::new`].
pub const DEFAULT_PATH: &str = "spanish.hola";

/// Displays one slice of the store while mounted.
///
/// Mounting subscribes to the slice and logs every distinct value;
/// unmounting drops the subscription.
pub struct ObservableComponent {
    store: Store,
    path: Path,
    updates: Arc<Mutex<Vec<Value>>>,
    subscription: Option<Subscription>,
}

impl ObservableComponent {
    /// Watch [`DEFAULT_PATH`].
    pub fn new(store: Store) -> Self {
        Self::with_path(store, DEFAULT_PATH)
    }

    pub fn with_path(store: Store, path: impl Into<Path>) -> Self {
        Self {
            store,
            path: path.into(),
            updates: Arc::new(Mutex::new(Vec::new())),
            subscription: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Every value received while mounted, oldest first.
    pub fn updates(&self) -> Vec<Value> {
        self.updates.lock().clone()
    }

    pub fn latest(&self) -> Option<Value> {
        self.updates.lock().last().cloned()
    }
}

impl Component for ObservableComponent {
    fn mount(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let updates = Arc::clone(&self.updates);
        let path = self.path.clone();
        self.subscription = Some(self.store.select(self.path.clone()).subscribe(move |value| {
            info!(path = %path, value = %value, "slice changed");
            updates.lock().push(value.clone());
        }));
    }

    fn unmount(&mut self) {
        self.subscription = None;
    }

    fn render(&self) -> String {
        match self.latest() {
            Some(value) => format!("<h1>ObservableComponent</h1>\n<p>{} = {}</p>", self.path, value),
            None => "<h1>ObservableComponent</h1>".to_string(),
        }
    }
}
