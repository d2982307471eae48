type Teardown = Box<dyn FnOnce() + Send + Sync>;

/// RAII handle for an observer registration.
///
/// Dropping the handle unregisters the observer. Keep it alive for as long
/// as the observer should receive values, or call [`Subscription::detach`]
/// to leave the observer registered for the lifetime of its source.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    teardown: Option<Teardown>,
}

impl Subscription {
    pub(crate) fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Unregister the observer now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Give up the handle without unregistering the observer.
    pub fn detach(mut self) {
        self.teardown = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}
