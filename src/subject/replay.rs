use super::Subscription;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct SubjectInner<T> {
    latest: RwLock<Option<T>>,
    observers: RwLock<Vec<(usize, Observer<T>)>>,
    next_id: AtomicUsize,
}

/// A broadcast channel with a replay buffer of one.
///
/// Every value passed to [`next`](ReplaySubject::next) is delivered to all
/// registered observers, in registration order, on the calling thread. New
/// observers immediately receive the most recent value, if any.
///
/// Observers are invoked without any internal lock held, so they may
/// subscribe, unsubscribe or publish. Callers that need emissions and
/// replays to be totally ordered across threads must serialize `next` and
/// `subscribe` themselves (the store does).
///
/// # Examples
///
/// ```
/// use rxstore::subject::ReplaySubject;
/// use std::sync::{Arc, Mutex};
///
/// let subject = ReplaySubject::new();
/// subject.next(1);
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let _subscription = subject.subscribe({
///     let seen = seen.clone();
///     move |value: &i32| seen.lock().unwrap().push(*value)
/// });
/// subject.next(2);
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
/// ```
pub struct ReplaySubject<T> {
    inner: Arc<SubjectInner<T>>,
}

impl<T: Clone + Send + Sync + 'static> ReplaySubject<T> {
    /// Create a subject that has not emitted yet.
    pub fn new() -> Self {
        Self::from_latest(None)
    }

    /// Create a subject whose replay buffer already holds `initial`.
    pub fn with_value(initial: T) -> Self {
        Self::from_latest(Some(initial))
    }

    fn from_latest(latest: Option<T>) -> Self {
        Self {
            inner: Arc::new(SubjectInner {
                latest: RwLock::new(latest),
                observers: RwLock::new(Vec::new()),
                next_id: AtomicUsize::new(0),
            }),
        }
    }

    /// The most recent value, if any has been emitted.
    pub fn latest(&self) -> Option<T> {
        self.inner.latest.read().clone()
    }

    /// Record `value` as the latest and deliver it to every observer.
    pub fn next(&self, value: T) {
        *self.inner.latest.write() = Some(value.clone());

        let observers: Vec<Observer<T>> = self
            .inner
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer(&value);
        }
    }

    /// Register an observer, replaying the latest value to it first.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        let observer: Observer<T> = Arc::new(observer);
        self.inner
            .observers
            .write()
            .push((id, Arc::clone(&observer)));

        if let Some(latest) = self.latest() {
            observer(&latest);
        }

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.observers.write().retain(|(other, _)| *other != id);
            }
        })
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.read().len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ReplaySubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ReplaySubject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
