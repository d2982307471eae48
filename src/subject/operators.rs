use parking_lot::Mutex;

/// Wrap `observer` so consecutive values equal under `eq` are dropped.
///
/// Each wrapper tracks the last value it forwarded; the first value always
/// passes.
///
/// ```
/// use rxstore::subject::{distinct, ReplaySubject};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let subject = ReplaySubject::new();
/// let calls = Arc::new(AtomicUsize::new(0));
/// let _subscription = subject.subscribe(distinct(|a: &i32, b: &i32| a == b, {
///     let calls = calls.clone();
///     move |_: &i32| {
///         calls.fetch_add(1, Ordering::SeqCst);
///     }
/// }));
///
/// subject.next(1);
/// subject.next(1);
/// subject.next(2);
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
pub fn distinct<T, E, F>(eq: E, observer: F) -> impl Fn(&T) + Send + Sync
where
    T: Clone + Send,
    E: Fn(&T, &T) -> bool + Send + Sync,
    F: Fn(&T) + Send + Sync,
{
    let last: Mutex<Option<T>> = Mutex::new(None);
    move |value: &T| {
        {
            let mut last = last.lock();
            if last.as_ref().is_some_and(|previous| eq(previous, value)) {
                return;
            }
            *last = Some(value.clone());
        }
        observer(value);
    }
}
