use super::{Inspector, NoopInspector, Selection};
use crate::action::Action;
use crate::error::StoreError;
use crate::reducer::{Reducer, RootReducer};
use crate::subject::{ReplaySubject, Subscription};
use crate::value::{Path, State};
use parking_lot::ReentrantMutex;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{trace, warn};

#[derive(Default)]
struct Intake {
    pending: VecDeque<Action>,
    draining: bool,
}

struct StoreInner {
    state: ReplaySubject<Arc<State>>,
    reducer: Box<dyn Reducer>,
    inspector: Box<dyn Inspector>,
    // Serializes folds, emissions and replays. Re-entrant so observers can
    // dispatch or subscribe from inside a notification.
    intake: ReentrantMutex<RefCell<Intake>>,
}

/// A Redux-style observable store.
///
/// Actions passed to [`dispatch`](Store::dispatch) are folded through the
/// reducer one at a time, in dispatch order. Each fold step updates the
/// cached state and notifies every subscriber before `dispatch` returns.
/// A dispatch issued from inside a notification is queued and folded right
/// after the current action has reached all subscribers.
///
/// Cloning a store yields another handle to the same state.
///
/// # Examples
///
/// ```
/// use rxstore::{Action, Store};
/// use serde_json::json;
/// use std::sync::{Arc, Mutex};
///
/// let store = Store::new();
/// store.dispatch(Action::with_payload("SET", json!({ "hello": "world" })));
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let _subscription = store.select("spanish.hola").subscribe({
///     let seen = seen.clone();
///     move |value| seen.lock().unwrap().push(value.clone())
/// });
///
/// store.dispatch(Action::with_payload("UPDATE", json!({ "spanish": { "hola": "mundo" } })));
/// assert_eq!(*seen.lock().unwrap(), vec![json!(null), json!("mundo")]);
/// ```
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Create a store with empty state, the built-in reducer and no inspector.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a store; see [`StoreBuilder`].
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Push an action into the store.
    ///
    /// Actions the reducer rejects are logged and dropped; use
    /// [`try_dispatch`](Store::try_dispatch) to observe the rejection.
    pub fn dispatch(&self, action: Action) {
        let kind = action.kind().to_string();
        if let Err(err) = self.try_dispatch(action) {
            warn!(action = %kind, error = %err, "dropping rejected action");
        }
    }

    /// Push an action into the store, returning the reducer's rejection if
    /// the action cannot be folded.
    pub fn try_dispatch(&self, action: Action) -> Result<(), StoreError> {
        self.inner.reducer.validate(&action)?;
        self.exclusive(|intake| intake.borrow_mut().pending.push_back(action));
        Ok(())
    }

    /// Watch a slice of the state at a dotted path.
    pub fn select(&self, path: impl Into<Path>) -> Selection {
        Selection::new(self.clone(), path.into())
    }

    /// Observe the whole state after every fold step.
    ///
    /// The observer is called immediately with the current state.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&State) + Send + Sync + 'static,
    {
        self.exclusive(|_| {
            self.inner
                .state
                .subscribe(move |state: &Arc<State>| observer(state.as_ref()))
        })
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> Arc<State> {
        self.inner.state.latest().unwrap_or_default()
    }

    /// Number of live observers, selections included.
    pub fn subscriber_count(&self) -> usize {
        self.inner.state.observer_count()
    }

    /// Run `f` holding the intake lock, then drain queued actions.
    ///
    /// Nested calls on the same thread run `f` directly; whatever they queue
    /// is drained by the outermost call.
    fn exclusive<R>(&self, f: impl FnOnce(&RefCell<Intake>) -> R) -> R {
        let intake = self.inner.intake.lock();
        if intake.borrow().draining {
            return f(&intake);
        }

        intake.borrow_mut().draining = true;
        let _reset = scopeguard::guard(&*intake, |intake| {
            let mut intake = intake.borrow_mut();
            intake.draining = false;
            intake.pending.clear();
        });

        let result = f(&intake);
        loop {
            let next = intake.borrow_mut().pending.pop_front();
            match next {
                Some(action) => self.fold(&action),
                None => break,
            }
        }
        result
    }

    fn fold(&self, action: &Action) {
        let prior = self.state();
        let next = match self.inner.reducer.reduce(&prior, action) {
            Some(next) => Arc::new(next),
            None => prior,
        };
        trace!(action = action.kind(), keys = next.len(), "folded action");

        self.inner.inspector.inspect(action, &next);
        self.inner.state.next(next);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Configures a [`Store`] before it starts folding actions.
///
/// ```
/// use rxstore::{Action, Store};
/// use rxstore::value::State;
/// use serde_json::json;
///
/// let initial: State = serde_json::from_value(json!({ "count": 1 })).unwrap();
/// let store = Store::builder()
///     .initial_state(initial)
///     .inspector(|action: &Action, _state: &State| println!("{}", action.kind()))
///     .build();
///
/// assert_eq!(store.select("count").get(), json!(1));
/// ```
pub struct StoreBuilder {
    initial: State,
    reducer: Box<dyn Reducer>,
    inspector: Box<dyn Inspector>,
}

impl StoreBuilder {
    /// State before the first action. Defaults to `{}`.
    pub fn initial_state(mut self, state: State) -> Self {
        self.initial = state;
        self
    }

    /// Replace the built-in [`RootReducer`].
    pub fn reducer(mut self, reducer: impl Reducer + 'static) -> Self {
        self.reducer = Box::new(reducer);
        self
    }

    /// Observe every fold step. Defaults to [`NoopInspector`].
    pub fn inspector(mut self, inspector: impl Inspector + 'static) -> Self {
        self.inspector = Box::new(inspector);
        self
    }

    pub fn build(self) -> Store {
        Store {
            inner: Arc::new(StoreInner {
                state: ReplaySubject::with_value(Arc::new(self.initial)),
                reducer: self.reducer,
                inspector: self.inspector,
                intake: ReentrantMutex::new(RefCell::new(Intake::default())),
            }),
        }
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self {
            initial: State::new(),
            reducer: Box::new(RootReducer),
            inspector: Box::new(NoopInspector),
        }
    }
}
