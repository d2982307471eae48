use crate::action::Action;
use crate::value::State;
use tracing::{debug, enabled, Level};

/// Observer of fold steps, called with each action and the state it
/// produced. This is the hook for developer tooling.
pub trait Inspector: Send + Sync {
    fn inspect(&self, action: &Action, state: &State);
}

impl<F> Inspector for F
where
    F: Fn(&Action, &State) + Send + Sync,
{
    fn inspect(&self, action: &Action, state: &State) {
        self(action, state)
    }
}

/// Ignores every fold step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopInspector;

impl Inspector for NoopInspector {
    fn inspect(&self, _action: &Action, _state: &State) {}
}

/// Emits a `debug` event per fold step with the action type and the
/// resulting state as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingInspector;

impl Inspector for TracingInspector {
    fn inspect(&self, action: &Action, state: &State) {
        if !enabled!(Level::DEBUG) {
            return;
        }
        let state = serde_json::to_string(state).unwrap_or_default();
        debug!(action = action.kind(), state = %state, "store transition");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn closure_inspector_receives_steps() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let inspector = {
            let seen = seen.clone();
            move |action: &Action, state: &State| {
                seen.lock().push((action.kind().to_string(), state.len()))
            }
        };

        inspector.inspect(&Action::new("PING"), &State::new());
        assert_eq!(*seen.lock(), vec![("PING".to_string(), 0)]);
    }

    #[test]
    fn builtin_inspectors_accept_steps() {
        NoopInspector.inspect(&Action::new("PING"), &State::new());
        TracingInspector.inspect(&Action::new("PING"), &State::new());
    }
}
