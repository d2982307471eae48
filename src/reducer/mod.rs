//! Reducers: pure fold steps from `(state, action)` to the next state.

mod reducer;

pub use reducer::{Reducer, RootReducer};
