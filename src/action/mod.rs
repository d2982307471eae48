//! Actions: tagged values describing an intended state transition.

mod action;

pub use action::{Action, SET, UPDATE};
