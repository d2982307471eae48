//! # rxstore
//!
//! A Redux-style observable store for Rust.
//!
//! State is a single JSON object. Actions are folded into it by a reducer,
//! and consumers watch narrow slices of it by dotted path:
//!
//! - [`Action`] - an immutable type tag plus optional payload
//! - [`Reducer`] - pure fold step; [`RootReducer`] handles `SET` and `UPDATE`
//! - [`Store`] - dispatches actions, caches the latest state, fans out changes
//! - [`Selection`] - one slice of the state, emitted only when it changes
//! - [`Inspector`] - hook called after every fold step, for developer tooling
//!
//! ```
//! use rxstore::{Action, Store};
//! use serde_json::json;
//!
//! let store = Store::new();
//! store.dispatch(Action::with_payload("SET", json!({ "hello": "world" })));
//! store.dispatch(Action::with_payload("UPDATE", json!({ "spanish": { "hola": "mundo" } })));
//!
//! assert_eq!(store.select("hello").get(), json!("world"));
//! assert_eq!(store.select("spanish.hola").get(), json!("mundo"));
//! ```

pub mod action;
pub mod components;
mod error;
pub mod reducer;
pub mod store;
pub mod subject;
pub mod value;

// Re-export main types for convenience
pub use action::Action;
pub use error::StoreError;
pub use reducer::{Reducer, RootReducer};
pub use store::{Inspector, NoopInspector, Selection, Store, StoreBuilder, TracingInspector};
pub use subject::Subscription;
