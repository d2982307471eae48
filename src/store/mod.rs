//! The observable store.
//!
//! A [`Store`] folds dispatched actions through a [`Reducer`](crate::Reducer)
//! into one shared state mapping, caches the latest state, and lets consumers
//! watch either the whole state or a [`Selection`] at a dotted path.

mod inspector;
mod selection;
mod store;

pub use inspector::{Inspector, NoopInspector, TracingInspector};
pub use selection::Selection;
pub use store::{Store, StoreBuilder};
