//! Push-based publish/subscribe primitives.
//!
//! A [`ReplaySubject`] broadcasts every value to its observers and replays
//! the latest one to new observers. [`distinct`] wraps an observer so it only
//! sees values that differ from the last one it saw.

mod operators;
mod replay;
mod subscription;

pub use operators::distinct;
pub use replay::ReplaySubject;
pub use subscription::Subscription;
