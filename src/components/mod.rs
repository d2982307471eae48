//! Headless UI components wired to a [`Store`](crate::Store).
//!
//! These mirror a small button-and-display screen: buttons dispatch fixed
//! actions, and an [`ObservableComponent`] subscribes to one slice while
//! mounted. Rendering produces plain text so the wiring can be driven from
//! tests or a terminal.

mod app;
mod button;
mod observable;

pub use app::App;
pub use button::Button;
pub use observable::ObservableComponent;

/// Lifecycle of a headless component.
pub trait Component {
    /// Called when the component is attached. Defaults to nothing.
    fn mount(&mut self) {}

    /// Called when the component is detached. Defaults to nothing.
    fn unmount(&mut self) {}

    fn render(&self) -> String;
}
