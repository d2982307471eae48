use super::{Button, Component, ObservableComponent};
use crate::action::{Action, SET, UPDATE};
use crate::store::Store;
use serde_json::json;

/// The demo screen: a `Set` button, an `Update` button and an
/// [`ObservableComponent`] watching `spanish.hola`.
pub struct App {
    store: Store,
    set: Button,
    update: Button,
    observed: ObservableComponent,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            set: Button::new("Set", Action::with_payload(SET, json!({ "hello": "world" }))),
            update: Button::new(
                "Update",
                Action::with_payload(UPDATE, json!({ "spanish": { "hola": "mundo" } })),
            ),
            observed: ObservableComponent::new(store.clone()),
            store,
        }
    }

    pub fn handle_set(&self) {
        self.set.click(&self.store);
    }

    pub fn handle_update(&self) {
        self.update.click(&self.store);
    }

    pub fn observed(&self) -> &ObservableComponent {
        &self.observed
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl Component for App {
    fn mount(&mut self) {
        self.observed.mount();
    }

    fn unmount(&mut self) {
        self.observed.unmount();
    }

    fn render(&self) -> String {
        [self.set.render(), self.update.render(), self.observed.render()].join("\n")
    }
}
