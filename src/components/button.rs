use super::Component;
use crate::action::Action;
use crate::store::Store;

/// A labelled button that dispatches a fixed action when clicked.
#[derive(Clone, Debug)]
pub struct Button {
    label: String,
    action: Action,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    pub fn click(&self, store: &Store) {
        store.dispatch(self.action.clone());
    }
}

impl Component for Button {
    fn render(&self) -> String {
        format!("<button>{}</button>", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn click_dispatches() {
        let store = Store::new();
        let button = Button::new("Set", Action::with_payload("SET", json!({ "on": true })));

        button.click(&store);
        assert_eq!(store.state().get("on"), Some(&json!(true)));
        assert_eq!(button.render(), "<button>Set</button>");
    }
}
