//! Demonstration of Store for managing a todo list

use rxstore::value::State;
use rxstore::{Action, Reducer, RootReducer, Store, TracingInspector};
use serde_json::{json, Value};

/// Handles the todo actions and defers everything else to the root reducer.
struct TodoReducer;

impl TodoReducer {
    fn todos(state: &State) -> Vec<Value> {
        state
            .get("todos")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    fn with_todos(state: &State, todos: Vec<Value>) -> State {
        let mut next = state.clone();
        next.insert("todos".to_string(), Value::Array(todos));
        next
    }
}

impl Reducer for TodoReducer {
    fn validate(&self, action: &Action) -> Result<(), rxstore::StoreError> {
        RootReducer.validate(action)
    }

    fn reduce(&self, state: &State, action: &Action) -> Option<State> {
        match action.kind() {
            "ADD_TODO" => {
                let title = action.payload()?.as_str()?;
                let mut todos = Self::todos(state);
                todos.push(json!({ "id": todos.len(), "title": title, "completed": false }));
                Some(Self::with_todos(state, todos))
            }
            "TOGGLE_TODO" => {
                let id = action.payload()?.as_u64()?;
                let mut todos = Self::todos(state);
                let todo = todos.iter_mut().find(|t| t["id"] == json!(id))?;
                let completed = todo["completed"].as_bool().unwrap_or(false);
                todo["completed"] = json!(!completed);
                Some(Self::with_todos(state, todos))
            }
            _ => RootReducer.reduce(state, action),
        }
    }
}

fn stats(state: &State) -> (usize, usize, usize) {
    let todos = TodoReducer::todos(state);
    let total = todos.len();
    let completed = todos
        .iter()
        .filter(|t| t["completed"].as_bool() == Some(true))
        .count();
    (total, total - completed, completed)
}

fn print_todos(store: &Store) {
    for todo in TodoReducer::todos(&store.state()) {
        let status = if todo["completed"] == json!(true) { "✓" } else { " " };
        println!("   [{}] {}", status, todo["title"].as_str().unwrap_or_default());
    }
}

fn main() {
    tracing_subscriber::fmt().with_env_filter("rxstore=debug").init();

    println!("=== Store Example: Todo App ===\n");

    let store = Store::builder()
        .initial_state(serde_json::from_value(json!({ "todos": [], "filter": "all" })).unwrap())
        .reducer(TodoReducer)
        .inspector(TracingInspector)
        .build();

    println!("1. Setting up subscribers");
    let _stats = store.subscribe(|state| {
        let (total, active, completed) = stats(state);
        println!(
            "   [Store Update] Total: {}, Active: {}, Completed: {}",
            total, active, completed
        );
    });
    let _filter = store.select("filter").subscribe(|filter| {
        println!("   [Filter] {}", filter);
    });

    println!("\n2. Adding todos");
    for title in ["Learn Rust", "Build reactive library", "Write documentation"] {
        store.dispatch(Action::with_payload("ADD_TODO", json!(title)));
    }

    println!("\n3. Current todos:");
    print_todos(&store);

    println!("\n4. Completing first todo");
    store.dispatch(Action::with_payload("TOGGLE_TODO", json!(0)));

    println!("\n5. Filtering to show only active todos");
    store.dispatch(Action::with_payload("UPDATE", json!({ "filter": "active" })));

    println!("\n6. Dispatching an unknown action (no filter output expected)");
    store.dispatch(Action::new("UNDO"));

    println!("\n7. Current todos:");
    print_todos(&store);

    let (total, active, completed) = stats(&store.state());
    println!("\n8. Final statistics:");
    println!("   Total: {}", total);
    println!("   Active: {}", active);
    println!("   Completed: {}", completed);

    println!("\n✓ Example complete!");
}
