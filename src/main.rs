use clap::Parser;
use rxstore::components::{App, Component};
use rxstore::value::State;
use rxstore::{Action, Store, StoreError, Subscription, TracingInspector};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Feed actions into a store and print slices as they change.
///
/// Each line on stdin is one action, either JSON (`{"type":"SET","payload":{...}}`)
/// or shorthand (`UPDATE {"a": 1}`).
#[derive(Debug, Parser)]
#[command(name = "rxstore", version, about)]
struct Args {
    /// Dotted path to watch; may be repeated
    #[arg(short, long = "select", value_name = "PATH")]
    select: Vec<String>,

    /// JSON object file holding the initial state
    #[arg(short, long, value_name = "FILE")]
    initial: Option<PathBuf>,

    /// Log every transition at debug level
    #[arg(long)]
    inspect: bool,

    /// Run the Set/Update button scenario instead of reading stdin
    #[arg(long)]
    demo: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn load_state(path: &Path) -> Result<State, StoreError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn build_store(args: &Args) -> Result<Store, StoreError> {
    let mut builder = Store::builder();
    if let Some(path) = &args.initial {
        builder = builder.initial_state(load_state(path)?);
    }
    if args.inspect {
        builder = builder.inspector(TracingInspector);
    }
    Ok(builder.build())
}

fn watch(store: &Store, paths: &[String]) -> Vec<Subscription> {
    paths
        .iter()
        .map(|path| {
            let label = path.clone();
            store
                .select(path.as_str())
                .subscribe(move |value| println!("{label} = {value}"))
        })
        .collect()
}

fn run_demo(store: Store) {
    let mut app = App::new(store);
    app.mount();
    app.handle_set();
    app.handle_update();
    println!("{}", app.render());
    app.unmount();
}

fn run_stdin(store: &Store) -> Result<(), StoreError> {
    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action = match Action::parse(&line) {
            Ok(action) => action,
            Err(err) => {
                error!(line = number + 1, error = %err, "skipping unparsable action");
                continue;
            }
        };

        debug!(line = number + 1, action = action.kind(), "dispatching");
        if let Err(err) = store.try_dispatch(action) {
            error!(line = number + 1, error = %err, "action rejected");
        }
    }
    Ok(())
}

fn main() -> Result<(), StoreError> {
    init_tracing();
    let args = Args::parse();

    let store = build_store(&args)?;
    let _subscriptions = watch(&store, &args.select);

    if args.demo {
        run_demo(store);
        return Ok(());
    }
    run_stdin(&store)
}
