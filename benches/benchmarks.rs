use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use std::hint::black_box;

use rxstore::value::{deep_equal, Path, State};
use rxstore::{Action, Store};

fn dispatch_update_benchmark(c: &mut Criterion) {
    let store = Store::new();
    store.dispatch(Action::with_payload("SET", json!({ "hello": "world" })));

    c.bench_function("dispatch_update", |b| {
        let mut i = 0;
        b.iter(|| {
            let mut patch = State::new();
            patch.insert("counter".to_string(), json!(i));
            store.dispatch(black_box(Action::update(patch)));
            i += 1;
        });
    });
}

fn dispatch_unknown_benchmark(c: &mut Criterion) {
    let store = Store::new();

    c.bench_function("dispatch_unknown", |b| {
        b.iter(|| {
            store.dispatch(black_box(Action::new("NOOP")));
        });
    });
}

fn select_fanout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_fanout");

    for subscribers in [1, 10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            subscribers,
            |b, &subscribers| {
                let store = Store::new();
                let _subscriptions: Vec<_> = (0..subscribers)
                    .map(|i| {
                        store
                            .select(format!("slot{}", i % 10).as_str())
                            .subscribe(|value| {
                                black_box(value);
                            })
                    })
                    .collect();

                let mut i = 0;
                b.iter(|| {
                    let mut patch = State::new();
                    patch.insert("slot0".to_string(), json!(i));
                    store.dispatch(Action::update(patch));
                    i += 1;
                });
            },
        );
    }

    group.finish();
}

fn path_resolve_benchmark(c: &mut Criterion) {
    let state: State = serde_json::from_value(json!({
        "users": [{ "profile": { "name": "ada" } }, { "profile": { "name": "grace" } }]
    }))
    .unwrap();
    let path = Path::parse("users[1].profile.name");

    c.bench_function("path_resolve", |b| {
        b.iter(|| {
            black_box(path.resolve(black_box(&state)));
        });
    });
}

fn deep_equal_benchmark(c: &mut Criterion) {
    let a = json!({ "list": (0..100).collect::<Vec<_>>(), "nested": { "a": { "b": [1, 2, 3] } } });
    let b = a.clone();

    c.bench_function("deep_equal", |bench| {
        bench.iter(|| {
            black_box(deep_equal(black_box(&a), black_box(&b)));
        });
    });
}

criterion_group!(
    benches,
    dispatch_update_benchmark,
    dispatch_unknown_benchmark,
    select_fanout_benchmark,
    path_resolve_benchmark,
    deep_equal_benchmark
);
criterion_main!(benches);
