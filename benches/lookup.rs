//! Performance benchmarks for the indexable registry
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sxi::manifest::builtin_manifest;
use sxi::ranking::RankTable;
use sxi::registry::IndexableRegistry;

fn bench_initialize(c: &mut Criterion) {
    let manifest = builtin_manifest();
    let ranking = RankTable::builtin();

    c.bench_function("initialize_builtin", |b| {
        b.iter(|| IndexableRegistry::initialize(black_box(&manifest), &ranking))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let manifest = builtin_manifest();
    let registry = IndexableRegistry::initialize(&manifest, &RankTable::builtin())
        .expect("Failed to build registry");

    let mut group = c.benchmark_group("lookup");
    for identifier in [
        "com.android.settings.wifi.WifiSettings",
        "com.android.settings.razer.SmartControl",
        "nonexistent.Class",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(identifier), identifier, |b, id| {
            b.iter(|| registry.get(black_box(id)))
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let registry = IndexableRegistry::initialize(&builtin_manifest(), &RankTable::builtin())
        .expect("Failed to build registry");

    c.bench_function("records", |b| b.iter(|| registry.records().count()));
    c.bench_function("records_by_rank", |b| b.iter(|| registry.records_by_rank()));
}

criterion_group!(benches, bench_initialize, bench_lookup, bench_enumerate);

criterion_main!(benches);
