#[macro_use]
extern crate criterion;

use criterion::Criterion;
use curvescan::algorithms::lookup_table::{LookupTable, LookupTableOptions};
use curvescan::math::point;
use curvescan_tests::*;

const N: usize = 100;

fn generate_lookup_table(bench: &mut Criterion) {
    let path = demo_path();
    bench.bench_function("generate lookup table (demo path)", |b| {
        b.iter(|| {
            let table = LookupTable::from_path(&path, &LookupTableOptions::DEFAULT);
            criterion::black_box(table);
        })
    });

    let path = mixed_path();
    let options = LookupTableOptions::sample_budget(10_000);
    bench.bench_function("generate lookup table (10k samples)", |b| {
        b.iter(|| {
            let table = LookupTable::from_path(&path, &options);
            criterion::black_box(table);
        })
    });
}

fn closest_point(bench: &mut Criterion) {
    let table = LookupTable::from_path(&demo_path(), &LookupTableOptions::DEFAULT);
    bench.bench_function("closest point (demo path)", |b| {
        b.iter(|| {
            for i in 0..N {
                let query = point(i as f32 * 6.0, 300.0 - i as f32 * 3.0);
                criterion::black_box(table.closest_point(query));
            }
        })
    });

    let table = LookupTable::from_path(
        &zigzag_path(1000),
        &LookupTableOptions::sample_budget(100_000),
    );
    bench.bench_function("closest point (100k samples)", |b| {
        b.iter(|| {
            criterion::black_box(table.closest_point(point(2500.0, 5.0)));
        })
    });
}

criterion_group!(lookup, generate_lookup_table, closest_point);
criterion_main!(lookup);
