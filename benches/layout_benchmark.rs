//! Layout benchmark: stacking and rescale throughput.
//!
//! Layout is O(total leaf count); these keep the constant honest.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panelpress::{merge_col, merge_row, Region, RegionTree};

/// A grid of blank 50x50 panels, merged row by row then stacked.
fn build_grid(rows: usize, cols: usize) -> RegionTree {
    let rows: Vec<RegionTree> = (0..rows)
        .map(|_| merge_row((0..cols).map(|_| Region::blank(50.0, 50.0).unwrap())).unwrap())
        .collect();
    merge_col(rows).unwrap()
}

fn merge_benchmark(c: &mut Criterion) {
    c.bench_function("merge_row_100", |b| {
        b.iter(|| {
            let regions = (0..100).map(|_| Region::blank(50.0, 50.0).unwrap());
            black_box(merge_row(regions).unwrap())
        });
    });

    c.bench_function("merge_grid_10x10", |b| b.iter(|| black_box(build_grid(10, 10))));
}

fn rescale_benchmark(c: &mut Criterion) {
    let tree = build_grid(10, 10);
    c.bench_function("rescale_round_trip_10x10", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            tree.rescale(black_box(1.5));
            tree.rescale(black_box(1.0 / 1.5));
            black_box(tree.width_range())
        });
    });
}

criterion_group!(benches, merge_benchmark, rescale_benchmark);
criterion_main!(benches);
