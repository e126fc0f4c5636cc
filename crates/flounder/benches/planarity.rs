use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flounder::graphlib::build;
use flounder::is_planar;
use std::hint::black_box;

fn bench_is_planar(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_planar");

    for side in [10u64, 30, 60] {
        let g = build::grid(side, side);
        group.bench_function(BenchmarkId::new("grid", side), |b| {
            b.iter(|| is_planar(black_box(&g)))
        });
    }

    // Deep, sparse trees stress the iterative DFS bookkeeping.
    for n in [1_000u64, 10_000] {
        let g = build::binary_tree(n);
        group.bench_function(BenchmarkId::new("binary_tree", n), |b| {
            b.iter(|| is_planar(black_box(&g)))
        });
    }

    // Planar Petersen squares churn the conflict-pair stack.
    for n in [64u64, 512] {
        let g = build::petersen(n, 2);
        group.bench_function(BenchmarkId::new("petersen_k2", n), |b| {
            b.iter(|| is_planar(black_box(&g)))
        });
    }

    // Dense case short-circuited by the Euler criterion.
    let dense = build::complete(64);
    group.bench_function("complete_64", |b| b.iter(|| is_planar(black_box(&dense))));

    group.finish();
}

criterion_group!(benches, bench_is_planar);
criterion_main!(benches);
