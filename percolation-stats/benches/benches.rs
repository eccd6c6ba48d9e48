use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use percolation_stats::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};

fn seeded_runs(c: &mut Criterion) {
    for dimension in [8, 32] {
        c.bench_function(&format!("n{dimension}_t10_seeded"), |b| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                PercolationStats::run_with(black_box(dimension), black_box(10), &mut rng)
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, seeded_runs);
criterion_main!(benches);
