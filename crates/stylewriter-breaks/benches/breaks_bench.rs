use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use stylewriter_breaks::{EqualBreaks, BreaksBuilder, QuantileBreaks};

/// Generate uniform data
fn generate_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0.0..1000.0)).collect()
}

fn bench_breaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Breaks");
    let sizes = [100, 1_000, 10_000, 100_000];

    for &size in &sizes {
        let data = generate_data(size, 42);

        let quantile = QuantileBreaks::new(7);
        group.bench_with_input(BenchmarkId::new("quantile", size), &data, |b, data| {
            b.iter(|| quantile.breaks(black_box(data)))
        });

        let equal = EqualBreaks::new(7);
        group.bench_with_input(BenchmarkId::new("equal", size), &data, |b, data| {
            b.iter(|| equal.breaks(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_breaks);
criterion_main!(benches);
