use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use protseg::gen::{random_marker_set, random_sequence};
use protseg::solvers::{bottom_up, top_down, trie_dp};
use protseg::MarkerSet;

fn seeded_instance(len: usize, marker_count: usize, max_len: usize) -> (Vec<u8>, MarkerSet) {
    let mut rng = StdRng::seed_from_u64(42);
    let seq = random_sequence(&mut rng, len);
    let markers = random_marker_set(&mut rng, marker_count, max_len);
    (seq, markers)
}

fn bench_tabulating_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabulating_solvers");
    for &len in &[1_000usize, 5_000, 10_000] {
        group.bench_function(BenchmarkId::new("bottom_up", len), |b| {
            b.iter_batched(
                || seeded_instance(len, 500, 25),
                |(seq, markers)| criterion::black_box(bottom_up::solve(&seq, &markers)),
                BatchSize::PerIteration,
            )
        });
        group.bench_function(BenchmarkId::new("trie_dp", len), |b| {
            b.iter_batched(
                || seeded_instance(len, 500, 25),
                |(seq, markers)| criterion::black_box(trie_dp::solve(&seq, &markers)),
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_top_down_within_depth_budget(c: &mut Criterion) {
    // Kept below the recursion-depth calibration used by the probe binary.
    let mut group = c.benchmark_group("top_down_small_n");
    for &len in &[500usize, 1_000, 2_000] {
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || seeded_instance(len, 200, 10),
                |(seq, markers)| criterion::black_box(top_down::solve(&seq, &markers)),
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_tabulating_solvers,
    bench_top_down_within_depth_budget
);
criterion_main!(benches);
