//! Criterion benchmarks for the QUBO tabu search engine.
//!
//! Measures the incremental flip path (the hot loop STS spends almost
//! all its time in) and a full multistart session at a few problem
//! sizes, independent of any particular downstream model.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qubo_tabu::tabu::{search, Qubo, SearchConfig, State};

fn random_matrix(n: usize, seed: u64) -> Vec<Vec<f64>> {
    // Deterministic xorshift, not rand::Rng, to keep the bench binary's
    // only dependency on the crate under test plus criterion.
    let mut state = seed.wrapping_mul(2685821657736338717).wrapping_add(1);
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state as i64 % 201 - 100) as f64
    };
    (0..n).map(|_| (0..n).map(|_| next()).collect()).collect()
}

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_flip");
    for &n in &[10usize, 50, 200] {
        let matrix = random_matrix(n, 1);
        let qubo = Qubo::new(&matrix, 1.0).unwrap();
        let x0 = vec![0u8; n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut state = State::from_assignment(&qubo, &x0);
                for k in 0..n {
                    state.flip(k).unwrap();
                }
                black_box(state.energy())
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst2_search");
    for &n in &[10usize, 30] {
        let matrix = random_matrix(n, 2);
        let x0 = vec![1u8; n];
        let config = SearchConfig::default()
            .with_tenure(SearchConfig::default_tenure(n))
            .with_timeout_ms(20);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(search(&matrix, &x0, &config).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flip, bench_search);
criterion_main!(benches);
