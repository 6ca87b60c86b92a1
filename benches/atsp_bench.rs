//! Criterion benchmarks for the ATSP engines.
//!
//! Uses synthetic asymmetric matrices to measure the cost model and the
//! fixed-work parts of each engine (greedy construction, tabu iterations).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use atsp_metaheur::cost::{relocate_delta, swap_delta, tour_cost};
use atsp_metaheur::greedy::{GreedyConfig, GreedySolver};
use atsp_metaheur::tabu::{TabuConfig, TabuSearch};
use atsp_metaheur::{CostMatrix, Solver};

// ===========================================================================
// Instances
// ===========================================================================

fn random_matrix(n: usize, seed: u64) -> CostMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let costs = (0..n * n).map(|_| rng.random_range(1..1000)).collect();
    CostMatrix::from_flat(n, costs).expect("valid random matrix")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_cost_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_model");

    for &n in &[50usize, 200, 1000] {
        let m = random_matrix(n, 42);
        let tour: Vec<usize> = (0..n).collect();

        group.bench_with_input(BenchmarkId::new("tour_cost", n), &n, |b, _| {
            b.iter(|| black_box(tour_cost(black_box(&tour), &m)))
        });
        group.bench_with_input(BenchmarkId::new("swap_delta", n), &n, |b, &n| {
            b.iter(|| black_box(swap_delta(black_box(&tour), &m, 3, n / 2)))
        });
        group.bench_with_input(BenchmarkId::new("relocate_delta", n), &n, |b, &n| {
            b.iter(|| black_box(relocate_delta(black_box(&tour), &m, n / 2, 3)))
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    group.sample_size(10);

    for &n in &[50usize, 100, 200] {
        let m = random_matrix(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| {
                let mut solver = GreedySolver::new(m, GreedyConfig::default()).unwrap();
                black_box(solver.solve().best_cost)
            })
        });
    }
    group.finish();
}

fn bench_tabu_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_100_steps");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let m = random_matrix(n, 11);
        let config = TabuConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| {
                let mut search = TabuSearch::new(m, config.clone()).unwrap();
                for _ in 0..100 {
                    black_box(search.step());
                }
                black_box(search.best_cost())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cost_model, bench_greedy, bench_tabu_steps);
criterion_main!(benches);
