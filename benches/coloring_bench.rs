//! Criterion benchmarks for the coloring algorithms.
//!
//! Uses seeded Erdős–Rényi graphs so every run colors the same inputs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_coloring::prelude::*;
use u_numflow::random::create_rng;

fn random_graph(n: usize, p: f64) -> AdjacencyGraph<usize> {
    AdjacencyGraph::random_graph(n, p, &mut create_rng(42)).expect("valid probability")
}

// ===========================================================================
// Heuristics
// ===========================================================================

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");
    group.sample_size(10);

    for &n in &[100usize, 500, 1000] {
        let graph = random_graph(n, 0.1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(GreedyColorer::color(black_box(g), None)))
        });
    }
    group.finish();
}

fn bench_dsatur(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsatur");
    group.sample_size(10);

    for &n in &[100usize, 500, 1000] {
        let graph = random_graph(n, 0.1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| black_box(DsaturColorer::color(black_box(g))))
        });
    }
    group.finish();
}

// ===========================================================================
// Search
// ===========================================================================

fn bench_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");
    group.sample_size(10);

    for &n in &[20usize, 40, 60] {
        let graph = random_graph(n, 0.2);
        let budget = DsaturColorer::color(&graph)
            .expect("dsatur never fails on a built graph")
            .color_count();
        group.bench_with_input(
            BenchmarkId::new(format!("n{n}_k{budget}"), n),
            &(graph, budget),
            |b, (g, k)| b.iter(|| black_box(BacktrackingColorer::color(black_box(g), *k, None))),
        );
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealing");
    group.sample_size(10);

    for &n in &[50usize, 200] {
        let graph = random_graph(n, 0.1);
        let config = AnnealingConfig::default()
            .with_max_colors(8)
            .with_cooling_rate(0.999);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(graph, config),
            |b, (g, cfg)| {
                b.iter(|| black_box(AnnealingColorer::color_seeded(black_box(g), cfg, 42)))
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_greedy,
    bench_dsatur,
    bench_backtracking,
    bench_annealing
);
criterion_main!(benches);
