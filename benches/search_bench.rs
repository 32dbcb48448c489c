//! Criterion benchmarks for u-search algorithms.
//!
//! Uses generated grid graphs, N-Queens and a peak-finding surface to
//! measure algorithm overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_search::graph::{Graph, GraphRecord};
use u_search::heuristic::{HeuristicTable, Point};
use u_search::problem::{GridPoint, NQueensProblem, PathProblem, PeakProblem};
use u_search::sa::{AnnealingConfig, AnnealingRunner};
use u_search::search::{SearchConfig, SearchRunner};

// ===========================================================================
// Grid graph: n x n, 4-connected, unit weights
// ===========================================================================

fn grid(n: usize) -> (PathProblem, HeuristicTable<String>) {
    let mut records = Vec::with_capacity(n * n);
    let mut coords = Vec::with_capacity(n * n);
    for x in 0..n {
        for y in 0..n {
            let id = format!("{x},{y}");
            let mut record = GraphRecord::new(id.clone());
            if x + 1 < n {
                record = record.with_edge(format!("{},{y}", x + 1), 1.0);
            }
            if y + 1 < n {
                record = record.with_edge(format!("{x},{}", y + 1), 1.0);
            }
            records.push(record);
            coords.push((id, Point::new(x as f64, y as f64)));
        }
    }
    let graph = Graph::undirected(records).unwrap();
    let goal = format!("{},{}", n - 1, n - 1);
    let problem = PathProblem::new(graph, "0,0", goal).unwrap();
    (problem, coords.into_iter().collect())
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_grid_ucs(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_ucs");
    group.sample_size(10);

    for &n in &[5, 10, 20] {
        let (problem, _) = grid(n);
        let config = SearchConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = SearchRunner::uniform_cost(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_grid_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_astar");
    group.sample_size(10);

    for &n in &[5, 10, 20] {
        let (problem, table) = grid(n);
        let goal = format!("{},{}", n - 1, n - 1);
        let config = SearchConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            let h = table.towards(&goal).unwrap();
            b.iter(|| {
                let result = SearchRunner::astar(black_box(p), &h, black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_nqueens_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("nqueens_bfs");
    group.sample_size(10);

    for &n in &[4, 6, 8] {
        let problem = NQueensProblem::new(n).unwrap();
        let config = SearchConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = SearchRunner::breadth_first(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_peak_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("peak_annealing");
    group.sample_size(10);

    for &n in &[10, 50] {
        let area: Vec<Vec<f64>> = (0..n)
            .map(|x| (0..n).map(|y| -(((x * 7 + y * 13) % 17) as f64)).collect())
            .collect();
        let problem = PeakProblem::new(area, GridPoint::new(0, 0)).unwrap();
        let config = AnnealingConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = AnnealingRunner::run(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_grid_ucs,
    bench_grid_astar,
    bench_nqueens_bfs,
    bench_peak_annealing
);
criterion_main!(benches);
