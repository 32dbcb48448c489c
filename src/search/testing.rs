//! Shared fixtures for search tests.

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::runner::Outcome;
use crate::graph::{Graph, GraphRecord};
use crate::heuristic::{HeuristicTable, Point};
use crate::problem::{PathProblem, Problem, StateSpace};

/// A-B (5), A-C (10), B-C (3), undirected.
pub(crate) fn triangle(start: &str, goal: &str) -> PathProblem {
    let graph = Graph::undirected(vec![
        GraphRecord::new("A").with_edge("B", 5.0).with_edge("C", 10.0),
        GraphRecord::new("B").with_edge("C", 3.0),
    ])
    .unwrap();
    PathProblem::new(graph, start, goal).unwrap()
}

/// Six-location road map. Cheapest S -> G route is S, A, C, G (8).
pub(crate) fn road(start: &str, goal: &str) -> PathProblem {
    let graph = Graph::undirected(vec![
        GraphRecord::new("S").with_edge("A", 2.0).with_edge("B", 3.0),
        GraphRecord::new("A").with_edge("C", 3.0).with_edge("D", 5.0),
        GraphRecord::new("B").with_edge("D", 4.0),
        GraphRecord::new("C").with_edge("G", 3.0).with_edge("D", 6.0),
        GraphRecord::new("D").with_edge("G", 4.0),
    ])
    .unwrap();
    PathProblem::new(graph, start, goal).unwrap()
}

/// Coordinates for [`road`]. Every edge is at least as long as the
/// straight line between its ends.
pub(crate) fn road_heuristic() -> HeuristicTable<String> {
    [
        ("S", 0.0, 0.0),
        ("A", 2.0, 0.0),
        ("B", 0.0, 3.0),
        ("C", 4.0, 1.0),
        ("D", 3.0, 4.0),
        ("G", 6.0, 3.0),
    ]
    .into_iter()
    .map(|(id, x, y)| (id.to_string(), Point::new(x, y)))
    .collect()
}

/// `n x n` 4-connected grid with unit weights. Ids are `"x,y"`.
pub(crate) fn grid_graph(n: usize, start: &str, goal: &str) -> PathProblem {
    let mut records = Vec::with_capacity(n * n);
    for x in 0..n {
        for y in 0..n {
            let mut record = GraphRecord::new(format!("{x},{y}"));
            if x + 1 < n {
                record = record.with_edge(format!("{},{y}", x + 1), 1.0);
            }
            if y + 1 < n {
                record = record.with_edge(format!("{x},{}", y + 1), 1.0);
            }
            records.push(record);
        }
    }
    let graph = Graph::undirected(records).unwrap();
    PathProblem::new(graph, start, goal).unwrap()
}

/// Cost of `outcome` recomputed step by step with `problem.path_cost`.
pub(crate) fn replay_cost<P: Problem>(problem: &P, outcome: &Outcome<P>) -> f64 {
    outcome
        .actions
        .iter()
        .enumerate()
        .fold(0.0, |cost, (i, action)| {
            problem.path_cost(cost, &outcome.path[i], action, &outcome.path[i + 1])
        })
}

/// Cheapest simple path to the goal by exhaustive enumeration.
pub(crate) fn brute_force_cost(problem: &PathProblem) -> Option<f64> {
    fn walk(problem: &PathProblem, state: &String, cost: f64, visited: &mut Vec<String>) -> Option<f64> {
        if problem.goal_test(state) {
            return Some(cost);
        }
        let mut best: Option<f64> = None;
        for action in problem.actions(state) {
            let next = problem.result(state, &action);
            if visited.contains(&next) {
                continue;
            }
            let step = problem.path_cost(cost, state, &action, &next);
            visited.push(next.clone());
            if let Some(found) = walk(problem, &next, step, visited) {
                best = Some(best.map_or(found, |b| b.min(found)));
            }
            visited.pop();
        }
        best
    }

    let start = problem.initial().clone();
    let mut visited = vec![start.clone()];
    walk(problem, &start, 0.0, &mut visited)
}

/// A small connected graph whose nodes sit on integer coordinates.
///
/// Every edge weighs at least one plus the Euclidean length between its
/// ends, so the straight-line table is a consistent heuristic.
#[derive(Debug, Clone)]
pub(crate) struct GeoGraph {
    graph: Graph,
    points: Vec<Point>,
}

impl GeoGraph {
    fn build(coords: Vec<(i32, i32)>, chain: Vec<u8>, extra: Vec<(usize, usize, u8)>) -> Self {
        let points: Vec<Point> = coords
            .into_iter()
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
            .collect();
        let weight = |i: usize, j: usize, bump: u8| {
            points[i].distance(&points[j]) + 1.0 + f64::from(bump)
        };

        let mut edges: BTreeMap<(usize, usize), f64> = BTreeMap::new();
        for (i, &bump) in chain.iter().enumerate() {
            edges.insert((i, i + 1), weight(i, i + 1, bump));
        }
        for (a, b, bump) in extra {
            if a == b {
                continue;
            }
            let key = (a.min(b), a.max(b));
            edges.entry(key).or_insert_with(|| weight(key.0, key.1, bump));
        }

        let mut records: Vec<GraphRecord> =
            (0..points.len()).map(|i| GraphRecord::new(id(i))).collect();
        for (&(i, j), &w) in &edges {
            records[i].neighbors.push(crate::graph::Edge::new(id(j), w));
        }
        let graph = Graph::undirected(records).unwrap();
        Self { graph, points }
    }

    /// Route from the first node to the last.
    pub(crate) fn problem(&self) -> PathProblem {
        PathProblem::new(self.graph.clone(), id(0), self.goal()).unwrap()
    }

    pub(crate) fn goal(&self) -> String {
        id(self.points.len() - 1)
    }

    pub(crate) fn heuristic(&self) -> HeuristicTable<String> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| (id(i), p))
            .collect()
    }
}

fn id(i: usize) -> String {
    format!("n{i}")
}

pub(crate) fn geometric_graph() -> impl Strategy<Value = GeoGraph> {
    (3usize..=6)
        .prop_flat_map(|n| {
            (
                prop::collection::vec((0i32..10, 0i32..10), n),
                prop::collection::vec(0u8..5, n - 1),
                prop::collection::vec((0..n, 0..n, 0u8..5), 0..8),
            )
        })
        .prop_map(|(coords, chain, extra)| GeoGraph::build(coords, chain, extra))
}
