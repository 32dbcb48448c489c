//! Shortest-route search over a weighted location graph.

use super::types::{Problem, StateSpace};
use crate::error::{SearchError, SearchResult};
use crate::graph::{Edge, Graph};

/// Find a route from a start location to a goal location.
///
/// The action from a location is one of its outgoing edges; taking it
/// lands on the edge's target. The step cost is the weight of the edge
/// taken, so the graph should be built with [`Graph::undirected`] when
/// routes may traverse edges in either direction.
#[derive(Debug, Clone)]
pub struct PathProblem {
    graph: Graph,
    initial: String,
    goal: String,
}

impl PathProblem {
    /// Creates the problem, checking that both endpoints exist.
    pub fn new(
        graph: Graph,
        start: impl Into<String>,
        goal: impl Into<String>,
    ) -> SearchResult<Self> {
        let initial = start.into();
        let goal = goal.into();
        for id in [&initial, &goal] {
            if !graph.contains(id) {
                return Err(SearchError::UnknownState(id.clone()));
            }
        }
        Ok(Self {
            graph,
            initial,
            goal,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl StateSpace for PathProblem {
    type State = String;
    type Action = Edge;

    fn initial(&self) -> &String {
        &self.initial
    }

    fn actions(&self, state: &String) -> Vec<Edge> {
        self.graph
            .neighbors(state)
            .map(<[Edge]>::to_vec)
            .unwrap_or_default()
    }

    fn result(&self, _state: &String, action: &Edge) -> String {
        action.id.clone()
    }
}

impl Problem for PathProblem {
    fn goal(&self) -> Option<&String> {
        Some(&self.goal)
    }

    fn goal_test(&self, state: &String) -> bool {
        *state == self.goal
    }

    fn path_cost(&self, cost: f64, _from: &String, action: &Edge, _to: &String) -> f64 {
        cost + action.weight
    }
}
