//! Search outcome types.

use std::fmt;

use crate::tree::{NodeId, SearchTree};

/// The search algorithms this crate runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BreadthFirst,
    UniformCost,
    DepthFirst,
    IterativeDeepening,
    AStar,
    RecursiveBestFirst,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Algorithm::BreadthFirst => "Breadth First Search",
            Algorithm::UniformCost => "Uniform Cost Search",
            Algorithm::DepthFirst => "Depth First Search",
            Algorithm::IterativeDeepening => "Iterative Deepening Depth First Search",
            Algorithm::AStar => "A-star Search",
            Algorithm::RecursiveBestFirst => "Recursive Best First Search",
        };
        f.write_str(label)
    }
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// A goal state was reached.
    Found,
    /// The frontier or the depth limits were exhausted without a goal.
    NotFound,
    /// `max_iterations` stopped the run before it could finish.
    IterationLimit,
}

/// Result of a search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome<S, A> {
    /// Which algorithm produced this outcome.
    pub algorithm: Algorithm,

    pub status: SearchStatus,

    /// States from the start to the goal, both included. Empty unless found.
    pub path: Vec<S>,

    /// Actions from the start to the goal. Empty unless found.
    pub actions: Vec<A>,

    /// Accumulated path cost of the goal node (0 unless found).
    pub total_cost: f64,

    /// Loop iterations: dequeues for best-first search, recursive calls for
    /// depth-limited and recursive best-first search.
    pub iterations: usize,
}

impl<S: Clone, A: Clone> SearchOutcome<S, A> {
    pub(crate) fn found(
        algorithm: Algorithm,
        tree: &SearchTree<S, A>,
        goal: NodeId,
        iterations: usize,
    ) -> Self {
        Self {
            algorithm,
            status: SearchStatus::Found,
            path: tree.path(goal),
            actions: tree.solution(goal),
            total_cost: tree[goal].path_cost(),
            iterations,
        }
    }

    pub(crate) fn unsolved(algorithm: Algorithm, status: SearchStatus, iterations: usize) -> Self {
        Self {
            algorithm,
            status,
            path: Vec::new(),
            actions: Vec::new(),
            total_cost: 0.0,
            iterations,
        }
    }
}

impl<S, A> SearchOutcome<S, A> {
    /// Whether a goal was reached.
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Number of actions in the solution.
    pub fn depth(&self) -> usize {
        self.actions.len()
    }
}
