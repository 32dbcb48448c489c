//! Core traits shared by every problem.

use std::fmt::Debug;
use std::hash::Hash;

/// A state space: where to start, which actions apply, and where they lead.
///
/// States are plain values compared structurally. Two nodes holding equal
/// states count as the same state for duplicate detection, whatever path
/// produced them.
pub trait StateSpace {
    /// The state representation type.
    type State: Clone + Eq + Hash + Debug;

    /// The action representation type.
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn initial(&self) -> &Self::State;

    /// Legal actions in `state`. An empty vector marks a dead end.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Deterministic transition model.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

/// A goal-directed problem solvable by [`crate::search::SearchRunner`].
///
/// # Examples
///
/// ```
/// use u_search::problem::{Problem, StateSpace};
///
/// /// Count from 0 up to a target, one or two at a time.
/// struct Counter { start: u32, target: u32 }
///
/// impl StateSpace for Counter {
///     type State = u32;
///     type Action = u32;
///     fn initial(&self) -> &u32 { &self.start }
///     fn actions(&self, s: &u32) -> Vec<u32> {
///         [1, 2].into_iter().filter(|step| s + step <= self.target).collect()
///     }
///     fn result(&self, s: &u32, step: &u32) -> u32 { s + step }
/// }
///
/// impl Problem for Counter {
///     fn goal_test(&self, s: &u32) -> bool { *s == self.target }
///     fn path_cost(&self, c: f64, _: &u32, _: &u32, _: &u32) -> f64 { c + 1.0 }
/// }
/// ```
pub trait Problem: StateSpace {
    /// The fixed goal state, when there is one.
    ///
    /// `None` when the goal is recognised by [`Problem::goal_test`] alone
    /// (e.g. N-Queens). [`crate::heuristic::HeuristicTable::towards_goal_of`]
    /// binds a straight-line heuristic to this goal and needs `Some`.
    fn goal(&self) -> Option<&Self::State> {
        None
    }

    fn goal_test(&self, state: &Self::State) -> bool;

    /// Cost of reaching `to` from `from` via `action`, given the cost `cost`
    /// accumulated so far.
    ///
    /// Must be non-decreasing in `cost` for the cost-optimal algorithms to
    /// return optimal paths.
    fn path_cost(
        &self,
        cost: f64,
        from: &Self::State,
        action: &Self::Action,
        to: &Self::State,
    ) -> f64;
}

/// A value-maximisation problem for local search.
///
/// Local problems have no goal test; they are explored by
/// [`crate::sa::AnnealingRunner`] only.
pub trait LocalProblem: StateSpace {
    /// Objective value of a state. Higher is better.
    fn value(&self, state: &Self::State) -> f64;
}
