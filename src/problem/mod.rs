//! Problem definitions.
//!
//! A problem supplies a start state, the legal actions in each state and
//! the transition model ([`StateSpace`]). Goal-directed problems add a goal
//! test and step costs ([`Problem`]); local-search problems add an
//! objective value instead ([`LocalProblem`]).
//!
//! Bundled problems:
//!
//! - [`PathProblem`]: cheapest route between two locations of a [`crate::graph::Graph`]
//! - [`NQueensProblem`]: place `n` non-attacking queens column by column
//! - [`PeakProblem`]: climb to the highest cell of a 2D grid (local search only)

mod nqueens;
mod path;
mod peak;
mod types;

pub use nqueens::{Board, NQueensProblem};
pub use path::PathProblem;
pub use peak::{Compass, GridPoint, PeakProblem};
pub use types::{LocalProblem, Problem, StateSpace};
