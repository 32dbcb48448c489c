//! Domain-agnostic state-space search framework.
//!
//! Provides generic implementations of classic search algorithms over a
//! user-defined problem:
//!
//! - **Uninformed search**: breadth-first, uniform-cost, depth-limited
//!   depth-first and iterative-deepening search.
//! - **Informed search**: A* and recursive best-first search (RBFS) guided
//!   by a pluggable [`heuristic::Heuristic`].
//! - **Simulated Annealing (SA)**: local value maximisation with an
//!   exponential temperature schedule.
//!
//! Bundled problems cover shortest routes over weighted graphs, N-Queens
//! and peak-finding on a 2D grid.
//!
//! # Architecture
//!
//! - [`problem`]: the problem traits and bundled problems
//! - [`tree`]: node arena and frontier shared by the goal-directed searches
//! - [`search`]: goal-directed runners and their outcome types
//! - [`sa`]: the annealing runner, which needs no tree or frontier
//! - [`graph`] and [`heuristic`]: inputs for route finding
//!
//! Logging goes through the `log` facade; install any logger to see
//! per-node traces (`debug`), solutions (`info`) and failures (`warn`).

pub mod error;
pub mod graph;
pub mod heuristic;
pub mod problem;
pub mod sa;
pub mod search;
pub mod tree;

pub use error::{SearchError, SearchResult};
