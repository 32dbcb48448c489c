//! Goal-directed state-space search.
//!
//! All algorithms run against a [`crate::problem::Problem`] and return a
//! [`SearchOutcome`]. Failing to reach a goal is a normal outcome
//! ([`SearchStatus::NotFound`]), not an error.
//!
//! | Algorithm | Frontier | Optimal |
//! |-----------|----------|---------|
//! | Breadth-first | FIFO | unit step costs |
//! | Uniform-cost | path cost | yes |
//! | A* | path cost + heuristic | consistent heuristic |
//! | Depth-first | recursion, depth-limited | no |
//! | Iterative deepening | recursion, growing limit | unit step costs |
//! | Recursive best-first | recursion, f-limit | admissible heuristic |
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Korf (1985), "Depth-First Iterative-Deepening: An Optimal Admissible
//!   Tree Search"
//! - Korf (1993), "Linear-Space Best-First Search"

mod config;
mod depth;
mod rbfs;
mod runner;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub use config::SearchConfig;
pub use runner::{Outcome, SearchRunner};
pub use types::{Algorithm, SearchOutcome, SearchStatus};
