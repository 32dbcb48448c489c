//! Simulated annealing for local value maximisation.
//!
//! A single-state random walk over a [`crate::problem::LocalProblem`].
//! Each step picks a legal action uniformly at random and moves if the
//! value improves, or otherwise with probability `exp(delta / T)`. The
//! temperature `T` follows [`ExpSchedule`] and the run stops when it
//! reaches zero or no action is legal. The result is the final state, not
//! the best state seen.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::AnnealingConfig;
pub use runner::AnnealingRunner;
pub use types::{AnnealingResult, ExpSchedule};
