//! Error types for search construction and execution.
//!
//! Exhausting the frontier or the depth limits is not an error: it is
//! reported as [`crate::search::SearchStatus::NotFound`] inside a
//! successful result. `SearchError` covers malformed inputs only.

use thiserror::Error;

/// Errors that can occur while building problems or running searches.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input graph violates an edge-weight or identifier constraint.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// A start or goal state does not exist in the state space.
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// A state has no entry in the heuristic table.
    #[error("Heuristic lookup failed: no coordinate for {0}")]
    HeuristicLookup(String),
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
