//! Weighted location graphs consumed by path-finding.
//!
//! Input is a directed adjacency list of [`GraphRecord`]s. Path costs are
//! read from the edge being traversed, so graphs explored in both
//! directions should be built with [`Graph::undirected`], which mirrors
//! every declared edge with the same weight.

mod adjacency;
mod types;

pub use adjacency::Graph;
pub use types::{Edge, GraphRecord};
