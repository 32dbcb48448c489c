//! Search-tree storage: the node arena and the frontier.

mod frontier;
mod node;

pub use frontier::{Frontier, FrontierOrder};
pub use node::{Node, NodeId, SearchTree};
