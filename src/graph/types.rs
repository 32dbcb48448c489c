//! Adjacency-list input records.

/// A weighted edge to a neighbouring location.
///
/// In path-finding this doubles as the action: moving along the edge
/// lands on `id`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Identifier of the neighbouring location.
    pub id: String,
    /// Non-negative edge weight.
    pub weight: f64,
}

impl Edge {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// One location and its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphRecord {
    /// Location identifier.
    pub id: String,
    /// Outgoing edges, in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub neighbors: Vec<Edge>,
}

impl GraphRecord {
    /// Creates a record with no outgoing edges.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            neighbors: Vec::new(),
        }
    }

    /// Appends an outgoing edge.
    pub fn with_edge(mut self, to: impl Into<String>, weight: f64) -> Self {
        self.neighbors.push(Edge::new(to, weight));
        self
    }
}
