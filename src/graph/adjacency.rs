//! Validated adjacency list with optional symmetrization.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::types::{Edge, GraphRecord};
use crate::error::{SearchError, SearchResult};

/// A weighted graph keyed by location identifier.
///
/// Records keep their input order; appended reverse records go last.
#[derive(Debug, Clone)]
pub struct Graph {
    records: Vec<GraphRecord>,
    index: HashMap<String, usize>,
}

impl Graph {
    /// Builds a graph that uses the records exactly as declared.
    pub fn directed(records: Vec<GraphRecord>) -> SearchResult<Self> {
        validate(&records)?;
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Ok(Self { records, index })
    }

    /// Builds a graph where every declared edge `A -> B (w)` is mirrored
    /// by `B -> A (w)`.
    ///
    /// Existing reverse edges are left untouched, so a reverse edge the
    /// input already declares keeps its own weight. Locations that only
    /// appear as neighbours get a record of their own.
    pub fn undirected(records: Vec<GraphRecord>) -> SearchResult<Self> {
        let mut graph = Self::directed(records)?;
        let declared = graph.records.len();
        for i in 0..declared {
            let from = graph.records[i].id.clone();
            let edges = graph.records[i].neighbors.clone();
            for edge in edges {
                graph.connect(&from, &edge);
            }
        }
        Ok(graph)
    }

    fn connect(&mut self, from: &str, edge: &Edge) {
        match self.index.get(&edge.id) {
            Some(&j) => {
                let target = &mut self.records[j];
                if !target.neighbors.iter().any(|e| e.id == from) {
                    debug!("mirror edge {} -> {} ({})", edge.id, from, edge.weight);
                    target.neighbors.push(Edge::new(from, edge.weight));
                }
            }
            None => {
                debug!("add record {} with edge -> {} ({})", edge.id, from, edge.weight);
                self.index.insert(edge.id.clone(), self.records.len());
                self.records
                    .push(GraphRecord::new(edge.id.clone()).with_edge(from, edge.weight));
            }
        }
    }

    /// Whether a location exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Outgoing edges of a location, or `None` if it is unknown.
    pub fn neighbors(&self, id: &str) -> Option<&[Edge]> {
        self.index
            .get(id)
            .map(|&i| self.records[i].neighbors.as_slice())
    }

    /// Weight of the edge `from -> to`, if declared.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)?
            .iter()
            .find(|e| e.id == to)
            .map(|e| e.weight)
    }

    /// All records in graph order.
    pub fn records(&self) -> &[GraphRecord] {
        &self.records
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(records: &[GraphRecord]) -> SearchResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.id.is_empty() {
            return Err(SearchError::InvalidGraph("empty location id".into()));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(SearchError::InvalidGraph(format!(
                "duplicate record for {}",
                record.id
            )));
        }
        for edge in &record.neighbors {
            if edge.id.is_empty() {
                return Err(SearchError::InvalidGraph(format!(
                    "edge from {} has an empty target id",
                    record.id
                )));
            }
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(SearchError::InvalidGraph(format!(
                    "edge {} -> {} has weight {}, expected a finite non-negative value",
                    record.id, edge.id, edge.weight
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<GraphRecord> {
        vec![
            GraphRecord::new("A").with_edge("B", 5.0).with_edge("C", 10.0),
            GraphRecord::new("B").with_edge("C", 3.0),
        ]
    }

    #[test]
    fn test_directed_keeps_input() {
        let g = Graph::directed(triangle()).unwrap();
        assert_eq!(g.len(), 2);
        assert!(!g.contains("C"));
        assert_eq!(g.edge_weight("A", "B"), Some(5.0));
        assert_eq!(g.edge_weight("B", "A"), None);
    }

    #[test]
    fn test_undirected_mirrors_every_edge() {
        let g = Graph::undirected(triangle()).unwrap();
        assert_eq!(g.len(), 3);
        for record in g.records() {
            for edge in &record.neighbors {
                assert_eq!(
                    g.edge_weight(&edge.id, &record.id),
                    Some(edge.weight),
                    "missing reverse of {} -> {}",
                    record.id,
                    edge.id
                );
            }
        }
    }

    #[test]
    fn test_undirected_appends_missing_record_last() {
        let g = Graph::undirected(triangle()).unwrap();
        assert_eq!(g.records()[2].id, "C");
        let c: Vec<&str> = g
            .neighbors("C")
            .unwrap()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(c, vec!["A", "B"]);
    }

    #[test]
    fn test_undirected_keeps_declared_reverse_weight() {
        let records = vec![
            GraphRecord::new("A").with_edge("B", 4.0),
            GraphRecord::new("B").with_edge("A", 7.0),
        ];
        let g = Graph::undirected(records).unwrap();
        assert_eq!(g.edge_weight("A", "B"), Some(4.0));
        assert_eq!(g.edge_weight("B", "A"), Some(7.0));
        assert_eq!(g.neighbors("B").unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let records = vec![GraphRecord::new("A").with_edge("B", -1.0)];
        assert!(matches!(
            Graph::directed(records),
            Err(SearchError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_rejects_nan_weight() {
        let records = vec![GraphRecord::new("A").with_edge("B", f64::NAN)];
        assert!(Graph::undirected(records).is_err());
    }

    #[test]
    fn test_rejects_duplicate_record() {
        let records = vec![GraphRecord::new("A"), GraphRecord::new("A")];
        assert!(matches!(
            Graph::directed(records),
            Err(SearchError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_unknown_location_has_no_neighbors() {
        let g = Graph::undirected(triangle()).unwrap();
        assert!(g.neighbors("Z").is_none());
        assert_eq!(g.edge_weight("Z", "A"), None);
    }
}
