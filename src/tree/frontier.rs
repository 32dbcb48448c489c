//! Ordered frontier of nodes awaiting expansion.
//!
//! Entries live in a `VecDeque` kept stably sorted by priority, so equal
//! priorities pop in insertion order. Lookup and replacement are linear.

use std::collections::VecDeque;

use super::node::NodeId;

/// How the frontier orders its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierOrder {
    /// First in, first out.
    Fifo,
    /// Re-sorted ascending by priority after every insertion (stable).
    Ascending,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: NodeId,
    priority: f64,
}

/// Frontier of node ids with optional priority ordering.
///
/// The frontier does not prevent duplicate states; the search loop checks
/// membership with [`Frontier::find`] before pushing.
#[derive(Debug, Clone)]
pub struct Frontier {
    entries: VecDeque<Entry>,
    order: FrontierOrder,
}

impl Frontier {
    /// Creates an empty frontier with the given ordering.
    pub fn new(order: FrontierOrder) -> Self {
        Self {
            entries: VecDeque::new(),
            order,
        }
    }

    /// A plain FIFO queue.
    pub fn fifo() -> Self {
        Self::new(FrontierOrder::Fifo)
    }

    /// A priority queue popping the lowest priority first.
    pub fn ascending() -> Self {
        Self::new(FrontierOrder::Ascending)
    }

    /// Appends a node. `priority` is ignored by FIFO frontiers.
    pub fn push(&mut self, id: NodeId, priority: f64) {
        self.entries.push_back(Entry { id, priority });
        self.resort();
    }

    /// Removes and returns the front node.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop_front().map(|e| e.id)
    }

    /// First node, in frontier order, matching `predicate`.
    pub fn find<F>(&self, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(NodeId) -> bool,
    {
        self.entries.iter().map(|e| e.id).find(|&id| predicate(id))
    }

    /// Puts `new` where `old` sits; returns `false` if `old` is not queued.
    ///
    /// A prioritised frontier is re-sorted afterwards, so a cheaper
    /// replacement moves ahead of costlier entries but stays behind
    /// entries of equal priority.
    pub fn replace(&mut self, old: NodeId, new: NodeId, priority: f64) -> bool {
        let Some(slot) = self.entries.iter_mut().find(|e| e.id == old) else {
            return false;
        };
        *slot = Entry { id: new, priority };
        self.resort();
        true
    }

    fn resort(&mut self) {
        if self.order == FrontierOrder::Ascending {
            self.entries
                .make_contiguous()
                .sort_by(|a, b| a.priority.total_cmp(&b.priority));
        }
    }

    /// Ids in the current order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
