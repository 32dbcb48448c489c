//! Search-tree nodes stored in an index arena.

use std::ops::Index;

use crate::problem::Problem;

/// Index of a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One element of the search tree.
///
/// Everything except `f` is fixed at construction. `f` is scratch space for
/// recursive best-first search and stays `0.0` elsewhere.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    state: S,
    action: Option<A>,
    parent: Option<NodeId>,
    path_cost: f64,
    depth: usize,
    f: f64,
}

impl<S, A> Node<S, A> {
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The action that produced this node; `None` for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Accumulated cost from the root.
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Number of actions from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn f(&self) -> f64 {
        self.f
    }
}

/// Arena of search nodes linked by parent index.
///
/// Many nodes may hold equal states: the tree never merges them. Parents
/// are referenced by [`NodeId`], so ancestry is shared without ownership
/// cycles and a path is recovered by walking indices.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S: Clone, A: Clone> SearchTree<S, A> {
    /// Creates a tree holding only the root.
    pub fn new(initial: S) -> Self {
        Self {
            nodes: vec![Node {
                state: initial,
                action: None,
                parent: None,
                path_cost: 0.0,
                depth: 0,
                f: 0.0,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    /// Builds the child reached from `parent` via `action` and returns its id.
    pub fn child<P>(&mut self, problem: &P, parent: NodeId, action: A) -> NodeId
    where
        P: Problem<State = S, Action = A>,
    {
        let node = &self.nodes[parent.0];
        let state = problem.result(&node.state, &action);
        let path_cost = problem.path_cost(node.path_cost, &node.state, &action, &state);
        let depth = node.depth + 1;
        self.nodes.push(Node {
            state,
            action: Some(action),
            parent: Some(parent),
            path_cost,
            depth,
            f: 0.0,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Generates one child per legal action of `id`'s state, in action order.
    pub fn expand<P>(&mut self, problem: &P, id: NodeId) -> Vec<NodeId>
    where
        P: Problem<State = S, Action = A>,
    {
        let actions = problem.actions(&self.nodes[id.0].state);
        actions
            .into_iter()
            .map(|action| self.child(problem, id, action))
            .collect()
    }

    /// Ids from the root down to `id`, inclusive.
    pub fn lineage(&self, id: NodeId) -> Vec<NodeId> {
        let mut back = Vec::with_capacity(self.nodes[id.0].depth + 1);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            back.push(current);
            cursor = self.nodes[current.0].parent;
        }
        back.reverse();
        back
    }

    /// Actions leading from the root to `id`, in execution order.
    pub fn solution(&self, id: NodeId) -> Vec<A> {
        self.lineage(id)
            .into_iter()
            .filter_map(|n| self.nodes[n.0].action.clone())
            .collect()
    }

    /// States visited from the root to `id`, both ends included.
    pub fn path(&self, id: NodeId) -> Vec<S> {
        self.lineage(id)
            .into_iter()
            .map(|n| self.nodes[n.0].state.clone())
            .collect()
    }

    /// Overwrites the f-value scratch field.
    pub(crate) fn set_f(&mut self, id: NodeId, f: f64) {
        self.nodes[id.0].f = f;
    }

    /// Drops every node created after the first `len`.
    ///
    /// Ids at or beyond `len` become invalid.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len.max(1));
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, A> Index<NodeId> for SearchTree<S, A> {
    type Output = Node<S, A>;

    fn index(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }
}
