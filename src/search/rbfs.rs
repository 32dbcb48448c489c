//! Recursive best-first search.
//!
//! Each call explores the best successor with an f-limit equal to the
//! f-value of the best alternative path seen so far. When the limit is
//! exceeded the call unwinds and the backed-up f-value replaces the
//! successor's stored one, so the subtree is re-expanded later only if it
//! becomes the best option again.
//!
//! A subtree that fails is dropped from the arena before the next sibling
//! is tried. Live nodes are therefore the successors of the nodes on the
//! current recursion path, linear in the solution depth.
//!
//! There is no explored set. Successors whose state already lies on the
//! path from the root are skipped, so recursion depth is bounded by the
//! number of distinct states and an unreachable goal ends as
//! [`SearchStatus::NotFound`].

use log::{debug, info, warn};

use super::config::SearchConfig;
use super::runner::Outcome;
use super::types::{Algorithm, SearchOutcome, SearchStatus};
use crate::error::SearchResult;
use crate::heuristic::Heuristic;
use crate::problem::Problem;
use crate::tree::{NodeId, SearchTree};

struct Rbfs<'a, P: Problem, H> {
    problem: &'a P,
    heuristic: &'a H,
    config: &'a SearchConfig,
    tree: SearchTree<P::State, P::Action>,
    calls: usize,
    aborted: bool,
}

impl<'a, P, H> Rbfs<'a, P, H>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    fn new(problem: &'a P, heuristic: &'a H, config: &'a SearchConfig) -> SearchResult<Self> {
        let mut tree = SearchTree::new(problem.initial().clone());
        let root = tree.root();
        let h = heuristic.estimate(tree[root].state())?;
        tree.set_f(root, h);
        Ok(Self {
            problem,
            heuristic,
            config,
            tree,
            calls: 0,
            aborted: false,
        })
    }

    /// Returns the goal node if one lies within `f_limit`, and the
    /// backed-up f-value of `id` either way.
    fn recurse(&mut self, id: NodeId, f_limit: f64) -> SearchResult<(Option<NodeId>, f64)> {
        if self.config.exhausted(self.calls) {
            self.aborted = true;
            return Ok((None, f64::INFINITY));
        }
        self.calls += 1;

        let node_f = self.tree[id].f();
        debug!("visit node {:?} with f {node_f}, limit {f_limit}", self.tree[id].state());
        if self.problem.goal_test(self.tree[id].state()) {
            return Ok((Some(id), node_f));
        }

        let on_path: Vec<NodeId> = self.tree.lineage(id);
        let mut successors: Vec<NodeId> = self
            .tree
            .expand(self.problem, id)
            .into_iter()
            .filter(|&s| {
                let state = self.tree[s].state();
                !on_path.iter().any(|&a| self.tree[a].state() == state)
            })
            .collect();
        if successors.is_empty() {
            return Ok((None, f64::INFINITY));
        }
        for &s in &successors {
            let node = &self.tree[s];
            let f = (node.path_cost() + self.heuristic.estimate(node.state())?).max(node_f);
            self.tree.set_f(s, f);
        }

        loop {
            successors.sort_by(|&a, &b| self.tree[a].f().total_cmp(&self.tree[b].f()));
            let best = successors[0];
            let best_f = self.tree[best].f();
            if best_f.is_infinite() || best_f > f_limit {
                return Ok((None, best_f));
            }
            let alternative = successors
                .get(1)
                .map_or(f64::INFINITY, |&s| self.tree[s].f());

            let mark = self.tree.len();
            let (found, f) = self.recurse(best, f_limit.min(alternative))?;
            self.tree.set_f(best, f);
            if found.is_some() || self.aborted {
                return Ok((found, f));
            }
            self.tree.truncate(mark);
        }
    }

    fn outcome(&self, found: Option<NodeId>) -> Outcome<P> {
        let algorithm = Algorithm::RecursiveBestFirst;
        match found {
            Some(goal) => {
                let outcome = SearchOutcome::found(algorithm, &self.tree, goal, self.calls);
                info!(
                    "goal reached {:?} at depth {} using {algorithm} in {} calls, total cost {}",
                    self.tree[goal].state(),
                    outcome.depth(),
                    self.calls,
                    outcome.total_cost
                );
                outcome
            }
            None if self.aborted => {
                warn!("{algorithm}: iteration limit reached after {} calls", self.calls);
                SearchOutcome::unsolved(algorithm, SearchStatus::IterationLimit, self.calls)
            }
            None => {
                warn!("{algorithm}: solution not found");
                SearchOutcome::unsolved(algorithm, SearchStatus::NotFound, self.calls)
            }
        }
    }
}

pub(super) fn recursive_best_first<P, H>(
    problem: &P,
    heuristic: &H,
    config: &SearchConfig,
) -> SearchResult<Outcome<P>>
where
    P: Problem,
    H: Heuristic<P::State>,
{
    let mut search = Rbfs::new(problem, heuristic, config)?;
    let root = search.tree.root();
    let (found, _) = search.recurse(root, f64::INFINITY)?;
    Ok(search.outcome(found))
}
