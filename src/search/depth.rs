//! Depth-limited recursion for depth-first and iterative-deepening search.
//!
//! The explored set is shared by the whole depth-limited call: a state
//! first reached down one branch is skipped when a sibling branch reaches
//! it again. Each iterative-deepening attempt starts from an empty set.

use std::collections::HashSet;

use log::{debug, info, warn};

use super::config::SearchConfig;
use super::runner::Outcome;
use super::types::{Algorithm, SearchOutcome, SearchStatus};
use crate::problem::Problem;
use crate::tree::{NodeId, SearchTree};

/// Result of one depth-limited attempt.
///
/// `Cutoff` and `Failure` both mean "no goal found", but only `Failure`
/// proves the reachable space holds none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dls {
    Found(NodeId),
    Cutoff,
    Failure,
    Aborted,
}

struct DepthLimited<'a, P: Problem> {
    problem: &'a P,
    config: &'a SearchConfig,
    tree: SearchTree<P::State, P::Action>,
    explored: HashSet<P::State>,
    limit: usize,
    calls: usize,
}

impl<'a, P: Problem> DepthLimited<'a, P> {
    fn new(problem: &'a P, config: &'a SearchConfig, limit: usize, calls: usize) -> Self {
        Self {
            problem,
            config,
            tree: SearchTree::new(problem.initial().clone()),
            explored: HashSet::new(),
            limit,
            calls,
        }
    }

    fn run(&mut self) -> Dls {
        let root = self.tree.root();
        self.recurse(1, root)
    }

    fn recurse(&mut self, depth: usize, id: NodeId) -> Dls {
        if self.config.exhausted(self.calls) {
            return Dls::Aborted;
        }
        self.calls += 1;

        let state = self.tree[id].state().clone();
        debug!("visit node {state:?} at depth {depth}");
        if self.problem.goal_test(&state) {
            return Dls::Found(id);
        }
        self.explored.insert(state);
        if depth >= self.limit {
            debug!("depth limit {} reached", self.limit);
            return Dls::Cutoff;
        }

        let children = self.tree.expand(self.problem, id);
        let mut cutoff = false;
        for child in children {
            if self.explored.contains(self.tree[child].state()) {
                continue;
            }
            match self.recurse(depth + 1, child) {
                Dls::Failure => {}
                Dls::Cutoff => cutoff = true,
                done @ (Dls::Found(_) | Dls::Aborted) => return done,
            }
        }
        debug!("back to depth {}", depth.saturating_sub(1));
        if cutoff {
            Dls::Cutoff
        } else {
            Dls::Failure
        }
    }

    fn outcome(&self, algorithm: Algorithm, result: Dls) -> Outcome<P> {
        match result {
            Dls::Found(goal) => {
                let outcome = SearchOutcome::found(algorithm, &self.tree, goal, self.calls);
                info!(
                    "goal reached {:?} at depth {} using {algorithm} (depth limit {}), total cost {}",
                    self.tree[goal].state(),
                    outcome.depth(),
                    self.limit,
                    outcome.total_cost
                );
                outcome
            }
            Dls::Aborted => {
                warn!("{algorithm}: iteration limit reached after {} calls", self.calls);
                SearchOutcome::unsolved(algorithm, SearchStatus::IterationLimit, self.calls)
            }
            Dls::Cutoff | Dls::Failure => {
                warn!("{algorithm}: solution not found");
                SearchOutcome::unsolved(algorithm, SearchStatus::NotFound, self.calls)
            }
        }
    }
}

/// Single depth-limited search bounded by `config.depth_limit`.
pub(super) fn depth_first<P: Problem>(problem: &P, config: &SearchConfig) -> Outcome<P> {
    let mut search = DepthLimited::new(problem, config, config.depth_limit, 0);
    let result = search.run();
    search.outcome(Algorithm::DepthFirst, result)
}

/// Depth-limited search with limits `1..=config.max_iterative_limit`.
///
/// Stops early when an attempt fails without hitting its limit anywhere:
/// the reachable space has then been exhausted.
pub(super) fn iterative_deepening<P: Problem>(problem: &P, config: &SearchConfig) -> Outcome<P> {
    let algorithm = Algorithm::IterativeDeepening;
    let mut calls = 0;
    for limit in 1..=config.max_iterative_limit {
        debug!("start attempt with depth limit {limit}");
        let mut search = DepthLimited::new(problem, config, limit, calls);
        let result = search.run();
        calls = search.calls;
        match result {
            Dls::Cutoff => debug!("limit increasing"),
            Dls::Failure => {
                debug!("search space exhausted at depth limit {limit}");
                return search.outcome(algorithm, result);
            }
            Dls::Found(_) | Dls::Aborted => return search.outcome(algorithm, result),
        }
    }
    warn!("{algorithm}: solution not found within depth limit {}", config.max_iterative_limit);
    SearchOutcome::unsolved(algorithm, SearchStatus::NotFound, calls)
}
