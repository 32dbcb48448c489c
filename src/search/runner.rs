//! Search execution: best-first graph search and the public entry points.
//!
//! # Algorithm (best-first graph search)
//!
//! 1. Seed the frontier with the root
//! 2. Pop the front node and mark its state explored
//! 3. Stop if it passes the goal test
//! 4. Otherwise expand it. For each child:
//!    a. state neither explored nor queued: push it
//!    b. state queued with a higher evaluation (prioritised frontiers only):
//!       replace the queued node with the child
//!    c. otherwise discard it
//! 5. An empty frontier means no solution
//!
//! Breadth-first, uniform-cost and A* differ only in the frontier order and
//! the evaluation function.

use std::collections::HashSet;

use log::{debug, info, warn};

use super::config::SearchConfig;
use super::depth;
use super::rbfs;
use super::types::{Algorithm, SearchOutcome, SearchStatus};
use crate::error::SearchResult;
use crate::heuristic::Heuristic;
use crate::problem::{Problem, StateSpace};
use crate::tree::{Frontier, FrontierOrder, Node, SearchTree};

/// Outcome type produced for problem `P`.
pub type Outcome<P> = SearchOutcome<<P as StateSpace>::State, <P as StateSpace>::Action>;

/// Executes the search algorithms.
pub struct SearchRunner;

impl SearchRunner {
    /// Breadth-first search: FIFO frontier, shallowest node first.
    ///
    /// Complete, and optimal when every step costs the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::graph::{Graph, GraphRecord};
    /// use u_search::problem::PathProblem;
    /// use u_search::search::{SearchConfig, SearchRunner};
    ///
    /// let graph = Graph::undirected(vec![
    ///     GraphRecord::new("A").with_edge("B", 5.0).with_edge("C", 10.0),
    ///     GraphRecord::new("B").with_edge("C", 3.0),
    /// ])?;
    /// let problem = PathProblem::new(graph, "A", "C")?;
    /// let outcome = SearchRunner::breadth_first(&problem, &SearchConfig::default())?;
    /// assert_eq!(outcome.path, vec!["A", "C"]);
    /// # Ok::<(), u_search::SearchError>(())
    /// ```
    pub fn breadth_first<P: Problem>(
        problem: &P,
        config: &SearchConfig,
    ) -> SearchResult<Outcome<P>> {
        Self::best_first_graph_search(
            problem,
            FrontierOrder::Fifo,
            |n| Ok(n.path_cost()),
            Algorithm::BreadthFirst,
            config,
        )
    }

    /// Uniform-cost search: frontier ordered by path cost.
    ///
    /// Optimal for any non-negative step costs.
    pub fn uniform_cost<P: Problem>(
        problem: &P,
        config: &SearchConfig,
    ) -> SearchResult<Outcome<P>> {
        Self::best_first_graph_search(
            problem,
            FrontierOrder::Ascending,
            |n| Ok(n.path_cost()),
            Algorithm::UniformCost,
            config,
        )
    }

    /// A* search: frontier ordered by `path_cost + heuristic`.
    ///
    /// Optimal when the heuristic is consistent. Heuristic lookup errors
    /// abort the search.
    pub fn astar<P, H>(problem: &P, heuristic: &H, config: &SearchConfig) -> SearchResult<Outcome<P>>
    where
        P: Problem,
        H: Heuristic<P::State>,
    {
        Self::best_first_graph_search(
            problem,
            FrontierOrder::Ascending,
            |n| Ok(n.path_cost() + heuristic.estimate(n.state())?),
            Algorithm::AStar,
            config,
        )
    }

    /// Depth-limited depth-first search with `config.depth_limit`.
    pub fn depth_first<P: Problem>(
        problem: &P,
        config: &SearchConfig,
    ) -> SearchResult<Outcome<P>> {
        config.validate()?;
        Ok(depth::depth_first(problem, config))
    }

    /// Iterative deepening: depth-limited search with limits
    /// `1..=config.max_iterative_limit`, each with a fresh explored set.
    pub fn iterative_deepening<P: Problem>(
        problem: &P,
        config: &SearchConfig,
    ) -> SearchResult<Outcome<P>> {
        config.validate()?;
        Ok(depth::iterative_deepening(problem, config))
    }

    /// Recursive best-first search, linear in memory.
    ///
    /// Returns the same cost as A* when the heuristic is admissible.
    pub fn recursive_best_first<P, H>(
        problem: &P,
        heuristic: &H,
        config: &SearchConfig,
    ) -> SearchResult<Outcome<P>>
    where
        P: Problem,
        H: Heuristic<P::State>,
    {
        config.validate()?;
        rbfs::recursive_best_first(problem, heuristic, config)
    }

    /// Generic best-first graph search.
    ///
    /// `evaluate` gives the frontier priority of a node and decides
    /// replacements: a queued node is swapped for a newly generated node
    /// with the same state when the newcomer evaluates strictly lower. FIFO
    /// frontiers never replace.
    pub fn best_first_graph_search<P, F>(
        problem: &P,
        order: FrontierOrder,
        mut evaluate: F,
        algorithm: Algorithm,
        config: &SearchConfig,
    ) -> SearchResult<Outcome<P>>
    where
        P: Problem,
        F: FnMut(&Node<P::State, P::Action>) -> SearchResult<f64>,
    {
        config.validate()?;

        let mut tree = SearchTree::new(problem.initial().clone());
        let mut frontier = Frontier::new(order);
        let root = tree.root();
        frontier.push(root, evaluate(&tree[root])?);

        let mut explored: HashSet<P::State> = HashSet::new();
        let mut iterations = 0usize;

        loop {
            if config.exhausted(iterations) {
                warn!("{algorithm}: iteration limit reached after {iterations} iterations");
                return Ok(SearchOutcome::unsolved(
                    algorithm,
                    SearchStatus::IterationLimit,
                    iterations,
                ));
            }
            let Some(id) = frontier.pop() else {
                break;
            };
            iterations += 1;

            let state = tree[id].state().clone();
            debug!("visit node {state:?}");
            if problem.goal_test(&state) {
                let outcome = SearchOutcome::found(algorithm, &tree, id, iterations);
                info!(
                    "goal reached {state:?} at depth {} using {algorithm} in {iterations} iterations, total cost {}",
                    outcome.depth(),
                    outcome.total_cost
                );
                return Ok(outcome);
            }
            explored.insert(state);

            let children = tree.expand(problem, id);
            debug!(
                "not a goal, expanding into {:?}",
                children.iter().map(|&c| tree[c].state()).collect::<Vec<_>>()
            );

            for child in children {
                let child_state = tree[child].state();
                if explored.contains(child_state) {
                    debug!("discard {child_state:?}, already explored");
                    continue;
                }
                let queued = frontier.find(|n| tree[n].state() == child_state);
                match queued {
                    None => {
                        debug!("enqueue {child_state:?}");
                        frontier.push(child, evaluate(&tree[child])?);
                    }
                    Some(existing) if order == FrontierOrder::Ascending => {
                        let old = evaluate(&tree[existing])?;
                        let new = evaluate(&tree[child])?;
                        if old > new {
                            debug!(
                                "replace {child_state:?} in frontier, path cost {} -> {}",
                                tree[existing].path_cost(),
                                tree[child].path_cost()
                            );
                            frontier.replace(existing, child, new);
                        } else {
                            debug!("discard {child_state:?}, no cheaper than the queued node");
                        }
                    }
                    Some(_) => {
                        debug!("discard {child_state:?}, already queued");
                    }
                }
            }
        }

        warn!("{algorithm}: solution not found after {iterations} iterations");
        Ok(SearchOutcome::unsolved(
            algorithm,
            SearchStatus::NotFound,
            iterations,
        ))
    }
}
