//! Straight-line distance heuristics for informed search.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{SearchError, SearchResult};
use crate::problem::Problem;

/// A 2D coordinate attached to a state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Estimates the remaining cost from a state to the goal.
///
/// For A* and RBFS to stay optimal the estimate must be admissible:
/// it never exceeds the true remaining cost.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> SearchResult<f64>;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn estimate(&self, state: &S) -> SearchResult<f64> {
        Ok(self(state))
    }
}

/// Coordinates for each state, used as a Euclidean heuristic.
///
/// A missing coordinate is an error, never a silent zero: a zero for one
/// state would hide a broken table behind a still-admissible estimate.
#[derive(Debug, Clone)]
pub struct HeuristicTable<S> {
    coordinates: HashMap<S, Point>,
}

impl<S> HeuristicTable<S>
where
    S: Eq + Hash + Clone + Debug,
{
    pub fn new(coordinates: HashMap<S, Point>) -> Self {
        Self { coordinates }
    }

    /// Coordinate of `state`.
    pub fn locate(&self, state: &S) -> SearchResult<Point> {
        self.coordinates
            .get(state)
            .copied()
            .ok_or_else(|| SearchError::HeuristicLookup(format!("{state:?}")))
    }

    /// Binds the table to a goal, yielding a usable [`Heuristic`].
    ///
    /// Fails if the goal itself has no coordinate.
    pub fn towards(&self, goal: &S) -> SearchResult<StraightLine<'_, S>> {
        let goal = self.locate(goal)?;
        Ok(StraightLine { table: self, goal })
    }

    /// Binds the table to the fixed goal of `problem`.
    ///
    /// Fails with [`SearchError::InvalidConfig`] when the problem has no
    /// fixed goal, and with [`SearchError::HeuristicLookup`] when the goal
    /// has no coordinate.
    pub fn towards_goal_of<P>(&self, problem: &P) -> SearchResult<StraightLine<'_, S>>
    where
        P: Problem<State = S>,
    {
        let goal = problem.goal().ok_or_else(|| {
            SearchError::InvalidConfig("straight-line heuristic needs a fixed goal state".into())
        })?;
        self.towards(goal)
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl<S> FromIterator<(S, Point)> for HeuristicTable<S>
where
    S: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (S, Point)>>(iter: I) -> Self {
        Self {
            coordinates: iter.into_iter().collect(),
        }
    }
}

/// Straight-line distance from a state to a fixed goal coordinate.
#[derive(Debug, Clone)]
pub struct StraightLine<'a, S> {
    table: &'a HeuristicTable<S>,
    goal: Point,
}

impl<S> Heuristic<S> for StraightLine<'_, S>
where
    S: Eq + Hash + Clone + Debug,
{
    fn estimate(&self, state: &S) -> SearchResult<f64> {
        Ok(self.table.locate(state)?.distance(&self.goal))
    }
}
