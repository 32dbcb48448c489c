//! Peak-finding on a bounded 2D grid, for local search only.

use super::types::{LocalProblem, StateSpace};
use crate::error::{SearchError, SearchResult};

/// A cell coordinate: `x` indexes rows, `y` indexes columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// The eight compass moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    W,
    NW,
    N,
    NE,
    E,
    SE,
    S,
    SW,
}

impl Compass {
    /// All directions in the order actions are offered.
    pub const ALL: [Compass; 8] = [
        Compass::W,
        Compass::NW,
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
    ];

    /// `(dx, dy)` offset of this direction.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Compass::W => (-1, 0),
            Compass::NW => (-1, 1),
            Compass::N => (0, 1),
            Compass::NE => (1, 1),
            Compass::E => (1, 0),
            Compass::SE => (1, -1),
            Compass::S => (0, -1),
            Compass::SW => (-1, -1),
        }
    }
}

/// Maximise the cell value by walking a rectangular grid.
///
/// This is a [`LocalProblem`] and deliberately not a
/// [`super::Problem`]: it has no goal test and cannot be handed to the
/// goal-directed search runners.
#[derive(Debug, Clone)]
pub struct PeakProblem {
    area: Vec<Vec<f64>>,
    initial: GridPoint,
    max_x: i64,
    max_y: i64,
}

impl PeakProblem {
    /// Creates the problem over `area[x][y]`, starting at `initial`.
    ///
    /// The grid must be non-empty and rectangular, and `initial` must lie
    /// inside it.
    pub fn new(area: Vec<Vec<f64>>, initial: GridPoint) -> SearchResult<Self> {
        let rows = area.len();
        let cols = area.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(SearchError::InvalidConfig("grid must not be empty".into()));
        }
        if area.iter().any(|row| row.len() != cols) {
            return Err(SearchError::InvalidConfig(
                "grid rows must all have the same length".into(),
            ));
        }
        let max_x = i64::try_from(rows - 1)
            .map_err(|_| SearchError::InvalidConfig("grid too large".into()))?;
        let max_y = i64::try_from(cols - 1)
            .map_err(|_| SearchError::InvalidConfig("grid too large".into()))?;
        let problem = Self {
            area,
            initial,
            max_x,
            max_y,
        };
        if !problem.in_bounds(initial) {
            return Err(SearchError::InvalidConfig(format!(
                "initial position ({}, {}) lies outside the grid",
                initial.x, initial.y
            )));
        }
        Ok(problem)
    }

    fn in_bounds(&self, p: GridPoint) -> bool {
        (0..=self.max_x).contains(&p.x) && (0..=self.max_y).contains(&p.y)
    }
}

impl StateSpace for PeakProblem {
    type State = GridPoint;
    type Action = Compass;

    fn initial(&self) -> &GridPoint {
        &self.initial
    }

    fn actions(&self, state: &GridPoint) -> Vec<Compass> {
        Compass::ALL
            .into_iter()
            .filter(|d| self.in_bounds(self.result(state, d)))
            .collect()
    }

    fn result(&self, state: &GridPoint, action: &Compass) -> GridPoint {
        let (dx, dy) = action.delta();
        GridPoint::new(state.x + dx, state.y + dy)
    }
}

impl LocalProblem for PeakProblem {
    /// Cell value, or negative infinity outside the grid.
    fn value(&self, state: &GridPoint) -> f64 {
        if !self.in_bounds(*state) {
            return f64::NEG_INFINITY;
        }
        // In bounds, so both coordinates are non-negative and fit the grid.
        self.area[state.x as usize][state.y as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hill() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 2.0, 1.0],
            vec![2.0, 9.0, 2.0],
            vec![1.0, 2.0, 1.0],
        ]
    }

    #[test]
    fn test_corner_has_three_moves() {
        let p = PeakProblem::new(hill(), GridPoint::new(0, 0)).unwrap();
        assert_eq!(
            p.actions(&GridPoint::new(0, 0)),
            vec![Compass::N, Compass::NE, Compass::E]
        );
    }

    #[test]
    fn test_center_has_eight_moves() {
        let p = PeakProblem::new(hill(), GridPoint::new(0, 0)).unwrap();
        assert_eq!(p.actions(&GridPoint::new(1, 1)).len(), 8);
    }

    #[test]
    fn test_actions_follow_given_state_not_initial() {
        let p = PeakProblem::new(hill(), GridPoint::new(0, 0)).unwrap();
        let acts = p.actions(&GridPoint::new(2, 2));
        assert_eq!(acts, vec![Compass::W, Compass::S, Compass::SW]);
    }

    #[test]
    fn test_result_translates() {
        let p = PeakProblem::new(hill(), GridPoint::new(0, 0)).unwrap();
        assert_eq!(
            p.result(&GridPoint::new(0, 0), &Compass::NE),
            GridPoint::new(1, 1)
        );
    }

    #[test]
    fn test_value_reads_cell() {
        let p = PeakProblem::new(hill(), GridPoint::new(0, 0)).unwrap();
        assert_eq!(p.value(&GridPoint::new(1, 1)), 9.0);
        assert_eq!(p.value(&GridPoint::new(0, 1)), 2.0);
        assert_eq!(p.value(&GridPoint::new(-1, 0)), f64::NEG_INFINITY);
    }

    #[test]
    fn test_rejects_bad_grids() {
        assert!(PeakProblem::new(vec![], GridPoint::new(0, 0)).is_err());
        assert!(PeakProblem::new(vec![vec![1.0], vec![1.0, 2.0]], GridPoint::new(0, 0)).is_err());
        assert!(PeakProblem::new(hill(), GridPoint::new(3, 0)).is_err());
    }
}
