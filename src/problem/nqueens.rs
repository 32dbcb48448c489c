//! Incremental N-Queens placement.

use super::types::{Problem, StateSpace};
use crate::error::{SearchError, SearchResult};

/// A board: entry `c` holds the row of the queen in column `c`, or `None`
/// while that column is still empty. Columns fill left to right.
pub type Board = Vec<Option<usize>>;

/// Place `n` non-attacking queens on an `n x n` board, one column at a time.
///
/// Actions are the rows of the leftmost empty column that conflict with
/// no queen already placed. Each placement costs 1.
#[derive(Debug, Clone)]
pub struct NQueensProblem {
    n: usize,
    initial: Board,
}

impl NQueensProblem {
    /// Creates an empty `n x n` board. Fails for `n < 2`.
    pub fn new(n: usize) -> SearchResult<Self> {
        if n < 2 {
            return Err(SearchError::InvalidConfig(format!(
                "board size must be at least 2, got {n}"
            )));
        }
        Ok(Self {
            n,
            initial: vec![None; n],
        })
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of attacking pairs among the placed queens.
    pub fn conflicts(board: &[Option<usize>]) -> usize {
        let placed: Vec<(usize, usize)> = board
            .iter()
            .enumerate()
            .filter_map(|(col, row)| row.map(|r| (col, r)))
            .collect();
        let mut count = 0;
        for (i, &(c1, r1)) in placed.iter().enumerate() {
            for &(c2, r2) in &placed[i + 1..] {
                if attacks(r1, c1, r2, c2) {
                    count += 1;
                }
            }
        }
        count
    }

    fn conflicts_with_placed(board: &[Option<usize>], row: usize, col: usize) -> bool {
        board[..col]
            .iter()
            .enumerate()
            .any(|(c, r)| r.is_some_and(|r| attacks(row, col, r, c)))
    }
}

fn attacks(row1: usize, col1: usize, row2: usize, col2: usize) -> bool {
    row1 == row2 || col1 == col2 || row1.abs_diff(row2) == col1.abs_diff(col2)
}

impl StateSpace for NQueensProblem {
    type State = Board;
    type Action = usize;

    fn initial(&self) -> &Board {
        &self.initial
    }

    fn actions(&self, state: &Board) -> Vec<usize> {
        let Some(col) = state.iter().position(Option::is_none) else {
            return Vec::new();
        };
        (0..self.n)
            .filter(|&row| !Self::conflicts_with_placed(state, row, col))
            .collect()
    }

    fn result(&self, state: &Board, action: &usize) -> Board {
        let mut next = state.clone();
        if let Some(slot) = next.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(*action);
        }
        next
    }
}

impl Problem for NQueensProblem {
    fn goal_test(&self, state: &Board) -> bool {
        state.iter().all(Option::is_some) && Self::conflicts(state) == 0
    }

    fn path_cost(&self, cost: f64, _from: &Board, _action: &usize, _to: &Board) -> f64 {
        cost + 1.0
    }
}
