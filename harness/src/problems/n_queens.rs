//! `NQueens`: place `dimension` non-attacking queens, one per row.
//!
//! Queens are placed top-down; the next queen always goes into row
//! `positions.len()`, so the one-per-row constraint holds by construction.
//! An action is the column for that next queen.

use trailhead_search::problem::{Cost, Problem};

/// Classic board size.
pub const EIGHT: usize = 8;

/// Board construction failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueensError {
    #[error("{placed} queens placed on a board with {dimension} rows")]
    TooManyQueens { placed: usize, dimension: usize },
    #[error("column {column} in row {row} is outside a board of dimension {dimension}")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        dimension: usize,
    },
    #[error("conflict detected in column {column}")]
    ColumnConflict { column: usize },
    #[error("conflict detected on a main diagonal (row - column = {offset})")]
    MainDiagonalConflict { offset: isize },
    #[error("conflict detected on an anti-diagonal (row + column = {sum})")]
    AntiDiagonalConflict { sum: usize },
}

/// A partial placement: `positions[row]` is the column of the queen in `row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueensBoard {
    dimension: usize,
    positions: Vec<usize>,
}

impl QueensBoard {
    /// The empty board.
    #[must_use]
    pub fn empty(dimension: usize) -> Self {
        Self {
            dimension,
            positions: Vec::new(),
        }
    }

    /// Build a board from per-row columns.
    ///
    /// Row count and column range are always checked. With `strict`, the
    /// board is also rejected if two queens share a column, a main diagonal
    /// or an anti-diagonal (checked in that order).
    ///
    /// # Errors
    ///
    /// Returns the first [`QueensError`] found.
    pub fn new(dimension: usize, positions: Vec<usize>, strict: bool) -> Result<Self, QueensError> {
        if positions.len() > dimension {
            return Err(QueensError::TooManyQueens {
                placed: positions.len(),
                dimension,
            });
        }
        if let Some((row, &column)) = positions.iter().enumerate().find(|(_, &c)| c >= dimension) {
            return Err(QueensError::ColumnOutOfRange {
                row,
                column,
                dimension,
            });
        }
        let board = Self {
            dimension,
            positions,
        };
        if strict {
            board.check_conflicts()?;
        }
        Ok(board)
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Whether a queen at `(row, column)` is attacked by any placed queen.
    #[must_use]
    pub fn is_safe(&self, row: usize, column: usize) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(r, &c)| c != column && r.abs_diff(row) != c.abs_diff(column))
    }

    fn check_conflicts(&self) -> Result<(), QueensError> {
        let mut columns = vec![false; self.dimension];
        for &column in &self.positions {
            if std::mem::replace(&mut columns[column], true) {
                return Err(QueensError::ColumnConflict { column });
            }
        }

        let mut main = std::collections::HashSet::new();
        for (row, &column) in self.positions.iter().enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            let offset = row as isize - column as isize;
            if !main.insert(offset) {
                return Err(QueensError::MainDiagonalConflict { offset });
            }
        }

        let mut anti = std::collections::HashSet::new();
        for (row, &column) in self.positions.iter().enumerate() {
            let sum = row + column;
            if !anti.insert(sum) {
                return Err(QueensError::AntiDiagonalConflict { sum });
            }
        }
        Ok(())
    }
}

/// The N-queens problem on a `dimension × dimension` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueens {
    dimension: usize,
}

impl NQueens {
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl Default for NQueens {
    fn default() -> Self {
        Self::new(EIGHT)
    }
}

impl Problem for NQueens {
    type State = QueensBoard;
    type Action = usize;
    type Error = QueensError;

    fn initial_state(&self) -> QueensBoard {
        QueensBoard::empty(self.dimension)
    }

    /// Strict construction guarantees validity, so a full row count suffices.
    fn is_goal(&self, state: &QueensBoard) -> bool {
        state.positions.len() == self.dimension
    }

    fn actions(&self, state: &QueensBoard) -> Vec<usize> {
        let row = state.positions.len();
        if row >= self.dimension {
            return Vec::new();
        }
        (0..self.dimension)
            .filter(|&column| state.is_safe(row, column))
            .collect()
    }

    fn transition(
        &self,
        state: &QueensBoard,
        action: &usize,
    ) -> Result<(QueensBoard, Cost), QueensError> {
        let mut positions = state.positions.clone();
        positions.push(*action);
        Ok((QueensBoard::new(self.dimension, positions, true)?, 1))
    }
}
