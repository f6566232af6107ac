//! Immutable 9x9 board snapshots.

use std::ops::Index;

use crate::{Digit, Position};

/// A 9x9 snapshot of optional digits.
///
/// Used for puzzle givens and for the per-step boards of a solver trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Builds a board from rows of raw values, where `0` means empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidValue`] if any value is greater than 9.
    pub fn from_rows(rows: &[[u8; 9]; 9]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for pos in Position::ALL {
            let value = rows[usize::from(pos.row())][usize::from(pos.col())];
            if value == 0 {
                continue;
            }
            let digit =
                Digit::try_from_value(value).ok_or(BoardError::InvalidValue { pos, value })?;
            board.cells[pos.index()] = Some(digit);
        }
        Ok(board)
    }

    /// Sets the digit at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the digit at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Iterates over the filled positions in reading order.
    pub fn filled(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|digit| (pos, digit)))
    }
}

impl Index<Position> for Board {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

/// Errors that can occur when building a [`Board`] from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A raw value outside `0..=9`.
    #[display("invalid value {value} at {pos}")]
    InvalidValue {
        /// Where the value was found.
        pos: Position,
        /// The offending value.
        value: u8,
    },
}
