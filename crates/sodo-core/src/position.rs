//! Grid coordinates and directional movement.

use std::fmt::{self, Display};

/// A cell coordinate on the 9x9 grid.
///
/// Both `row` and `col` are in `0..9`. Rows grow downwards, columns grow to
/// the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in reading order (row-major).
    #[allow(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..9`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position, returning `None` if either coordinate is out of range.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the position one row up, if any.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row > 0 {
            Some(Self::new(self.row - 1, self.col))
        } else {
            None
        }
    }

    /// Returns the position one row down, if any.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.row < 8 {
            Some(Self::new(self.row + 1, self.col))
        } else {
            None
        }
    }

    /// Returns the position one column left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col > 0 {
            Some(Self::new(self.row, self.col - 1))
        } else {
            None
        }
    }

    /// Returns the position one column right, if any.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.col < 8 {
            Some(Self::new(self.row, self.col + 1))
        } else {
            None
        }
    }

    /// Returns the adjacent position in `direction`, or `None` at the grid edge.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.up(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Returns the auto-advance target after a commit at this position.
    ///
    /// The next column of the same row, or column 0 of the next row when at
    /// the last column. `None` for the last cell of the grid.
    #[must_use]
    pub const fn next_in_reading_order(self) -> Option<Self> {
        if self.col < 8 {
            Some(Self::new(self.row, self.col + 1))
        } else if self.row < 8 {
            Some(Self::new(self.row + 1, 0))
        } else {
            None
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// A focus movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 8.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 8.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn position() -> impl Strategy<Value = Position> {
        (0u8..9, 0u8..9).prop_map(|(row, col)| Position::new(row, col))
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    #[test]
    fn all_is_row_major() {
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::ALL[9], Position::new(1, 0));
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert_eq!(Position::try_new(9, 0), None);
        assert_eq!(Position::try_new(0, 9), None);
        assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
    }

    #[test]
    fn reading_order_wraps_rows_and_stops_at_end() {
        assert_eq!(
            Position::new(3, 4).next_in_reading_order(),
            Some(Position::new(3, 5))
        );
        assert_eq!(
            Position::new(3, 8).next_in_reading_order(),
            Some(Position::new(4, 0))
        );
        assert_eq!(Position::new(8, 8).next_in_reading_order(), None);
    }

    proptest! {
        #[test]
        fn step_moves_exactly_one_cell(pos in position(), dir in direction()) {
            if let Some(next) = pos.step(dir) {
                let dr = i16::from(next.row()) - i16::from(pos.row());
                let dc = i16::from(next.col()) - i16::from(pos.col());
                let expected = match dir {
                    Direction::Up => (-1, 0),
                    Direction::Down => (1, 0),
                    Direction::Left => (0, -1),
                    Direction::Right => (0, 1),
                };
                prop_assert_eq!((dr, dc), expected);
            }
        }

        #[test]
        fn step_towards_edge_is_none(pos in position(), dir in direction()) {
            let at_edge = match dir {
                Direction::Up => pos.row() == 0,
                Direction::Down => pos.row() == 8,
                Direction::Left => pos.col() == 0,
                Direction::Right => pos.col() == 8,
            };
            prop_assert_eq!(pos.step(dir).is_none(), at_edge);
        }
    }
}
