//! The 81-cell widget set and its navigation rules.
//!
//! [`CellGrid`] owns the cell values, the single input focus, and every
//! transient visual state. Time never advances on its own: callers pass `now`
//! into each operation and call [`CellGrid::tick`] to expire flashes and run
//! delayed clears.
//!
//! # Design Notes
//! - Every value change bumps the cell's [`Generation`]. A verdict computed
//!   for an older generation is stale and is dropped by
//!   [`CellGrid::apply_verdict`], so a slow response can never overwrite a
//!   newer entry.
//! - The delayed clear after an incorrect verdict is stored on the cell and is
//!   cancelled by any later write to that cell.
//! - A wrong mark from a full-board check is not transient. It stays until the
//!   cell is rewritten.

use std::time::{Duration, Instant};

use crate::{Board, Digit, Direction, InputError, Position, parse_keystroke, sanitize_paste};

/// How long a transient visual state stays visible.
pub const FLASH_DURATION: Duration = Duration::from_secs(1);

/// Where a cell's value came from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellOrigin {
    /// Part of the puzzle; focusable but never editable.
    Given,
    /// Entered by the player (or empty).
    #[default]
    Player,
    /// Written by the hint dispatcher. The tag does not expire.
    Hint,
    /// Filled in when the solution was revealed.
    Revealed,
}

/// A transient visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FlashKind {
    /// Malformed keystroke or paste.
    Invalid,
    /// The authority accepted the value.
    Correct,
    /// The authority rejected the value.
    Error,
}

/// A transient visual state with its expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    /// What is being signalled.
    pub kind: FlashKind,
    /// When the flash disappears.
    pub until: Instant,
}

/// Per-cell commit counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: Option<Digit>,
    origin: CellOrigin,
    flash: Option<Flash>,
    clear_at: Option<Instant>,
    generation: Generation,
    wrong: bool,
}

impl Cell {
    const EMPTY: Self = Self {
        value: None,
        origin: CellOrigin::Player,
        flash: None,
        clear_at: None,
        generation: Generation(0),
        wrong: false,
    };

    /// The current digit, if any.
    #[must_use]
    pub fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Where the value came from.
    #[must_use]
    pub fn origin(&self) -> CellOrigin {
        self.origin
    }

    /// The active transient visual state, if any.
    #[must_use]
    pub fn flash(&self) -> Option<Flash> {
        self.flash
    }

    /// The commit generation of the current value.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether the cell holds no digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Whether the cell is a puzzle clue.
    #[must_use]
    pub fn is_given(&self) -> bool {
        self.origin.is_given()
    }

    /// Whether a full-board check found this value wrong.
    #[must_use]
    pub fn is_marked_wrong(&self) -> bool {
        self.wrong
    }

    /// Whether a delayed clear is scheduled.
    #[must_use]
    pub fn is_clear_pending(&self) -> bool {
        self.clear_at.is_some()
    }

    fn write(&mut self, value: Option<Digit>, origin: CellOrigin) {
        self.value = value;
        self.origin = origin;
        self.clear_at = None;
        self.wrong = false;
        self.generation.bump();
    }

    fn start_flash(&mut self, kind: FlashKind, now: Instant) {
        self.flash = Some(Flash {
            kind,
            until: now + FLASH_DURATION,
        });
    }

    fn deadline(&self) -> Option<Instant> {
        match (self.flash.map(|flash| flash.until), self.clear_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// A value that was just committed and needs a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    /// The committed cell.
    pub pos: Position,
    /// The committed digit.
    pub digit: Digit,
    /// The cell generation created by this commit.
    pub generation: Generation,
}

/// Result of a keystroke or paste on the focused cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOutcome {
    /// A digit was committed and focus auto-advanced.
    Committed(Commit),
    /// The input was malformed; the cell flashes invalid.
    Rejected(InputError),
    /// No focus, or the focused cell is a given.
    Ignored,
}

/// Result of a backspace on the focused cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum BackspaceOutcome {
    /// The focused cell's value was deleted.
    Cleared,
    /// The focused cell was empty; focus moved one column left.
    MovedLeft,
    /// Nothing happened.
    Unchanged,
}

/// The authority's answer for a committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Verdict {
    /// The value matches the solution.
    Correct,
    /// The value is wrong.
    Incorrect {
        /// The solution digit, when the authority disclosed it. Its presence
        /// schedules the entered value to be cleared.
        correction: Option<Digit>,
    },
}

/// Whether a verdict reached the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum VerdictOutcome {
    /// The cell still holds the judged value; visuals were updated.
    Applied,
    /// The cell changed since the request; nothing was touched.
    Stale,
}

/// The 9x9 set of input cells with a single focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: [Cell; 81],
    focus: Option<Position>,
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CellGrid {
    /// Creates a grid of empty, editable cells.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; 81],
            focus: None,
        }
    }

    /// Creates a grid whose filled positions in `givens` are fixed clues.
    #[must_use]
    pub fn from_givens(givens: &Board) -> Self {
        let mut grid = Self::new();
        for (pos, digit) in givens.filled() {
            let cell = &mut grid.cells[pos.index()];
            cell.value = Some(digit);
            cell.origin = CellOrigin::Given;
        }
        grid
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Iterates over all cells in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        Position::ALL.into_iter().zip(self.cells.iter())
    }

    /// The focused cell, if any.
    #[must_use]
    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    /// Focuses the cell at `pos`.
    pub fn set_focus(&mut self, pos: Position) {
        self.focus = Some(pos);
    }

    /// Removes the focus.
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Moves focus to the adjacent cell. Returns `false` at the grid edge or
    /// without focus.
    pub fn move_focus(&mut self, direction: Direction) -> bool {
        let Some(next) = self.focus.and_then(|pos| pos.step(direction)) else {
            return false;
        };
        self.focus = Some(next);
        true
    }

    /// Handles the text of one keystroke on the focused cell.
    ///
    /// A valid digit is committed and focus auto-advances. Anything else
    /// clears the cell and flashes it invalid.
    pub fn enter_text(&mut self, text: &str, now: Instant) -> InputOutcome {
        let Some(pos) = self.editable_focus() else {
            return InputOutcome::Ignored;
        };
        match parse_keystroke(text) {
            Ok(digit) => InputOutcome::Committed(self.commit_and_advance(pos, digit)),
            Err(err) => {
                let cell = &mut self.cells[pos.index()];
                cell.write(None, CellOrigin::Player);
                cell.start_flash(FlashKind::Invalid, now);
                InputOutcome::Rejected(err)
            }
        }
    }

    /// Handles pasted text on the focused cell.
    ///
    /// Unlike a keystroke, a rejected paste leaves the current value alone.
    pub fn paste(&mut self, text: &str, now: Instant) -> InputOutcome {
        let Some(pos) = self.editable_focus() else {
            return InputOutcome::Ignored;
        };
        match sanitize_paste(text) {
            Ok(digit) => InputOutcome::Committed(self.commit_and_advance(pos, digit)),
            Err(err) => {
                self.cells[pos.index()].start_flash(FlashKind::Invalid, now);
                InputOutcome::Rejected(err)
            }
        }
    }

    /// Handles backspace on the focused cell.
    pub fn backspace(&mut self) -> BackspaceOutcome {
        let Some(pos) = self.focus else {
            return BackspaceOutcome::Unchanged;
        };
        let cell = &mut self.cells[pos.index()];
        if cell.is_given() {
            return BackspaceOutcome::Unchanged;
        }
        if cell.value.is_some() {
            cell.write(None, CellOrigin::Player);
            return BackspaceOutcome::Cleared;
        }
        match pos.left() {
            Some(left) => {
                self.focus = Some(left);
                BackspaceOutcome::MovedLeft
            }
            None => BackspaceOutcome::Unchanged,
        }
    }

    /// Deletes the focused cell's value without moving focus.
    pub fn delete(&mut self) -> bool {
        let Some(pos) = self.editable_focus() else {
            return false;
        };
        let cell = &mut self.cells[pos.index()];
        if cell.value.is_none() {
            return false;
        }
        cell.write(None, CellOrigin::Player);
        true
    }

    /// Writes a hint-sourced digit. Focus does not move.
    ///
    /// Returns `None` for a given cell.
    pub fn place_hint(&mut self, pos: Position, digit: Digit) -> Option<Commit> {
        let cell = &mut self.cells[pos.index()];
        if cell.is_given() {
            return None;
        }
        cell.write(Some(digit), CellOrigin::Hint);
        Some(Commit {
            pos,
            digit,
            generation: cell.generation,
        })
    }

    /// Applies the authority's verdict for a previous commit.
    pub fn apply_verdict(
        &mut self,
        pos: Position,
        generation: Generation,
        verdict: Verdict,
        now: Instant,
    ) -> VerdictOutcome {
        let cell = &mut self.cells[pos.index()];
        if cell.generation != generation {
            return VerdictOutcome::Stale;
        }
        match verdict {
            Verdict::Correct => cell.start_flash(FlashKind::Correct, now),
            Verdict::Incorrect { correction } => {
                cell.start_flash(FlashKind::Error, now);
                if correction.is_some() {
                    cell.clear_at = Some(now + FLASH_DURATION);
                }
            }
        }
        VerdictOutcome::Applied
    }

    /// Marks a checked value as wrong until the cell is rewritten.
    pub fn mark_wrong(&mut self, pos: Position, generation: Generation) -> VerdictOutcome {
        let cell = &mut self.cells[pos.index()];
        if cell.generation != generation {
            return VerdictOutcome::Stale;
        }
        cell.wrong = true;
        VerdictOutcome::Applied
    }

    /// Non-given cells that hold a digit, as commits of their current value.
    pub fn entries(&self) -> impl Iterator<Item = Commit> + '_ {
        self.cells().filter(|(_, cell)| !cell.is_given()).filter_map(|(pos, cell)| {
            cell.value.map(|digit| Commit {
                pos,
                digit,
                generation: cell.generation,
            })
        })
    }

    /// Whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.value.is_some())
    }

    /// Overwrites every non-given cell that differs from `solution`.
    ///
    /// Pending clears, flashes and the focus are dropped.
    pub fn reveal(&mut self, solution: &Board) {
        for (pos, cell) in Position::ALL.into_iter().zip(self.cells.iter_mut()) {
            cell.flash = None;
            if cell.is_given() {
                continue;
            }
            let digit = solution.get(pos);
            if cell.value == digit && !cell.wrong {
                cell.clear_at = None;
            } else {
                cell.write(digit, CellOrigin::Revealed);
            }
        }
        self.focus = None;
    }

    /// Expires flashes and runs delayed clears that are due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for cell in &mut self.cells {
            if cell.flash.is_some_and(|flash| flash.until <= now) {
                cell.flash = None;
            }
            if cell.clear_at.is_some_and(|at| at <= now) {
                cell.write(None, CellOrigin::Player);
            }
        }
    }

    /// The earliest pending flash expiry or delayed clear.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.cells.iter().filter_map(Cell::deadline).min()
    }

    fn editable_focus(&self) -> Option<Position> {
        self.focus.filter(|pos| !self.cell(*pos).is_given())
    }

    fn commit_and_advance(&mut self, pos: Position, digit: Digit) -> Commit {
        let cell = &mut self.cells[pos.index()];
        cell.write(Some(digit), CellOrigin::Player);
        let commit = Commit {
            pos,
            digit,
            generation: cell.generation,
        };
        if let Some(next) = pos.next_in_reading_order() {
            self.focus = Some(next);
        }
        commit
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn position() -> impl Strategy<Value = Position> {
        (0u8..9, 0u8..9).prop_map(|(row, col)| Position::new(row, col))
    }

    fn focused(pos: Position) -> CellGrid {
        let mut grid = CellGrid::new();
        grid.set_focus(pos);
        grid
    }

    fn givens() -> Board {
        let mut board = Board::new();
        board.set(Position::new(0, 1), Some(Digit::D4));
        board
    }

    #[test]
    fn paste_with_noise_commits_and_advances() {
        let now = Instant::now();
        let mut grid = focused(Position::new(2, 3));

        let outcome = grid.paste("7x", now);

        assert!(outcome.is_committed());
        assert_eq!(grid.cell(Position::new(2, 3)).value(), Some(Digit::D7));
        assert_eq!(grid.focus(), Some(Position::new(2, 4)));
    }

    #[test]
    fn rejected_paste_flashes_but_keeps_value() {
        let now = Instant::now();
        let mut grid = focused(Position::new(0, 0));
        grid.enter_text("5", now);
        grid.set_focus(Position::new(0, 0));

        let outcome = grid.paste("12", now);

        assert_eq!(
            outcome,
            InputOutcome::Rejected(InputError::TooMany { count: 2 })
        );
        let cell = grid.cell(Position::new(0, 0));
        assert_eq!(cell.value(), Some(Digit::D5));
        assert_eq!(cell.flash().map(|flash| flash.kind), Some(FlashKind::Invalid));
        assert_eq!(grid.focus(), Some(Position::new(0, 0)));
    }

    #[test]
    fn backspace_clears_before_moving() {
        let now = Instant::now();
        let mut grid = focused(Position::new(4, 4));
        grid.enter_text("3", now);
        grid.set_focus(Position::new(4, 4));

        assert_eq!(grid.backspace(), BackspaceOutcome::Cleared);
        assert_eq!(grid.focus(), Some(Position::new(4, 4)));
        assert_eq!(grid.backspace(), BackspaceOutcome::MovedLeft);
        assert_eq!(grid.focus(), Some(Position::new(4, 3)));
    }

    #[test]
    fn backspace_at_first_column_stays() {
        let mut grid = focused(Position::new(4, 0));
        assert_eq!(grid.backspace(), BackspaceOutcome::Unchanged);
        assert_eq!(grid.focus(), Some(Position::new(4, 0)));
    }

    #[test]
    fn givens_are_focusable_but_not_editable() {
        let now = Instant::now();
        let mut grid = CellGrid::from_givens(&givens());
        grid.set_focus(Position::new(0, 1));

        assert_eq!(grid.enter_text("9", now), InputOutcome::Ignored);
        assert_eq!(grid.paste("9", now), InputOutcome::Ignored);
        assert_eq!(grid.backspace(), BackspaceOutcome::Unchanged);
        assert!(!grid.delete());
        assert_eq!(grid.place_hint(Position::new(0, 1), Digit::D9), None);
        assert_eq!(grid.cell(Position::new(0, 1)).value(), Some(Digit::D4));
        assert!(grid.move_focus(Direction::Right));
    }

    #[test]
    fn last_cell_commit_keeps_focus() {
        let now = Instant::now();
        let mut grid = focused(Position::new(8, 8));
        assert!(grid.enter_text("1", now).is_committed());
        assert_eq!(grid.focus(), Some(Position::new(8, 8)));
    }

    #[test]
    fn correct_verdict_flashes_for_one_window() {
        let now = Instant::now();
        let mut grid = focused(Position::new(0, 0));
        let InputOutcome::Committed(commit) = grid.enter_text("6", now) else {
            panic!("expected commit");
        };

        let outcome = grid.apply_verdict(commit.pos, commit.generation, Verdict::Correct, now);
        assert!(outcome.is_applied());
        assert_eq!(grid.next_deadline(), Some(now + FLASH_DURATION));

        grid.tick(now + FLASH_DURATION);
        let cell = grid.cell(commit.pos);
        assert_eq!(cell.flash(), None);
        assert_eq!(cell.value(), Some(Digit::D6));
    }

    #[test]
    fn incorrect_verdict_with_correction_clears_after_window() {
        let now = Instant::now();
        let mut grid = focused(Position::new(0, 0));
        let InputOutcome::Committed(commit) = grid.enter_text("6", now) else {
            panic!("expected commit");
        };

        grid.apply_verdict(
            commit.pos,
            commit.generation,
            Verdict::Incorrect {
                correction: Some(Digit::D2),
            },
            now,
        );
        grid.tick(now + Duration::from_millis(999));
        assert_eq!(grid.cell(commit.pos).value(), Some(Digit::D6));
        assert!(grid.cell(commit.pos).flash().is_some());

        grid.tick(now + FLASH_DURATION);
        let cell = grid.cell(commit.pos);
        assert_eq!(cell.value(), None);
        assert_eq!(cell.flash(), None);
        assert_eq!(grid.next_deadline(), None);
    }

    #[test]
    fn incorrect_verdict_without_correction_keeps_value() {
        let now = Instant::now();
        let mut grid = focused(Position::new(0, 0));
        let InputOutcome::Committed(commit) = grid.enter_text("6", now) else {
            panic!("expected commit");
        };

        grid.apply_verdict(
            commit.pos,
            commit.generation,
            Verdict::Incorrect { correction: None },
            now,
        );
        grid.tick(now + FLASH_DURATION);
        assert_eq!(grid.cell(commit.pos).value(), Some(Digit::D6));
    }

    #[test]
    fn stale_verdict_is_dropped() {
        let now = Instant::now();
        let mut grid = focused(Position::new(0, 0));
        let InputOutcome::Committed(first) = grid.enter_text("6", now) else {
            panic!("expected commit");
        };
        grid.set_focus(first.pos);
        grid.enter_text("8", now);

        let outcome = grid.apply_verdict(
            first.pos,
            first.generation,
            Verdict::Incorrect {
                correction: Some(Digit::D8),
            },
            now,
        );

        assert!(outcome.is_stale());
        let cell = grid.cell(first.pos);
        assert_eq!(cell.value(), Some(Digit::D8));
        assert_eq!(cell.flash(), None);
        assert!(!cell.is_clear_pending());
    }

    #[test]
    fn rewrite_cancels_pending_clear() {
        let now = Instant::now();
        let mut grid = focused(Position::new(0, 0));
        let InputOutcome::Committed(commit) = grid.enter_text("6", now) else {
            panic!("expected commit");
        };
        grid.apply_verdict(
            commit.pos,
            commit.generation,
            Verdict::Incorrect {
                correction: Some(Digit::D2),
            },
            now,
        );

        grid.set_focus(commit.pos);
        grid.enter_text("2", now + Duration::from_millis(500));
        grid.tick(now + FLASH_DURATION);

        assert_eq!(grid.cell(commit.pos).value(), Some(Digit::D2));
    }

    #[test]
    fn hint_tag_survives_flash_expiry() {
        let now = Instant::now();
        let mut grid = CellGrid::new();
        let commit = grid.place_hint(Position::new(3, 3), Digit::D1).unwrap();
        grid.apply_verdict(commit.pos, commit.generation, Verdict::Correct, now);
        grid.tick(now + FLASH_DURATION);

        assert_eq!(grid.cell(commit.pos).origin(), CellOrigin::Hint);
        assert_eq!(grid.focus(), None);
    }

    #[test]
    fn wrong_mark_lasts_until_rewrite() {
        let now = Instant::now();
        let mut grid = focused(Position::new(0, 0));
        let InputOutcome::Committed(commit) = grid.enter_text("6", now) else {
            panic!("expected commit");
        };

        assert!(grid.mark_wrong(commit.pos, commit.generation).is_applied());
        grid.tick(now + FLASH_DURATION * 10);
        assert!(grid.cell(commit.pos).is_marked_wrong());
        assert_eq!(grid.next_deadline(), None);

        grid.set_focus(commit.pos);
        grid.enter_text("2", now);
        assert!(!grid.cell(commit.pos).is_marked_wrong());
        assert!(grid.mark_wrong(commit.pos, commit.generation).is_stale());
    }

    #[test]
    fn entries_skip_givens_and_empty_cells() {
        let now = Instant::now();
        let mut grid = CellGrid::from_givens(&givens());
        grid.set_focus(Position::new(0, 2));
        grid.enter_text("3", now);
        grid.place_hint(Position::new(5, 5), Digit::D9);

        let entries: Vec<_> = grid.entries().map(|commit| (commit.pos, commit.digit)).collect();
        assert_eq!(
            entries,
            [(Position::new(0, 2), Digit::D3), (Position::new(5, 5), Digit::D9)]
        );
        assert!(!grid.is_complete());
    }

    #[test]
    fn reveal_fills_and_replaces_wrong_values() {
        let now = Instant::now();
        let mut solution = Board::new();
        for pos in Position::ALL {
            solution.set(pos, Some(Digit::D1));
        }
        solution.set(Position::new(0, 1), Some(Digit::D4));

        let mut grid = CellGrid::from_givens(&givens());
        grid.set_focus(Position::new(0, 0));
        let InputOutcome::Committed(right) = grid.enter_text("1", now) else {
            panic!("expected commit");
        };
        grid.set_focus(Position::new(0, 2));
        let InputOutcome::Committed(wrong) = grid.enter_text("7", now) else {
            panic!("expected commit");
        };
        grid.apply_verdict(
            wrong.pos,
            wrong.generation,
            Verdict::Incorrect {
                correction: Some(Digit::D1),
            },
            now,
        );

        grid.reveal(&solution);

        assert!(grid.is_complete());
        assert_eq!(grid.focus(), None);
        assert_eq!(grid.next_deadline(), None);
        assert_eq!(grid.cell(right.pos).origin(), CellOrigin::Player);
        assert_eq!(grid.cell(wrong.pos).value(), Some(Digit::D1));
        assert_eq!(grid.cell(wrong.pos).origin(), CellOrigin::Revealed);
        assert_eq!(grid.cell(Position::new(0, 1)).origin(), CellOrigin::Given);
        assert_eq!(grid.cell(Position::new(8, 8)).origin(), CellOrigin::Revealed);
    }

    proptest! {
        #[test]
        fn non_digit_keystroke_clears_and_flashes_for_exact_window(
            pos in position(),
            text in ".{0,3}",
        ) {
            prop_assume!(parse_keystroke(&text).is_err());
            let now = Instant::now();
            let mut grid = focused(pos);
            grid.enter_text("5", now);
            grid.set_focus(pos);

            prop_assert!(grid.enter_text(&text, now).is_rejected());
            prop_assert_eq!(grid.cell(pos).value(), None);
            prop_assert_eq!(grid.focus(), Some(pos));

            grid.tick(now + FLASH_DURATION - Duration::from_millis(1));
            prop_assert_eq!(
                grid.cell(pos).flash().map(|flash| flash.kind),
                Some(FlashKind::Invalid)
            );
            grid.tick(now + FLASH_DURATION);
            prop_assert_eq!(grid.cell(pos).flash(), None);
        }

        #[test]
        fn commit_advances_in_reading_order(pos in position(), digit in 1u8..=9) {
            let now = Instant::now();
            let mut grid = focused(pos);

            prop_assert!(grid.enter_text(&digit.to_string(), now).is_committed());

            let expected = if pos.col() < 8 {
                Position::new(pos.row(), pos.col() + 1)
            } else if pos.row() < 8 {
                Position::new(pos.row() + 1, 0)
            } else {
                pos
            };
            prop_assert_eq!(grid.focus(), Some(expected));
        }

        #[test]
        fn moving_into_an_edge_keeps_focus(pos in position()) {
            let mut grid = focused(pos);
            for direction in Direction::ALL {
                grid.set_focus(pos);
                let moved = grid.move_focus(direction);
                if pos.step(direction).is_none() {
                    prop_assert!(!moved);
                    prop_assert_eq!(grid.focus(), Some(pos));
                }
            }
        }
    }
}
