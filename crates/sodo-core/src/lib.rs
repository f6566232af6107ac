//! Core state machines for the Sodo puzzle client.
//!
//! This crate holds everything the client decides locally, independent of the
//! UI toolkit and of the network. It is organized around four concerns:
//!
//! 1. **Basic types**
//!    - [`digit`]: Type-safe digits 1-9.
//!    - [`position`]: Grid coordinates and directional movement.
//!    - [`board`]: Immutable 9x9 snapshots (puzzle givens, trace boards).
//!
//! 2. **Grid interaction**
//!    - [`input`]: Keystroke and paste sanitizing.
//!    - [`grid`]: The 81-cell widget set with focus, transient flashes, and
//!      commit generations.
//!
//! 3. **Budgets and scoring**
//!    - [`budget`]: Monotonic mistake/hint counters with ceilings.
//!    - [`score`](mod@score): Final score of a solved game.
//!
//! 4. **Trace playback**
//!    - [`trace`]: Solver steps and their highlights.
//!    - [`playback`]: Cursor state machine with manual and timed advancement.
//!
//! All time-dependent operations take the current [`Instant`] as an argument,
//! so callers own the clock and tests stay deterministic.
//!
//! [`Instant`]: std::time::Instant
//!
//! # Examples
//!
//! ```
//! use std::time::Instant;
//!
//! use sodo_core::{CellGrid, Digit, InputOutcome, Position};
//!
//! let now = Instant::now();
//! let mut grid = CellGrid::new();
//! grid.set_focus(Position::new(0, 0));
//!
//! let outcome = grid.enter_text("7", now);
//! assert!(matches!(outcome, InputOutcome::Committed(_)));
//! assert_eq!(grid.cell(Position::new(0, 0)).value(), Some(Digit::D7));
//! assert_eq!(grid.focus(), Some(Position::new(0, 1)));
//! ```

pub mod board;
pub mod budget;
pub mod digit;
pub mod grid;
pub mod input;
pub mod playback;
pub mod position;
pub mod score;
pub mod trace;

pub use self::{
    board::{Board, BoardError},
    budget::{Budget, BudgetEvent, HINT_CEILING, MISTAKE_CEILING},
    digit::Digit,
    grid::{
        BackspaceOutcome, Cell, CellGrid, CellOrigin, Commit, FLASH_DURATION, Flash, FlashKind,
        Generation, InputOutcome, Verdict, VerdictOutcome,
    },
    input::{InputError, parse_keystroke, sanitize_paste},
    playback::{Playback, PlaybackState, Speed},
    position::{Direction, Position},
    score::{BASE_SCORE, MIN_SCORE, score},
    trace::{Highlight, Step, StepAction, Trace, TraceError},
};
