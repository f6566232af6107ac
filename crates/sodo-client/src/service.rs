//! The solving service contract.

use sodo_core::{Board, Digit, Position, Trace, Verdict};

use crate::{Level, ServiceError};

/// Request/response operations offered by the solving service.
///
/// Calls block until the server answers; the app runs them on its worker
/// thread. Implementations keep whatever session state the server needs
/// (cookies) between calls.
pub trait SolverService: Send {
    /// Starts a new session at `level` and returns the puzzle givens.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the request fails or the board is malformed.
    fn new_game(&self, level: Level) -> Result<Board, ServiceError>;

    /// Asks whether `digit` is the solution at `pos`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the request fails or the reply is malformed.
    fn validate(&self, pos: Position, digit: Digit) -> Result<Verdict, ServiceError>;

    /// Asks for the solution digit at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Rejected`] when the server answers with an
    /// error message, or another [`ServiceError`] if the request fails.
    fn hint(&self, pos: Position) -> Result<Digit, ServiceError>;

    /// Fetches the full solver trace for the current puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Rejected`] when the server answers with an
    /// error message, [`ServiceError::Decode`] for an empty or malformed trace,
    /// or another [`ServiceError`] if the request fails.
    fn visualize(&self) -> Result<Trace, ServiceError>;

    /// Fetches the solved board for the current puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Rejected`] when no game is active,
    /// [`ServiceError::Decode`] when no solved board can be read, or another
    /// [`ServiceError`] if the request fails.
    fn solution(&self) -> Result<Board, ServiceError>;

    /// Checks every entry of a complete board and returns the wrong positions.
    ///
    /// The server counts each wrong entry as a mistake.
    ///
    /// # Errors
    ///
    /// Returns the first [`ServiceError`] met while validating.
    fn check(&self, entries: &[(Position, Digit)]) -> Result<Vec<Position>, ServiceError> {
        let mut wrong = vec![];
        for &(pos, digit) in entries {
            if !self.validate(pos, digit)?.is_correct() {
                wrong.push(pos);
            }
        }
        Ok(wrong)
    }
}
