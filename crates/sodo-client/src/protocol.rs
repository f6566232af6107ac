//! JSON shapes exchanged with the solving service.
//!
//! Reply types mirror the server's payloads field for field; conversion into
//! `sodo_core` types validates coordinates, digits and boards and reports
//! anything out of range as [`ServiceError::Decode`].

use serde::{Deserialize, Serialize};
use sodo_core::{Board, Digit, Position, Step, StepAction, Trace, Verdict};

use crate::ServiceError;

/// Raw 9x9 board with `0` for empty cells.
pub type RawBoard = [[u8; 9]; 9];

/// Body of `POST /validate`.
///
/// The server compares `value` textually against the solution digit, so it is
/// sent as a string while the coordinates stay numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateRequest {
    /// Zero-based row.
    pub row: u8,
    /// Zero-based column.
    pub col: u8,
    /// The entered digit, e.g. `"7"`.
    pub value: &'static str,
}

impl ValidateRequest {
    /// Builds the body for `digit` entered at `pos`.
    #[must_use]
    pub fn new(pos: Position, digit: Digit) -> Self {
        Self {
            row: pos.row(),
            col: pos.col(),
            value: digit.as_str(),
        }
    }
}

/// Reply of `POST /validate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateReply {
    /// Whether the value matches the solution.
    pub valid: bool,
    /// The solution digit, sent only for a wrong value.
    #[serde(default)]
    pub correct_value: Option<u8>,
}

impl TryFrom<ValidateReply> for Verdict {
    type Error = ServiceError;

    fn try_from(reply: ValidateReply) -> Result<Self, Self::Error> {
        if reply.valid {
            return Ok(Verdict::Correct);
        }
        let correction = reply
            .correct_value
            .map(|value| {
                Digit::try_from_value(value)
                    .ok_or_else(|| ServiceError::decode(format!("correct_value {value} out of range")))
            })
            .transpose()?;
        Ok(Verdict::Incorrect { correction })
    }
}

/// Reply of `GET /hint`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HintReply {
    /// The server refused, e.g. because no game is active.
    Error {
        /// The server's message.
        error: String,
    },
    /// The solution digit for the requested cell.
    Value {
        /// Raw digit value.
        value: u8,
    },
}

impl TryFrom<HintReply> for Digit {
    type Error = ServiceError;

    fn try_from(reply: HintReply) -> Result<Self, Self::Error> {
        match reply {
            HintReply::Error { error } => Err(ServiceError::Rejected { message: error }),
            HintReply::Value { value } => Digit::try_from_value(value)
                .ok_or_else(|| ServiceError::decode(format!("hint value {value} out of range"))),
        }
    }
}

/// Action tag of a trace step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionDto {
    /// `"place"`
    Place,
    /// `"remove"`
    Remove,
}

impl From<ActionDto> for StepAction {
    fn from(action: ActionDto) -> Self {
        match action {
            ActionDto::Place => StepAction::Place,
            ActionDto::Remove => StepAction::Remove,
        }
    }
}

/// One step of a `GET /visualize` reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StepDto {
    /// Row of the affected cell.
    pub row: u8,
    /// Column of the affected cell.
    pub col: u8,
    /// Placed digit, `0` for removals.
    #[serde(default)]
    pub value: u8,
    /// What the solver did.
    pub action: ActionDto,
    /// Board snapshot recorded with the step.
    pub board: RawBoard,
}

impl TryFrom<StepDto> for Step {
    type Error = ServiceError;

    fn try_from(dto: StepDto) -> Result<Self, Self::Error> {
        let position = Position::try_new(dto.row, dto.col).ok_or_else(|| {
            ServiceError::decode(format!("step position ({}, {}) out of range", dto.row, dto.col))
        })?;
        let board = Board::from_rows(&dto.board).map_err(|err| ServiceError::decode(err.to_string()))?;
        Ok(Step {
            board,
            action: dto.action.into(),
            position,
            value: Digit::try_from_value(dto.value),
        })
    }
}

/// Reply of `GET /visualize`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TraceReply {
    /// The server refused, e.g. because no game is active.
    Error {
        /// The server's message.
        error: String,
    },
    /// The recorded solver steps.
    Steps {
        /// Steps in solver order.
        steps: Vec<StepDto>,
    },
}

impl TryFrom<TraceReply> for Trace {
    type Error = ServiceError;

    fn try_from(reply: TraceReply) -> Result<Self, Self::Error> {
        let steps = match reply {
            TraceReply::Error { error } => return Err(ServiceError::Rejected { message: error }),
            TraceReply::Steps { steps } => steps,
        };
        let steps = steps
            .into_iter()
            .map(Step::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Trace::new(steps).map_err(|err| ServiceError::decode(err.to_string()))
    }
}

/// Reply of `GET /game/<level>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleReply {
    /// Rows of the board, `0` for empty cells.
    pub board: RawBoard,
}

impl TryFrom<PuzzleReply> for Board {
    type Error = ServiceError;

    fn try_from(reply: PuzzleReply) -> Result<Self, Self::Error> {
        Board::from_rows(&reply.board).map_err(|err| ServiceError::decode(err.to_string()))
    }
}

/// JSON reply of `GET /solve`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolutionReply {
    /// Rows of the solved board.
    pub board: RawBoard,
}

impl TryFrom<SolutionReply> for Board {
    type Error = ServiceError;

    fn try_from(reply: SolutionReply) -> Result<Self, Self::Error> {
        let board =
            Board::from_rows(&reply.board).map_err(|err| ServiceError::decode(err.to_string()))?;
        let filled = board.filled().count();
        if filled != 81 {
            return Err(ServiceError::decode(format!(
                "solution has {} empty cells",
                81 - filled
            )));
        }
        Ok(board)
    }
}
