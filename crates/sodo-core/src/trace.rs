//! Solver traces and step highlights.

use crate::{Board, Digit, Position};

/// What a solver step did to its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum StepAction {
    /// A digit was placed.
    #[display("place")]
    Place,
    /// A digit was removed while backtracking.
    #[display("remove")]
    Remove,
}

/// Highlight drawn on the affected cell of a rendered step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Highlight {
    /// Positive tint for a placement.
    Placed,
    /// Negative tint for a removal.
    Removed,
}

impl From<StepAction> for Highlight {
    fn from(action: StepAction) -> Self {
        match action {
            StepAction::Place => Self::Placed,
            StepAction::Remove => Self::Removed,
        }
    }
}

/// One recorded solver step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Board snapshot recorded just before the step was applied.
    pub board: Board,
    /// Whether the step placed or removed a digit.
    pub action: StepAction,
    /// The single cell the step touched.
    pub position: Position,
    /// The digit involved, when the trace recorded one.
    pub value: Option<Digit>,
}

impl Step {
    /// Returns the highlight for `pos` when this step is rendered.
    ///
    /// Only the affected cell is highlighted.
    #[must_use]
    pub fn highlight_at(&self, pos: Position) -> Option<Highlight> {
        (pos == self.position).then(|| self.action.into())
    }
}

/// An ordered, immutable, non-empty sequence of solver steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

/// Errors that can occur when building a [`Trace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TraceError {
    /// The solver recorded no steps.
    #[display("trace has no steps")]
    Empty,
}

impl Trace {
    /// Wraps recorded steps.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Empty`] if `steps` is empty; a playback cursor
    /// needs at least one step to point at.
    pub fn new(steps: Vec<Step>) -> Result<Self, TraceError> {
        if steps.is_empty() {
            return Err(TraceError::Empty);
        }
        Ok(Self { steps })
    }

    /// Number of steps, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the step at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// All steps in solver order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Index of the final step.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// The board the solver started from.
    #[must_use]
    pub fn puzzle(&self) -> &Board {
        &self.steps[0].board
    }

    /// The solved board: the final snapshot with the final placement applied.
    ///
    /// Returns `None` unless the trace ends with a placement that fills the
    /// last empty cell.
    #[must_use]
    pub fn solution(&self) -> Option<Board> {
        let last = &self.steps[self.last_index()];
        if !last.action.is_place() {
            return None;
        }
        let mut board = last.board.clone();
        board.set(last.position, Some(last.value?));
        (board.filled().count() == 81).then_some(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(action: StepAction, row: u8, col: u8) -> Step {
        Step {
            board: Board::new(),
            action,
            position: Position::new(row, col),
            value: None,
        }
    }

    #[test]
    fn empty_trace_is_rejected() {
        assert_eq!(Trace::new(vec![]), Err(TraceError::Empty));
    }

    #[test]
    fn only_affected_cell_is_highlighted() {
        let place = step(StepAction::Place, 0, 0);
        assert_eq!(
            place.highlight_at(Position::new(0, 0)),
            Some(Highlight::Placed)
        );
        assert_eq!(place.highlight_at(Position::new(0, 1)), None);

        let remove = step(StepAction::Remove, 3, 4);
        assert_eq!(
            remove.highlight_at(Position::new(3, 4)),
            Some(Highlight::Removed)
        );
        let highlighted = Position::ALL
            .into_iter()
            .filter(|pos| remove.highlight_at(*pos).is_some())
            .count();
        assert_eq!(highlighted, 1);
    }

    fn nearly_solved() -> Board {
        let mut board = Board::new();
        for pos in Position::ALL {
            let value = (pos.row() * 3 + pos.row() / 3 + pos.col()) % 9 + 1;
            board.set(pos, Digit::try_from_value(value));
        }
        board
    }

    #[test]
    fn solution_applies_final_placement() {
        let solved = nearly_solved();
        let last = Position::new(8, 8);
        let mut before = solved.clone();
        before.set(last, None);
        let mut start = before.clone();
        start.set(Position::new(0, 0), None);

        let trace = Trace::new(vec![
            Step {
                board: start.clone(),
                action: StepAction::Place,
                position: Position::new(0, 0),
                value: solved.get(Position::new(0, 0)),
            },
            Step {
                board: before,
                action: StepAction::Place,
                position: last,
                value: solved.get(last),
            },
        ])
        .unwrap();

        assert_eq!(trace.puzzle(), &start);
        assert_eq!(trace.solution(), Some(solved));
    }

    #[test]
    fn unfinished_trace_has_no_solution() {
        let trace = Trace::new(vec![step(StepAction::Place, 0, 0)]).unwrap();
        assert_eq!(trace.solution(), None);

        let mut board = nearly_solved();
        board.set(Position::new(2, 2), None);
        let trace = Trace::new(vec![Step {
            board,
            action: StepAction::Remove,
            position: Position::new(2, 2),
            value: None,
        }])
        .unwrap();
        assert_eq!(trace.solution(), None);
    }

    #[test]
    fn last_index_points_at_final_step() {
        let trace = Trace::new(vec![
            step(StepAction::Place, 0, 0),
            step(StepAction::Remove, 3, 4),
        ])
        .unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last_index(), 1);
        assert_eq!(trace.get(1).map(|s| s.action), Some(StepAction::Remove));
        assert!(trace.get(2).is_none());
    }
}
