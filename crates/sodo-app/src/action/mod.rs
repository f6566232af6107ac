use std::{mem, time::Duration};

use sodo_client::Level;
use sodo_core::{Board, Commit, Digit, Direction, Position, Trace, Verdict};

use crate::state::GameId;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    App(AppAction),
    Ui(UiAction),
    Flow(FlowAction),
}

#[derive(Debug, derive_more::From)]
pub(crate) enum AppAction {
    Grid(GridAction),
    Service(ServiceAction),
    Playback(PlaybackAction),
}

/// Raw input routed to the cell widget set.
#[derive(Debug)]
pub(crate) enum GridAction {
    Focus(Position),
    ClearFocus,
    MoveFocus(Direction),
    EnterText(String),
    Paste(String),
    Backspace,
    Delete,
}

/// Replies from the solving service, tagged with the game they belong to.
#[derive(Debug)]
pub(crate) enum ServiceAction {
    StartGame {
        level: Level,
        givens: Board,
    },
    ApplyVerdict {
        game: GameId,
        commit: Commit,
        verdict: Verdict,
    },
    ApplyHint {
        game: GameId,
        pos: Position,
        digit: Digit,
    },
    /// Result of a full-board check of `entries`.
    ApplyCheck {
        game: GameId,
        entries: Vec<Commit>,
        wrong: Vec<Position>,
    },
    RevealSolution {
        game: GameId,
        solution: Board,
    },
}

#[derive(Debug)]
pub(crate) enum PlaybackAction {
    Open(Trace),
    PreviousStep,
    NextStep,
    ToggleAutoplay,
    SetSpeed(u16),
    Close,
}

#[derive(Debug)]
pub(crate) enum UiAction {
    OpenModal(ModalRequest),
    CloseModal,
    StartSpinner { id: SpinnerId, kind: SpinnerKind },
    StopSpinner { id: SpinnerId },
    SelectNextLevel(Level),
}

#[derive(Debug)]
pub(crate) enum FlowAction {
    NewGame,
    RequestHint,
    Visualize,
    Solve,
    Check,
}

impl From<GridAction> for Action {
    fn from(action: GridAction) -> Self {
        Action::App(action.into())
    }
}

impl From<ServiceAction> for Action {
    fn from(action: ServiceAction) -> Self {
        Action::App(action.into())
    }
}

impl From<PlaybackAction> for Action {
    fn from(action: PlaybackAction) -> Self {
        Action::App(action.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SpinnerId(u64);

impl SpinnerId {
    #[must_use]
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpinnerKind {
    LoadPuzzle,
    FetchTrace,
    FetchSolution,
    CheckSolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum ConfirmResult {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlertResult {
    Ok,
}

pub(crate) type Responder<T> = futures_channel::oneshot::Sender<T>;
pub(crate) type ConfirmResponder = Responder<ConfirmResult>;
pub(crate) type AlertResponder = Responder<AlertResult>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmKind {
    NewGame,
    Solve,
    TooManyMistakes,
    Visualize,
}

/// Figures shown when a game is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GameSummary {
    pub(crate) level: Level,
    pub(crate) elapsed: Duration,
    pub(crate) hints: u32,
    pub(crate) mistakes: u32,
    pub(crate) score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AlertKind {
    HintNoFocus,
    HintCellFilled,
    HintsExhausted,
    HintRejected { message: String },
    HintFailed,
    VisualizeFailed,
    NewGameFailed,
    SolutionFailed,
    CheckIncomplete,
    CheckMistakes { count: usize },
    CheckFailed,
    Solved(GameSummary),
}

#[derive(Debug)]
pub(crate) enum ModalRequest {
    Confirm {
        kind: ConfirmKind,
        responder: Option<ConfirmResponder>,
    },
    Alert {
        kind: AlertKind,
        responder: Option<AlertResponder>,
    },
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use sodo_core::Direction;

    use super::{Action, ActionRequestQueue, AppAction, FlowAction, GridAction};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(GridAction::MoveFocus(Direction::Up).into());
        queue.request(FlowAction::RequestHint.into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            drained[0],
            Action::App(AppAction::Grid(GridAction::MoveFocus(Direction::Up)))
        ));
        assert!(matches!(drained[1], Action::Flow(FlowAction::RequestHint)));

        assert!(queue.is_empty());
        assert!(queue.take_all().is_empty());
    }
}
