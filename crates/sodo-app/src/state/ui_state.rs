use std::{collections::VecDeque, time::Instant};

use sodo_client::Level;
use sodo_core::Playback;

use crate::{
    action::{ModalRequest, SpinnerId, SpinnerKind},
    flow::FlowExecutor,
    worker::Worker,
};

// UiState holds controller plumbing and overlays that live outside the game
// session (modals, spinners, flows, the playback overlay).
#[derive(Debug)]
pub(crate) struct UiState {
    /// Open dialogs. Only the front one is shown; the rest wait their turn.
    pub(crate) modals: VecDeque<ModalRequest>,
    pub(crate) executor: FlowExecutor,
    pub(crate) spinner_state: SpinnerState,
    pub(crate) worker: Worker,
    /// Present only while the playback overlay is open.
    pub(crate) playback: Option<Playback>,
    /// Difficulty used by the next "New Game".
    pub(crate) next_level: Level,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(worker: Worker, next_level: Level) -> Self {
        Self {
            modals: VecDeque::new(),
            executor: FlowExecutor::new(),
            spinner_state: SpinnerState::default(),
            worker,
            playback: None,
            next_level,
        }
    }

    /// Whether raw grid input should reach the cell widget set.
    #[must_use]
    pub(crate) fn accepts_grid_input(&self) -> bool {
        self.modals.is_empty() && !self.spinner_state.is_active() && self.playback.is_none()
    }

    /// The dialog currently shown.
    pub(crate) fn active_modal_mut(&mut self) -> Option<&mut ModalRequest> {
        self.modals.front_mut()
    }

    #[must_use]
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.playback.as_ref().and_then(Playback::next_deadline)
    }
}

#[derive(Debug, Default)]
pub(crate) struct SpinnerState {
    active: Vec<SpinnerEntry>,
}

impl SpinnerState {
    pub(crate) fn start(&mut self, id: SpinnerId, kind: SpinnerKind) {
        self.active.push(SpinnerEntry { id, kind });
    }

    pub(crate) fn stop(&mut self, id: SpinnerId) {
        if let Some(index) = self.active.iter().position(|entry| entry.id == id) {
            self.active.remove(index);
        }
    }

    #[must_use]
    pub(crate) fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub(crate) fn active_kind(&self) -> Option<SpinnerKind> {
        self.active.first().map(|entry| entry.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpinnerEntry {
    pub(crate) id: SpinnerId,
    pub(crate) kind: SpinnerKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_stops_by_id() {
        let mut spinners = SpinnerState::default();
        spinners.start(SpinnerId::new(1), SpinnerKind::LoadPuzzle);
        spinners.start(SpinnerId::new(2), SpinnerKind::FetchTrace);

        spinners.stop(SpinnerId::new(1));
        assert_eq!(spinners.active_kind(), Some(SpinnerKind::FetchTrace));

        spinners.stop(SpinnerId::new(3));
        assert!(spinners.is_active());

        spinners.stop(SpinnerId::new(2));
        assert!(!spinners.is_active());
    }
}
