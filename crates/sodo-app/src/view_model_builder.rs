use std::time::Instant;

use sodo_core::{CellGrid, CellOrigin, FlashKind, Highlight, Position, Step};

use crate::{
    state::{AppState, GameStatus, UiState},
    ui::{
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        playback::PlaybackViewModel,
        sidebar::{BudgetView, SidebarViewModel},
    },
};

fn build_game_grid(grid: &CellGrid) -> [GridCell; 81] {
    let mut cells = Position::ALL.map(|pos| {
        let cell = grid.cell(pos);
        let mut visual_state = GridVisualState::empty();
        match cell.origin() {
            CellOrigin::Hint => visual_state.insert(GridVisualState::HINT),
            CellOrigin::Revealed => visual_state.insert(GridVisualState::REVEALED),
            CellOrigin::Given | CellOrigin::Player => {}
        }
        if cell.is_marked_wrong() {
            visual_state.insert(GridVisualState::WRONG);
        }
        if let Some(flash) = cell.flash() {
            visual_state.insert(match flash.kind {
                FlashKind::Invalid => GridVisualState::INVALID,
                FlashKind::Correct => GridVisualState::CORRECT,
                FlashKind::Error => GridVisualState::ERROR,
            });
        }
        GridCell {
            value: cell.value(),
            given: cell.is_given(),
            visual_state,
        }
    });
    if let Some(pos) = grid.focus() {
        cells[pos.index()]
            .visual_state
            .insert(GridVisualState::FOCUSED);
    }
    cells
}

fn build_step_grid(step: &Step) -> [GridCell; 81] {
    Position::ALL.map(|pos| {
        let visual_state = match step.highlight_at(pos) {
            Some(Highlight::Placed) => GridVisualState::PLACED,
            Some(Highlight::Removed) => GridVisualState::REMOVED,
            None => GridVisualState::empty(),
        };
        GridCell {
            value: step.board.get(pos),
            given: false,
            visual_state,
        }
    })
}

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
    now: Instant,
) -> GameScreenViewModel {
    let grid_vm = GridViewModel::new(build_game_grid(&app_state.grid), !app_state.is_over());
    let sidebar_vm = SidebarViewModel {
        mistakes: BudgetView::from(&app_state.mistakes),
        hints: BudgetView::from(&app_state.hints),
        elapsed: app_state.elapsed(now),
        level: app_state.level,
        next_level: ui_state.next_level,
        controls_enabled: !ui_state.executor.has_exclusive() && ui_state.playback.is_none(),
        game_over: app_state.is_over(),
        score: match app_state.status {
            GameStatus::Solved { score } => Some(score),
            GameStatus::Playing | GameStatus::Revealed => None,
        },
    };
    GameScreenViewModel::new(grid_vm, sidebar_vm)
}

/// `None` while the playback overlay is closed.
#[must_use]
pub(crate) fn build_playback_view_model(ui_state: &UiState) -> Option<PlaybackViewModel> {
    let playback = ui_state.playback.as_ref()?;
    let step = playback.current_step();
    Some(PlaybackViewModel {
        grid_vm: GridViewModel::new(build_step_grid(step), false),
        step_number: playback.cursor() + 1,
        step_count: playback.trace().len(),
        action: step.action,
        position: step.position,
        value: step.value,
        can_go_back: playback.cursor() > 0,
        can_go_forward: playback.cursor() < playback.trace().last_index(),
        autoplaying: playback.state().is_autoplaying(),
        speed: playback.speed().value(),
    })
}

#[cfg(test)]
mod tests {
    use sodo_core::{Board, Digit, Playback, StepAction, Trace, Verdict};

    use super::*;

    #[test]
    fn game_grid_marks_focus_hint_and_flash() {
        let now = Instant::now();
        let mut grid = CellGrid::new();
        let hinted = Position::new(2, 2);
        let commit = grid.place_hint(hinted, Digit::D8).unwrap();
        let _ = grid.apply_verdict(hinted, commit.generation, Verdict::Correct, now);
        grid.set_focus(Position::new(0, 1));
        let _ = grid.enter_text("x", now);

        let cells = build_game_grid(&grid);

        let hint_cell = &cells[hinted.index()];
        assert_eq!(hint_cell.value, Some(Digit::D8));
        assert!(hint_cell.visual_state.contains(GridVisualState::HINT | GridVisualState::CORRECT));

        let focused = &cells[Position::new(0, 1).index()];
        assert!(focused.visual_state.contains(GridVisualState::FOCUSED | GridVisualState::INVALID));
        assert_eq!(focused.value, None);

        assert!(cells[Position::new(8, 8).index()].visual_state.is_empty());
    }

    #[test]
    fn game_grid_marks_wrong_and_revealed_cells() {
        let now = Instant::now();
        let mut grid = CellGrid::new();
        grid.set_focus(Position::new(0, 0));
        let sodo_core::InputOutcome::Committed(commit) = grid.enter_text("3", now) else {
            panic!("expected a commit");
        };
        let _ = grid.mark_wrong(commit.pos, commit.generation);

        let cells = build_game_grid(&grid);
        assert!(cells[commit.pos.index()].visual_state.contains(GridVisualState::WRONG));

        let mut solution = Board::new();
        for pos in Position::ALL {
            solution.set(pos, Some(Digit::D9));
        }
        grid.reveal(&solution);

        let cells = build_game_grid(&grid);
        let fixed = &cells[commit.pos.index()];
        assert_eq!(fixed.value, Some(Digit::D9));
        assert_eq!(fixed.visual_state, GridVisualState::REVEALED);
    }

    #[test]
    fn playback_view_highlights_only_the_affected_cell() {
        let mut board = Board::new();
        board.set(Position::new(3, 4), Some(Digit::D2));
        let trace = Trace::new(vec![
            Step {
                board,
                action: StepAction::Place,
                position: Position::new(3, 4),
                value: Some(Digit::D2),
            },
            Step {
                board: Board::new(),
                action: StepAction::Remove,
                position: Position::new(3, 4),
                value: None,
            },
        ])
        .unwrap();
        let mut playback = Playback::new(trace);

        let placed = build_step_grid(playback.current_step());
        assert_eq!(placed[Position::new(3, 4).index()].visual_state, GridVisualState::PLACED);
        assert_eq!(placed[Position::new(3, 4).index()].value, Some(Digit::D2));
        assert_eq!(
            placed
                .iter()
                .filter(|cell| !cell.visual_state.is_empty())
                .count(),
            1
        );

        let _ = playback.next_step();
        let removed = build_step_grid(playback.current_step());
        assert_eq!(removed[Position::new(3, 4).index()].visual_state, GridVisualState::REMOVED);
        assert_eq!(removed[Position::new(3, 4).index()].value, None);
    }
}
