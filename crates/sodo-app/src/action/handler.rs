use std::time::Instant;

use sodo_core::{BackspaceOutcome, InputOutcome, Playback, Verdict, VerdictOutcome};

use crate::{
    action::{
        Action, ActionRequestQueue, AlertKind, AppAction, FlowAction, GameSummary, GridAction,
        ModalRequest, PlaybackAction, ServiceAction, UiAction,
    },
    flow::tasks,
    state::{AppState, GameStatus, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
    now: Instant,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
    now: Instant,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action, now);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action, now: Instant) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
        now,
    };
    ctx.handle_action(action);
}

/// Advances every deadline-driven piece of state to `now`.
pub(crate) fn tick(app_state: &mut AppState, ui_state: &mut UiState, now: Instant) {
    app_state.grid.tick(now);
    if let Some(playback) = &mut ui_state.playback
        && playback.tick(now)
    {
        log::trace!("playback advanced to step {}", playback.cursor());
    }
}

impl ActionContext<'_> {
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::App(action) => action.execute(self),
            Action::Ui(action) => action.execute(self.ui_state),
            Action::Flow(action) => action.execute(self.app_state, self.ui_state),
        }
    }
}

impl AppAction {
    fn execute(self, ctx: &mut ActionContext<'_>) {
        match self {
            AppAction::Grid(action) => {
                if ctx.app_state.is_over() {
                    log::trace!("grid input ignored after the game ended: {action:?}");
                } else if ctx.ui_state.accepts_grid_input() {
                    action.execute(ctx);
                } else {
                    log::trace!("grid input ignored while an overlay is open: {action:?}");
                }
            }
            AppAction::Service(action) => action.execute(ctx),
            AppAction::Playback(action) => action.execute(ctx.ui_state, ctx.now),
        }
    }
}

impl GridAction {
    fn execute(self, ctx: &mut ActionContext<'_>) {
        let grid = &mut ctx.app_state.grid;
        let outcome = match self {
            GridAction::Focus(pos) => {
                grid.set_focus(pos);
                return;
            }
            GridAction::ClearFocus => {
                grid.clear_focus();
                return;
            }
            GridAction::MoveFocus(direction) => {
                let _ = grid.move_focus(direction);
                return;
            }
            GridAction::Backspace => {
                if grid.backspace() == BackspaceOutcome::MovedLeft {
                    log::trace!("backspace moved focus to {:?}", grid.focus());
                }
                return;
            }
            GridAction::Delete => {
                let _ = grid.delete();
                return;
            }
            GridAction::EnterText(text) => grid.enter_text(&text, ctx.now),
            GridAction::Paste(text) => grid.paste(&text, ctx.now),
        };

        match outcome {
            InputOutcome::Committed(commit) => tasks::spawn_validate_flow(
                &mut ctx.ui_state.executor,
                &ctx.ui_state.worker,
                ctx.app_state.game_id,
                commit,
            ),
            InputOutcome::Rejected(err) => log::debug!("input rejected: {err}"),
            InputOutcome::Ignored => {}
        }
    }
}

impl ServiceAction {
    fn execute(self, ctx: &mut ActionContext<'_>) {
        let app_state = &mut *ctx.app_state;
        match self {
            ServiceAction::StartGame { level, givens } => {
                app_state.start_game(level, &givens, ctx.now);
                ctx.ui_state.playback = None;
            }
            ServiceAction::ApplyVerdict {
                game,
                commit,
                verdict,
            } => {
                if game != app_state.game_id {
                    log::debug!("dropping verdict for {} from a previous game", commit.pos);
                    return;
                }
                if app_state.is_over() {
                    log::debug!("dropping verdict for {} after the game ended", commit.pos);
                    return;
                }
                let outcome =
                    app_state
                        .grid
                        .apply_verdict(commit.pos, commit.generation, verdict, ctx.now);
                if outcome == VerdictOutcome::Stale {
                    log::debug!("dropping stale verdict for {}", commit.pos);
                    return;
                }
                if let Verdict::Incorrect { .. } = verdict
                    && app_state.mistakes.record().is_reached_ceiling()
                {
                    log::info!("mistake budget exhausted");
                    tasks::spawn_mistake_prompt_flow(
                        &mut ctx.ui_state.executor,
                        &ctx.ui_state.worker,
                        game,
                    );
                }
            }
            ServiceAction::ApplyHint { game, pos, digit } => {
                if game != app_state.game_id || app_state.is_over() {
                    log::debug!("dropping hint for {pos} from a finished game");
                    return;
                }
                let Some(commit) = app_state.grid.place_hint(pos, digit) else {
                    log::warn!("hint for given cell {pos} ignored");
                    return;
                };
                let _ = app_state.hints.record();
                tasks::spawn_validate_flow(
                    &mut ctx.ui_state.executor,
                    &ctx.ui_state.worker,
                    app_state.game_id,
                    commit,
                );
            }
            ServiceAction::ApplyCheck {
                game,
                entries,
                wrong,
            } => {
                if game != app_state.game_id || app_state.is_over() {
                    log::debug!("dropping check result from a finished game");
                    return;
                }
                let mut reached_ceiling = false;
                for commit in entries.iter().filter(|commit| wrong.contains(&commit.pos)) {
                    if app_state.grid.mark_wrong(commit.pos, commit.generation).is_stale() {
                        log::debug!("{} changed during the check", commit.pos);
                    }
                    // The server counts every wrong entry as a mistake.
                    reached_ceiling |= app_state.mistakes.record().is_reached_ceiling();
                }

                if !wrong.is_empty() {
                    ctx.ui_state.modals.push_back(ModalRequest::Alert {
                        kind: AlertKind::CheckMistakes { count: wrong.len() },
                        responder: None,
                    });
                    if reached_ceiling {
                        log::info!("mistake budget exhausted");
                        tasks::spawn_mistake_prompt_flow(
                            &mut ctx.ui_state.executor,
                            &ctx.ui_state.worker,
                            game,
                        );
                    }
                    return;
                }

                let unchanged = entries
                    .iter()
                    .all(|commit| app_state.grid.cell(commit.pos).generation() == commit.generation);
                if !unchanged || !app_state.grid.is_complete() {
                    log::debug!("board changed during the check; not marking it solved");
                    return;
                }
                let elapsed = app_state.elapsed(ctx.now);
                let summary = GameSummary {
                    level: app_state.level,
                    elapsed,
                    hints: app_state.hints.count(),
                    mistakes: app_state.mistakes.count(),
                    score: sodo_core::score(
                        elapsed,
                        app_state.hints.count(),
                        app_state.mistakes.count(),
                    ),
                };
                log::info!("puzzle solved with score {}", summary.score);
                app_state.grid.clear_focus();
                app_state.finish(
                    GameStatus::Solved {
                        score: summary.score,
                    },
                    ctx.now,
                );
                ctx.ui_state.modals.push_back(ModalRequest::Alert {
                    kind: AlertKind::Solved(summary),
                    responder: None,
                });
            }
            ServiceAction::RevealSolution { game, solution } => {
                if game != app_state.game_id || app_state.status.is_solved() {
                    log::debug!("dropping solution for a finished game");
                    return;
                }
                app_state.grid.reveal(&solution);
                app_state.finish(GameStatus::Revealed, ctx.now);
            }
        }
    }
}

impl PlaybackAction {
    fn execute(self, ui_state: &mut UiState, now: Instant) {
        if let PlaybackAction::Open(trace) = self {
            if ui_state.playback.is_some() {
                log::warn!("playback already open; new trace dropped");
            } else {
                ui_state.playback = Some(Playback::new(trace));
            }
            return;
        }
        if let PlaybackAction::Close = self {
            ui_state.playback = None;
            return;
        }

        let Some(playback) = &mut ui_state.playback else {
            return;
        };
        match self {
            PlaybackAction::PreviousStep => {
                let _ = playback.previous_step();
            }
            PlaybackAction::NextStep => {
                let _ = playback.next_step();
            }
            PlaybackAction::ToggleAutoplay => {
                let state = playback.toggle_autoplay(now);
                log::debug!("playback {state:?}");
            }
            PlaybackAction::SetSpeed(value) => playback.set_speed(value, now),
            PlaybackAction::Open(_) | PlaybackAction::Close => {}
        }
    }
}

impl UiAction {
    fn execute(self, ui_state: &mut UiState) {
        match self {
            UiAction::OpenModal(modal_request) => {
                ui_state.modals.push_back(modal_request);
            }
            UiAction::CloseModal => {
                let _ = ui_state.modals.pop_front();
            }
            UiAction::StartSpinner { id, kind } => {
                ui_state.spinner_state.start(id, kind);
            }
            UiAction::StopSpinner { id } => {
                ui_state.spinner_state.stop(id);
            }
            UiAction::SelectNextLevel(level) => {
                ui_state.next_level = level;
            }
        }
    }
}

impl FlowAction {
    fn execute(self, app_state: &AppState, ui_state: &mut UiState) {
        let executor = &mut ui_state.executor;
        let worker = &ui_state.worker;
        match self {
            FlowAction::NewGame => tasks::spawn_new_game_flow(executor, worker, ui_state.next_level),
            FlowAction::Visualize => tasks::spawn_visualize_flow(executor, worker),
            FlowAction::RequestHint | FlowAction::Solve | FlowAction::Check
                if app_state.is_over() =>
            {
                log::debug!("{self:?} ignored after the game ended");
            }
            FlowAction::RequestHint => tasks::spawn_hint_flow(executor, worker, app_state),
            FlowAction::Solve => tasks::spawn_solve_flow(executor, worker, app_state.game_id),
            FlowAction::Check => tasks::spawn_check_flow(executor, worker, app_state),
        }
    }
}
