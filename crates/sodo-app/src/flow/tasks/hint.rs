use sodo_core::Position;

use crate::{
    action::{AlertKind, ServiceAction},
    flow::{FlowExecutor, FlowHandle, helpers},
    state::{AppState, GameId},
    worker::Worker,
};

/// Picks the cell a hint would fill, or the notice explaining why not.
fn hint_target(app_state: &AppState) -> Result<Position, AlertKind> {
    let pos = app_state.grid.focus().ok_or(AlertKind::HintNoFocus)?;
    if !app_state.grid.cell(pos).is_empty() {
        return Err(AlertKind::HintCellFilled);
    }
    if app_state.hints.is_exhausted() {
        return Err(AlertKind::HintsExhausted);
    }
    Ok(pos)
}

/// Spawn a hint flow if no other exclusive flow is active.
///
/// Precondition failures are reported without contacting the server.
pub(crate) fn spawn_hint_flow(executor: &mut FlowExecutor, worker: &Worker, app_state: &AppState) {
    if executor.has_exclusive() {
        return;
    }
    let handle = executor.handle();
    match hint_target(app_state) {
        Ok(pos) => {
            let worker = worker.clone();
            let game = app_state.game_id;
            executor.spawn_exclusive(hint_flow(handle, worker, game, pos));
        }
        Err(kind) => {
            executor.spawn_exclusive(async move {
                let _ = helpers::show_alert_dialog(&handle, kind).await;
            });
        }
    }
}

async fn hint_flow(handle: FlowHandle, worker: Worker, game: GameId, pos: Position) {
    match worker.hint(pos).await {
        Ok(digit) => {
            log::debug!("hint for {pos}: {digit}");
            handle.request_action(ServiceAction::ApplyHint { game, pos, digit }.into());
        }
        Err(err) => {
            log::warn!("hint for {pos} failed: {err}");
            let kind = match err.rejection() {
                Some(message) => AlertKind::HintRejected {
                    message: message.to_owned(),
                },
                None => AlertKind::HintFailed,
            };
            let _ = helpers::show_alert_dialog(&handle, kind).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use sodo_client::Level;
    use sodo_core::{Board, Digit};

    use super::*;

    fn state_with_givens() -> AppState {
        let now = Instant::now();
        let mut givens = Board::new();
        givens.set(Position::new(0, 0), Some(Digit::D5));
        let mut app_state = AppState::new(Level::Beginner, now);
        app_state.start_game(Level::Beginner, &givens, now);
        app_state
    }

    #[test]
    fn preconditions_are_checked_in_order() {
        let mut app_state = state_with_givens();
        for _ in 0..3 {
            app_state.hints.record();
        }

        // Exhausted budget, filled cell and missing focus all apply; focus wins.
        assert_eq!(hint_target(&app_state), Err(AlertKind::HintNoFocus));

        app_state.grid.set_focus(Position::new(0, 0));
        assert_eq!(hint_target(&app_state), Err(AlertKind::HintCellFilled));

        app_state.grid.set_focus(Position::new(0, 1));
        assert_eq!(hint_target(&app_state), Err(AlertKind::HintsExhausted));
    }

    #[test]
    fn empty_focused_cell_is_a_target() {
        let mut app_state = state_with_givens();
        app_state.grid.set_focus(Position::new(4, 4));
        assert_eq!(hint_target(&app_state), Ok(Position::new(4, 4)));
    }
}
