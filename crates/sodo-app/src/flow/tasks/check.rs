use sodo_core::Commit;

use crate::{
    action::{AlertKind, ServiceAction, SpinnerKind},
    flow::{FlowExecutor, helpers},
    state::AppState,
    worker::Worker,
};

/// Checks the whole board once every cell is filled.
///
/// An incomplete board is reported without contacting the server. Otherwise
/// every player and hint entry is sent for checking under a spinner and the
/// result is applied to the grid.
pub(crate) fn spawn_check_flow(executor: &mut FlowExecutor, worker: &Worker, app_state: &AppState) {
    if executor.has_exclusive() {
        return;
    }
    let handle = executor.handle();
    if !app_state.grid.is_complete() {
        executor.spawn_exclusive(async move {
            let _ = helpers::show_alert_dialog(&handle, AlertKind::CheckIncomplete).await;
        });
        return;
    }

    let worker = worker.clone();
    let game = app_state.game_id;
    let entries: Vec<Commit> = app_state.grid.entries().collect();
    executor.spawn_exclusive(async move {
        let work = worker.check(entries.iter().map(|commit| (commit.pos, commit.digit)).collect());
        match helpers::with_spinner(&handle, SpinnerKind::CheckSolution, work).await {
            Ok(wrong) => {
                log::info!("board checked: {} of {} entries wrong", wrong.len(), entries.len());
                handle.request_action(
                    ServiceAction::ApplyCheck {
                        game,
                        entries,
                        wrong,
                    }
                    .into(),
                );
            }
            Err(err) => {
                log::error!("board check failed: {err}");
                let _ = helpers::show_alert_dialog(&handle, AlertKind::CheckFailed).await;
            }
        }
    });
}
