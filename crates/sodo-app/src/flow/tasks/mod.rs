use sodo_client::Level;

use crate::{
    action::{AlertKind, ConfirmKind, ServiceAction, SpinnerKind},
    flow::{FlowExecutor, FlowHandle, helpers},
    state::GameId,
    worker::Worker,
};

pub(crate) use self::{check::*, hint::*, validate::*, visualize::*};

mod check;
mod hint;
mod validate;
mod visualize;

/// Loads the first puzzle without asking.
pub(crate) fn spawn_startup_flow(executor: &mut FlowExecutor, worker: &Worker, level: Level) {
    let handle = executor.handle();
    let worker = worker.clone();
    executor.spawn_exclusive(async move { load_game(&handle, &worker, level).await });
}

/// Spawn a new game flow unless another exclusive flow is running.
pub(crate) fn spawn_new_game_flow(executor: &mut FlowExecutor, worker: &Worker, level: Level) {
    let handle = executor.handle();
    let worker = worker.clone();
    executor.spawn_exclusive(async move {
        let result = helpers::show_confirm_dialog(&handle, ConfirmKind::NewGame).await;
        if result.is_confirmed() {
            load_game(&handle, &worker, level).await;
        }
    });
}

// On failure the current game stays on screen.
async fn load_game(handle: &FlowHandle, worker: &Worker, level: Level) {
    let work = worker.new_game(level);
    match helpers::with_spinner(handle, SpinnerKind::LoadPuzzle, work).await {
        Ok(givens) => {
            log::info!("loaded a {level} puzzle");
            handle.request_action(ServiceAction::StartGame { level, givens }.into());
        }
        Err(err) => {
            log::error!("failed to load a {level} puzzle: {err}");
            let _ = helpers::show_alert_dialog(handle, AlertKind::NewGameFailed).await;
        }
    }
}

/// Confirms, then fetches the solution and fills it into the grid.
pub(crate) fn spawn_solve_flow(executor: &mut FlowExecutor, worker: &Worker, game: GameId) {
    let handle = executor.handle();
    let worker = worker.clone();
    executor.spawn_exclusive(async move {
        let result = helpers::show_confirm_dialog(&handle, ConfirmKind::Solve).await;
        if result.is_confirmed() {
            reveal_solution(&handle, &worker, game).await;
        }
    });
}

/// Offers the solution once the mistake budget runs out.
///
/// Runs alongside other flows: the verdict that triggers it can arrive while
/// a hint or visualize flow is still waiting.
pub(crate) fn spawn_mistake_prompt_flow(executor: &mut FlowExecutor, worker: &Worker, game: GameId) {
    let handle = executor.handle();
    let worker = worker.clone();
    executor.spawn(async move {
        let result = helpers::show_confirm_dialog(&handle, ConfirmKind::TooManyMistakes).await;
        if result.is_confirmed() {
            reveal_solution(&handle, &worker, game).await;
        }
    });
}

// The server only knows the solution for the session the client holds, so it
// is fetched through the worker rather than shown in a browser.
async fn reveal_solution(handle: &FlowHandle, worker: &Worker, game: GameId) {
    let work = worker.solution();
    match helpers::with_spinner(handle, SpinnerKind::FetchSolution, work).await {
        Ok(solution) => {
            log::info!("revealing the solution");
            handle.request_action(ServiceAction::RevealSolution { game, solution }.into());
        }
        Err(err) => {
            log::error!("failed to fetch the solution: {err}");
            let _ = helpers::show_alert_dialog(handle, AlertKind::SolutionFailed).await;
        }
    }
}
