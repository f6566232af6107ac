use sodo_core::Commit;

use crate::{
    action::ServiceAction,
    flow::FlowExecutor,
    state::GameId,
    worker::Worker,
};

/// Sends a fresh commit to the authority.
///
/// Validation flows never block each other; staleness is sorted out when the
/// verdict is applied. Failures are logged and the cell is left as it is.
pub(crate) fn spawn_validate_flow(
    executor: &mut FlowExecutor,
    worker: &Worker,
    game: GameId,
    commit: Commit,
) {
    let handle = executor.handle();
    let worker = worker.clone();
    executor.spawn(async move {
        match worker.validate(commit.pos, commit.digit).await {
            Ok(verdict) => {
                log::debug!("verdict for {} at {}: {verdict:?}", commit.digit, commit.pos);
                handle.request_action(
                    ServiceAction::ApplyVerdict {
                        game,
                        commit,
                        verdict,
                    }
                    .into(),
                );
            }
            Err(err) => {
                log::error!("validation of {} at {} failed: {err}", commit.digit, commit.pos);
            }
        }
    });
}
