use crate::{
    action::{AlertKind, ConfirmKind, PlaybackAction, SpinnerKind},
    flow::{FlowExecutor, helpers},
    worker::Worker,
};

/// Confirms, fetches the solver trace under a spinner and opens playback.
///
/// Any failure, including an empty trace or an `{error}` reply, leaves the
/// overlay closed and shows a notice.
pub(crate) fn spawn_visualize_flow(executor: &mut FlowExecutor, worker: &Worker) {
    let handle = executor.handle();
    let worker = worker.clone();
    executor.spawn_exclusive(async move {
        let result = helpers::show_confirm_dialog(&handle, ConfirmKind::Visualize).await;
        if !result.is_confirmed() {
            return;
        }
        let work = worker.visualize();
        match helpers::with_spinner(&handle, SpinnerKind::FetchTrace, work).await {
            Ok(trace) => {
                log::info!("opening playback with {} steps", trace.len());
                handle.request_action(PlaybackAction::Open(trace).into());
            }
            Err(err) => {
                log::error!("failed to fetch the solver trace: {err}");
                let _ = helpers::show_alert_dialog(&handle, AlertKind::VisualizeFailed).await;
            }
        }
    });
}
