use std::future::Future;

use futures_channel::oneshot;
use portable_atomic::{AtomicU64, Ordering};

use crate::{
    action::{
        AlertKind, AlertResult, ConfirmKind, ConfirmResult, ModalRequest, SpinnerId, SpinnerKind,
        UiAction,
    },
    flow::FlowHandle,
};

/// Opens a confirm dialog and waits for the answer. A dialog torn down
/// without an answer counts as cancelled.
pub(super) async fn show_confirm_dialog(handle: &FlowHandle, kind: ConfirmKind) -> ConfirmResult {
    let (responder, receiver) = oneshot::channel();
    handle.request_action(
        UiAction::OpenModal(ModalRequest::Confirm {
            kind,
            responder: Some(responder),
        })
        .into(),
    );
    receiver.await.unwrap_or(ConfirmResult::Cancelled)
}

pub(super) async fn show_alert_dialog(handle: &FlowHandle, kind: AlertKind) -> AlertResult {
    let (responder, receiver) = oneshot::channel();
    handle.request_action(
        UiAction::OpenModal(ModalRequest::Alert {
            kind,
            responder: Some(responder),
        })
        .into(),
    );
    receiver.await.unwrap_or(AlertResult::Ok)
}

/// Runs `future` behind a blocking spinner.
///
/// The spinner is removed when the future completes or when the flow is
/// dropped mid-way.
pub(super) async fn with_spinner<F>(handle: &FlowHandle, kind: SpinnerKind, future: F) -> F::Output
where
    F: Future,
{
    let _guard = SpinnerGuard::start(handle, kind);
    future.await
}

struct SpinnerGuard {
    handle: FlowHandle,
    id: SpinnerId,
}

impl SpinnerGuard {
    fn start(handle: &FlowHandle, kind: SpinnerKind) -> Self {
        static NEXT_SPINNER_ID: AtomicU64 = AtomicU64::new(1);

        let id = SpinnerId::new(NEXT_SPINNER_ID.fetch_add(1, Ordering::Relaxed));
        handle.request_action(UiAction::StartSpinner { id, kind }.into());
        Self {
            handle: handle.clone(),
            id,
        }
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.handle
            .request_action(UiAction::StopSpinner { id: self.id }.into());
    }
}
