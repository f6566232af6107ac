use eframe::egui::Context;

use crate::action::{ActionRequestQueue, ModalRequest};

mod dialogs;

pub(crate) fn show(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    modal_request: &mut ModalRequest,
) {
    match modal_request {
        ModalRequest::Confirm { kind, responder } => {
            dialogs::show_confirm(ctx, action_queue, *kind, responder);
        }
        ModalRequest::Alert { kind, responder } => {
            dialogs::show_alert(ctx, action_queue, kind, responder);
        }
    }
}
