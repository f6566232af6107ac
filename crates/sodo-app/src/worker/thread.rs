//! Native worker backend using a background thread and channel.

use std::sync::mpsc;

use sodo_client::SolverService;

use super::Envelope;

/// Starts the worker thread and returns its request sender.
///
/// The thread exits once every sender is dropped.
pub(super) fn spawn(service: Box<dyn SolverService>) -> mpsc::Sender<Envelope> {
    let (tx, rx) = mpsc::channel::<Envelope>();
    std::thread::spawn(move || {
        while let Ok(envelope) = rx.recv() {
            log::trace!("worker handling {:?}", envelope.request);
            let response = envelope.request.handle(service.as_ref());
            let _ = envelope.response_tx.send(response);
        }
        log::debug!("worker thread stopped");
    });
    tx
}
