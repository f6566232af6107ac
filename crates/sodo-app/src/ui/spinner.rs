use eframe::egui::{Context, Id, Modal, Spinner};

use crate::action::SpinnerKind;

pub(crate) fn show(ctx: &Context, spinner: SpinnerKind) {
    ctx.request_repaint();
    let (id, heading, label) = match spinner {
        SpinnerKind::LoadPuzzle => ("loading_puzzle", "Loading...", "Fetching a new puzzle..."),
        SpinnerKind::FetchTrace => (
            "fetching_trace",
            "Solving...",
            "Recording the solver's steps...",
        ),
        SpinnerKind::FetchSolution => ("fetching_solution", "Solving...", "Fetching the solution..."),
        SpinnerKind::CheckSolution => ("checking_solution", "Checking...", "Checking your solution..."),
    };
    Modal::new(Id::new(id)).show(ctx, |ui| {
        ui.heading(heading);
        ui.add(Spinner::new());
        ui.label(label);
    });
}
