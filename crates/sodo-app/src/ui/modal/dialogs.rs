use std::{borrow::Cow, fmt};

use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{
        ActionRequestQueue, AlertKind, AlertResponder, AlertResult, ConfirmKind, ConfirmResponder,
        ConfirmResult, GameSummary, Responder, UiAction,
    },
    ui::icon,
};

/// Draws a modal frame. Returns true when the user dismissed it from
/// outside (backdrop click or Escape) or a button closed it.
fn show_dialog<Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: impl Into<RichText>,
    body: Body,
    buttons: Buttons,
) -> bool
where
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });
    modal.should_close()
}

fn focused_button(ui: &mut Ui, label: String) -> Response {
    let response = ui.button(label);
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
    response
}

fn send_response<T>(responder: &mut Option<Responder<T>>, response: T) {
    if let Some(responder) = responder.take() {
        let _ = responder.send(response);
    }
}

struct ConfirmDialogSpec {
    id: &'static str,
    heading: &'static str,
    label: &'static str,
    confirm_label: &'static str,
}

impl ConfirmKind {
    fn spec(self) -> ConfirmDialogSpec {
        match self {
            ConfirmKind::NewGame => ConfirmDialogSpec {
                id: "new_game_confirm",
                heading: "New Game?",
                label: "Start a new game? Current progress will be lost.",
                confirm_label: "New Game",
            },
            ConfirmKind::Solve => ConfirmDialogSpec {
                id: "solve_confirm",
                heading: "Show Solution?",
                label: "Are you sure you want to see the solution? This will end your current game.",
                confirm_label: "Show Solution",
            },
            ConfirmKind::TooManyMistakes => ConfirmDialogSpec {
                id: "too_many_mistakes",
                heading: "Too Many Mistakes",
                label: "You have made too many mistakes! Would you like to see the solution?",
                confirm_label: "Show Solution",
            },
            ConfirmKind::Visualize => ConfirmDialogSpec {
                id: "visualize_confirm",
                heading: "Visualize Solver?",
                label: "This will show step-by-step how the algorithm solves the puzzle. Continue?",
                confirm_label: "Continue",
            },
        }
    }
}

struct AlertDialogSpec {
    id: &'static str,
    heading: &'static str,
    body: Cow<'static, str>,
}

impl AlertKind {
    fn icon(&self) -> &'static str {
        match self {
            AlertKind::Solved(_) => icon::FLAG,
            _ => icon::WARNING,
        }
    }

    fn spec(&self) -> AlertDialogSpec {
        match self {
            AlertKind::HintNoFocus => AlertDialogSpec {
                id: "hint_notice",
                heading: "No Cell Selected",
                body: Cow::Borrowed("Please select an empty cell first by clicking on it!"),
            },
            AlertKind::HintCellFilled => AlertDialogSpec {
                id: "hint_notice",
                heading: "Cell Not Empty",
                body: Cow::Borrowed(
                    "Selected cell already has a value. Please choose an empty cell.",
                ),
            },
            AlertKind::HintsExhausted => AlertDialogSpec {
                id: "hint_notice",
                heading: "No Hints Left",
                body: Cow::Borrowed(
                    "You have used all available hints (maximum 3 hints per game).",
                ),
            },
            AlertKind::HintRejected { message } => AlertDialogSpec {
                id: "hint_notice",
                heading: "Hint Unavailable",
                body: Cow::Owned(message.clone()),
            },
            AlertKind::HintFailed => AlertDialogSpec {
                id: "hint_error",
                heading: "Hint Failed",
                body: Cow::Borrowed("Error getting hint. Please try again."),
            },
            AlertKind::VisualizeFailed => AlertDialogSpec {
                id: "visualize_error",
                heading: "Visualization Failed",
                body: Cow::Borrowed("Error visualizing solution. Please try again."),
            },
            AlertKind::NewGameFailed => AlertDialogSpec {
                id: "new_game_error",
                heading: "Could Not Load Puzzle",
                body: Cow::Borrowed(
                    "The puzzle server did not answer. Check that it is running and try again.",
                ),
            },
            AlertKind::SolutionFailed => AlertDialogSpec {
                id: "solution_error",
                heading: "Could Not Load Solution",
                body: Cow::Borrowed("Error getting the solution. Please try again."),
            },
            AlertKind::CheckIncomplete => AlertDialogSpec {
                id: "check_notice",
                heading: "Board Incomplete",
                body: Cow::Borrowed("Please complete all cells before checking."),
            },
            AlertKind::CheckMistakes { count } => AlertDialogSpec {
                id: "check_notice",
                heading: "Not Quite",
                body: Cow::Owned(format!(
                    "There are mistakes in your solution ({count} {}). Incorrect cells are highlighted.",
                    if *count == 1 { "cell" } else { "cells" }
                )),
            },
            AlertKind::CheckFailed => AlertDialogSpec {
                id: "check_error",
                heading: "Check Failed",
                body: Cow::Borrowed("Error checking the solution. Please try again."),
            },
            AlertKind::Solved(summary) => AlertDialogSpec {
                id: "solved",
                heading: "Congratulations!",
                body: Cow::Owned(summary.to_string()),
            },
        }
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed.as_secs();
        writeln!(f, "You solved the {} puzzle!", self.level.name())?;
        writeln!(f, "Time: {:02}:{:02}", secs / 60, secs % 60)?;
        writeln!(f, "Hints used: {}", self.hints)?;
        writeln!(f, "Mistakes: {}", self.mistakes)?;
        write!(f, "Score: {}", self.score)
    }
}

pub(super) fn show_confirm(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    kind: ConfirmKind,
    responder: &mut Option<ConfirmResponder>,
) {
    let spec = kind.spec();
    let should_close = show_dialog(
        ctx,
        Id::new(spec.id),
        spec.heading,
        |ui| {
            ui.label(spec.label);
        },
        |ui| {
            let confirm = focused_button(ui, format!("{} {}", icon::CHECK, spec.confirm_label));
            if confirm.clicked() {
                send_response(responder, ConfirmResult::Confirmed);
                ui.close();
            }
            if ui.button(format!("{} Cancel", icon::CANCEL)).clicked() {
                send_response(responder, ConfirmResult::Cancelled);
                ui.close();
            }
        },
    );

    if should_close {
        send_response(responder, ConfirmResult::Cancelled);
        action_queue.request(UiAction::CloseModal.into());
    }
}

pub(super) fn show_alert(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    kind: &AlertKind,
    responder: &mut Option<AlertResponder>,
) {
    let spec = kind.spec();
    let should_close = show_dialog(
        ctx,
        Id::new(spec.id),
        format!("{} {}", kind.icon(), spec.heading),
        |ui| {
            ui.label(spec.body.as_ref());
        },
        |ui| {
            if focused_button(ui, format!("{} OK", icon::CHECK)).clicked() {
                send_response(responder, AlertResult::Ok);
                ui.close();
            }
        },
    );

    if should_close {
        send_response(responder, AlertResult::Ok);
        action_queue.request(UiAction::CloseModal.into());
    }
}
