use std::time::Duration;

use eframe::egui::{Button, ComboBox, RichText, Ui};
use sodo_client::Level;
use sodo_core::Budget;

use crate::{
    action::{ActionRequestQueue, FlowAction, UiAction},
    ui::icon,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetView {
    pub(crate) used: u32,
    pub(crate) ceiling: u32,
}

impl From<&Budget> for BudgetView {
    fn from(budget: &Budget) -> Self {
        Self {
            used: budget.count(),
            ceiling: budget.ceiling(),
        }
    }
}

impl BudgetView {
    fn is_exhausted(self) -> bool {
        self.used >= self.ceiling
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel {
    pub(crate) mistakes: BudgetView,
    pub(crate) hints: BudgetView,
    pub(crate) elapsed: Duration,
    pub(crate) level: Level,
    pub(crate) next_level: Level,
    /// False while an exclusive flow or the playback overlay is running.
    pub(crate) controls_enabled: bool,
    /// Solved or revealed; only the new game controls stay usable.
    pub(crate) game_over: bool,
    pub(crate) score: Option<u32>,
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn budget_label(ui: &Ui, name: &str, budget: BudgetView) -> RichText {
    let text = RichText::new(format!("{name}: {}/{}", budget.used, budget.ceiling));
    if budget.is_exhausted() {
        text.color(ui.visuals().warn_fg_color)
    } else {
        text
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.group(|ui| {
            ui.label(RichText::new(vm.level.name()).size(20.0));
            ui.label(RichText::new(format_elapsed(vm.elapsed)).monospace().size(18.0));
            ui.label(budget_label(ui, "Mistakes", vm.mistakes));
            ui.label(budget_label(ui, "Hints", vm.hints));
            if let Some(score) = vm.score {
                ui.label(RichText::new(format!("Score: {score}")).strong());
            }
        });
        ui.add_space(8.0);

        ui.add_enabled_ui(vm.controls_enabled, |ui| {
            let playing = !vm.game_over;
            let check = ui.add_enabled(playing, Button::new(format!("{} Check", icon::CHECK)));
            if check.clicked() {
                action_queue.request(FlowAction::Check.into());
            }
            let hint = ui.add_enabled(playing, Button::new(format!("{} Hint", icon::BULB)));
            if hint.clicked() {
                action_queue.request(FlowAction::RequestHint.into());
            }
            let visualize = ui.add(Button::new(format!("{} Visualize", icon::FILM)));
            if visualize.clicked() {
                action_queue.request(FlowAction::Visualize.into());
            }
            let solve = ui.add_enabled(playing, Button::new(format!("{} Solve", icon::FLAG)));
            if solve.clicked() {
                action_queue.request(FlowAction::Solve.into());
            }

            ui.separator();

            let mut next_level = vm.next_level;
            ComboBox::from_label("Difficulty")
                .selected_text(next_level.name())
                .show_ui(ui, |ui| {
                    for level in Level::ALL {
                        ui.selectable_value(&mut next_level, level, level.name());
                    }
                });
            if next_level != vm.next_level {
                action_queue.request(UiAction::SelectNextLevel(next_level).into());
            }
            let new_game = ui.add(Button::new(format!("{} New Game", icon::NEW)));
            if new_game.clicked() {
                action_queue.request(FlowAction::NewGame.into());
            }
        });
    });
}
