use eframe::egui::{Align, Button, Context, Id, Layout, Modal, RichText, Slider};
use sodo_core::{Digit, Position, Speed, StepAction};

use crate::{
    action::{ActionRequestQueue, PlaybackAction},
    ui::{
        grid::{self, GridViewModel},
        icon,
    },
};

const PLAYBACK_CELL_SIZE: f32 = 36.0;

#[derive(Debug, Clone)]
pub(crate) struct PlaybackViewModel {
    pub(crate) grid_vm: GridViewModel,
    /// 1-based.
    pub(crate) step_number: usize,
    pub(crate) step_count: usize,
    pub(crate) action: StepAction,
    pub(crate) position: Position,
    pub(crate) value: Option<Digit>,
    pub(crate) can_go_back: bool,
    pub(crate) can_go_forward: bool,
    pub(crate) autoplaying: bool,
    pub(crate) speed: u16,
}

impl PlaybackViewModel {
    fn step_text(&self) -> String {
        let Self {
            action, position, ..
        } = self;
        match self.value {
            Some(digit) => format!("{action} {digit} at {position}"),
            None => format!("{action} at {position}"),
        }
    }
}

/// Draws the playback overlay.
///
/// The overlay ignores backdrop clicks and Escape; only the close button
/// tears it down.
pub(crate) fn show(ctx: &Context, vm: &PlaybackViewModel, action_queue: &mut ActionRequestQueue) {
    let _ = Modal::new(Id::new("solver_playback")).show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Solving Visualization");
            ui.with_layout(
                Layout::right_to_left(Align::Center),
                |ui| {
                    if ui.button(format!("{} Close", icon::CLOSE)).clicked() {
                        action_queue.request(PlaybackAction::Close.into());
                    }
                },
            );
        });
        ui.add_space(4.0);

        grid::show(ui, &vm.grid_vm, PLAYBACK_CELL_SIZE, action_queue);
        ui.add_space(4.0);

        ui.label(RichText::new(format!("Step {} / {}", vm.step_number, vm.step_count)).strong());
        ui.label(vm.step_text());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let previous = ui.add_enabled(
                vm.can_go_back,
                Button::new(format!("{} Previous", icon::PREVIOUS)),
            );
            if previous.clicked() {
                action_queue.request(PlaybackAction::PreviousStep.into());
            }

            let next = ui.add_enabled(
                vm.can_go_forward,
                Button::new(format!("Next {}", icon::NEXT)),
            );
            if next.clicked() {
                action_queue.request(PlaybackAction::NextStep.into());
            }

            let toggle_label = if vm.autoplaying {
                format!("{} Stop", icon::PAUSE)
            } else {
                format!("{} Auto Play", icon::PLAY)
            };
            if ui.button(toggle_label).clicked() {
                action_queue.request(PlaybackAction::ToggleAutoplay.into());
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = vm.speed;
            let slider = ui.add(Slider::new(&mut speed, Speed::MIN..=Speed::MAX).show_value(false));
            if slider.changed() && speed != vm.speed {
                action_queue.request(PlaybackAction::SetSpeed(speed).into());
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::grid::{GridCell, GridVisualState};

    fn vm(value: Option<Digit>, action: StepAction) -> PlaybackViewModel {
        let cells = std::array::from_fn(|_| GridCell {
            value: None,
            given: false,
            visual_state: GridVisualState::empty(),
        });
        PlaybackViewModel {
            grid_vm: GridViewModel::new(cells, false),
            step_number: 1,
            step_count: 2,
            action,
            position: Position::new(3, 4),
            value,
            can_go_back: false,
            can_go_forward: true,
            autoplaying: false,
            speed: Speed::DEFAULT,
        }
    }

    #[test]
    fn step_text_names_action_and_cell() {
        let placed = vm(Some(Digit::D2), StepAction::Place).step_text();
        assert!(placed.starts_with("place 2 at "));
        let removed = vm(None, StepAction::Remove).step_text();
        assert!(removed.starts_with("remove at "));
    }
}
