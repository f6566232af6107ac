use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        grid::{self, GridViewModel},
        sidebar::{self, SidebarViewModel},
    },
};

const SIDEBAR_WIDTH: f32 = 220.0;

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) grid_vm: GridViewModel,
    pub(crate) sidebar_vm: SidebarViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(grid_vm: GridViewModel, sidebar_vm: SidebarViewModel) -> Self {
        Self {
            grid_vm,
            sidebar_vm,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size();
    let grid_room = (available.x - SIDEBAR_WIDTH - spacing.x * 3.0).min(available.y - spacing.y * 2.0);
    let cell_size = grid::cell_size_for(grid_room);
    let grid_side = grid::grid_side(cell_size);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_side))
        .size(Size::exact(spacing.x))
        .size(Size::exact(SIDEBAR_WIDTH))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(grid_side))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, cell_size, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
            strip.cell(|ui| {
                sidebar::show(ui, &vm.sidebar_vm, action_queue);
            });
            strip.empty();
        });
}
