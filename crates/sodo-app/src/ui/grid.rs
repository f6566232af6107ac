use std::sync::Arc;

use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use sodo_core::{Digit, Position};

use crate::{
    action::{ActionRequestQueue, GridAction},
    ui::grid_theme::GridPalette,
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u16 {
        const FOCUSED = 0b0000_0000_0001;
        const HINT = 0b0000_0000_0010;
        const INVALID = 0b0000_0000_0100;
        const CORRECT = 0b0000_0000_1000;
        const ERROR = 0b0000_0001_0000;
        const PLACED = 0b0000_0010_0000;
        const REMOVED = 0b0000_0100_0000;
        const WRONG = 0b0000_1000_0000;
        const REVEALED = 0b0001_0000_0000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) value: Option<Digit>,
    pub(crate) given: bool,
    pub(crate) visual_state: GridVisualState,
}

/// A 9x9 board ready to paint. The game board is interactive until the game
/// ends; playback
/// snapshots are not.
#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    cells: [GridCell; 81],
    interactive: bool,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(cells: [GridCell; 81], interactive: bool) -> Self {
        Self { cells, interactive }
    }

    fn cell(&self, pos: Position) -> &GridCell {
        &self.cells[pos.index()]
    }
}

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const THICK_BORDER_WIDTH_RATIO: f32 = 3.0;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const FOCUSED_BORDER_WIDTH_RATIO: f32 = 3.0;

fn base_border_width(cell_size: f32) -> f32 {
    f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0)
}

/// Side length of a grid drawn with `cell_size`, thick borders included.
#[must_use]
pub(crate) fn grid_side(cell_size: f32) -> f32 {
    9.0 * cell_size + base_border_width(cell_size) * THICK_BORDER_WIDTH_RATIO * 4.0
}

/// The largest cell size whose grid fits in `side`.
#[must_use]
pub(crate) fn cell_size_for(side: f32) -> f32 {
    let units = 9.0 + CELL_BORDER_WIDTH_BASE_RATIO * THICK_BORDER_WIDTH_RATIO * 4.0;
    (side / units).max(1.0)
}

impl GridVisualState {
    fn fill_color(self, given: bool, palette: &GridPalette) -> Color32 {
        // Transient feedback wins over the persistent marks.
        if self.contains(Self::PLACED) {
            return palette.tint_placed;
        }
        if self.contains(Self::REMOVED) {
            return palette.tint_removed;
        }
        if self.contains(Self::INVALID) {
            return palette.flash_invalid;
        }
        if self.contains(Self::ERROR) {
            return palette.flash_error;
        }
        if self.contains(Self::CORRECT) {
            return palette.flash_correct;
        }
        if self.contains(Self::WRONG) {
            return palette.mark_wrong;
        }
        if self.contains(Self::FOCUSED) {
            return palette.cell_bg_focused;
        }
        if self.contains(Self::HINT) {
            return palette.cell_bg_hint;
        }
        if given {
            palette.cell_bg_given
        } else {
            palette.cell_bg_default
        }
    }

    fn text_color(self, given: bool, palette: &GridPalette) -> Color32 {
        if given {
            palette.text_given
        } else if self.contains(Self::HINT) {
            palette.text_hint
        } else if self.contains(Self::REVEALED) {
            palette.text_revealed
        } else {
            palette.text_normal
        }
    }

    fn border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base = base_border_width(cell_size);
        if self.contains(Self::FOCUSED) {
            Stroke::new(base * FOCUSED_BORDER_WIDTH_RATIO, palette.border_focused)
        } else {
            Stroke::new(base * THIN_BORDER_WIDTH_RATIO, palette.border_inactive)
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    cell_size: f32,
    action_queue: &mut ActionRequestQueue,
) {
    let style = Arc::clone(ui.style());
    let palette = GridPalette::from_visuals(&style.visuals);
    let side = grid_side(cell_size);
    let thick = Stroke::new(
        base_border_width(cell_size) * THICK_BORDER_WIDTH_RATIO,
        palette.border_inactive,
    );

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
    let inner_rect = rect.shrink(thick.width);

    let painter = ui.painter();
    painter.rect_stroke(rect, 0.0, thick, StrokeKind::Inside);

    for pos in Position::ALL {
        let cell = vm.cell(pos);
        let vs = cell.visual_state;

        let col = f32::from(pos.col());
        let row = f32::from(pos.row());
        let cell_min = inner_rect.min
            + Vec2::new(
                cell_size * col + (col / 3.0).floor() * thick.width,
                cell_size * row + (row / 3.0).floor() * thick.width,
            );
        let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));

        painter.rect_filled(cell_rect, 0.0, vs.fill_color(cell.given, &palette));
        if let Some(digit) = cell.value {
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                digit.as_str(),
                FontId::proportional(cell_size * 0.7),
                vs.text_color(cell.given, &palette),
            );
        }
        painter.rect_stroke(
            cell_rect,
            0.0,
            vs.border(&palette, cell_size),
            StrokeKind::Inside,
        );

        if vm.interactive {
            let response = ui.interact(cell_rect, ui.id().with(pos), Sense::click());
            if response.clicked() {
                action_queue.request(GridAction::Focus(pos).into());
            }
        }
    }

    draw_box_borders(painter, inner_rect, cell_size, thick);
}

fn draw_box_borders(painter: &Painter, inner_rect: Rect, cell_size: f32, stroke: Stroke) {
    let start = inner_rect.min;
    let end = inner_rect.max;
    let thickness = stroke.width.max(1.0);
    let half = thickness * 0.5;

    for i in [1.0, 2.0] {
        let offset = cell_size * 3.0 * i + thickness * (i - 0.5);
        let x = start.x + offset;
        let column = Rect::from_min_max(Pos2::new(x - half, start.y), Pos2::new(x + half, end.y));
        painter.rect_filled(column, 0.0, stroke.color);

        let y = start.y + offset;
        let row = Rect::from_min_max(Pos2::new(start.x, y - half), Pos2::new(end.x, y + half));
        painter.rect_filled(row, 0.0, stroke.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_round_trips_through_grid_side() {
        for side in [360.0_f32, 541.5, 900.0] {
            let cell = cell_size_for(side);
            assert!((grid_side(cell) - side).abs() < 0.01 * side);
        }
    }

    #[test]
    fn playback_tint_wins_over_other_marks() {
        let palette = GridPalette::from_visuals(&eframe::egui::Visuals::light());
        let vs = GridVisualState::PLACED | GridVisualState::FOCUSED;
        assert_eq!(vs.fill_color(false, &palette), palette.tint_placed);
        assert_eq!(
            GridVisualState::empty().fill_color(true, &palette),
            palette.cell_bg_given
        );
    }
}
