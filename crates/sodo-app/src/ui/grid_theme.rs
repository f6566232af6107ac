use eframe::egui::{Color32, Visuals};

/// Color palette for grid rendering.
///
/// Structural colors follow the current `Visuals`; the feedback colors
/// (flashes, hint and wrong marks, playback tints) are fixed so they read the same in
/// light and dark mode.
#[derive(Debug, Clone)]
pub(crate) struct GridPalette {
    pub(crate) cell_bg_default: Color32,
    pub(crate) cell_bg_given: Color32,
    pub(crate) cell_bg_focused: Color32,
    pub(crate) cell_bg_hint: Color32,

    pub(crate) flash_invalid: Color32,
    pub(crate) flash_correct: Color32,
    pub(crate) flash_error: Color32,
    pub(crate) mark_wrong: Color32,

    pub(crate) tint_placed: Color32,
    pub(crate) tint_removed: Color32,

    pub(crate) border_inactive: Color32,
    pub(crate) border_focused: Color32,

    pub(crate) text_normal: Color32,
    pub(crate) text_given: Color32,
    pub(crate) text_hint: Color32,
    pub(crate) text_revealed: Color32,
}

impl GridPalette {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        let hint = Color32::from_rgb(52, 152, 219);
        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_given: visuals.faint_bg_color,
            cell_bg_focused: visuals.selection.bg_fill,
            cell_bg_hint: hint.gamma_multiply(0.25),

            flash_invalid: Color32::from_rgba_unmultiplied(231, 76, 60, 140),
            flash_correct: Color32::from_rgba_unmultiplied(46, 204, 113, 140),
            flash_error: Color32::from_rgba_unmultiplied(192, 57, 43, 200),
            mark_wrong: Color32::from_rgba_unmultiplied(231, 76, 60, 90),

            tint_placed: Color32::from_rgba_unmultiplied(46, 204, 113, 179),
            tint_removed: Color32::from_rgba_unmultiplied(231, 76, 60, 179),

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_focused: visuals.selection.stroke.color,

            text_normal: visuals.text_color(),
            text_given: visuals.strong_text_color(),
            text_hint: if visuals.dark_mode {
                Color32::from_rgb(93, 173, 226)
            } else {
                hint
            },
            text_revealed: Color32::from_rgb(39, 174, 96),
        }
    }
}
