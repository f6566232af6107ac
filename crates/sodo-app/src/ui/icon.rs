//! Glyphs used as button and heading icons. All are covered by egui's
//! bundled fonts.

pub(crate) const CHECK: &str = "✔";
pub(crate) const CANCEL: &str = "🗙";
pub(crate) const CLOSE: &str = "✕";
pub(crate) const WARNING: &str = "⚠";
pub(crate) const BULB: &str = "💡";
pub(crate) const FILM: &str = "🎞";
pub(crate) const FLAG: &str = "🏁";
pub(crate) const NEW: &str = "🔄";
pub(crate) const PREVIOUS: &str = "◄";
pub(crate) const NEXT: &str = "►";
pub(crate) const PLAY: &str = "▶";
pub(crate) const PAUSE: &str = "⏸";
