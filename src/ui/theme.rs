// DataStream - ui/theme.rs
//
// Visuals, dialog colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::app::state::DialogKind;
use egui::Color32;

/// Apply dark or light visuals and the body/monospace font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        for text_style in [
            egui::TextStyle::Body,
            egui::TextStyle::Button,
            egui::TextStyle::Monospace,
        ] {
            if let Some(font) = style.text_styles.get_mut(&text_style) {
                font.size = font_size;
            }
        }
    });
}

/// Accent colour for a dialog's title icon.
pub fn dialog_colour(kind: DialogKind) -> Color32 {
    match kind {
        DialogKind::Error => Color32::from_rgb(220, 38, 38),  // Red 600
        DialogKind::Warning => Color32::from_rgb(217, 119, 6), // Amber 600
        DialogKind::Info => Color32::from_rgb(37, 99, 235),    // Blue 600
    }
}

/// Icon glyph shown beside a dialog message.
pub fn dialog_icon(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::Error => "\u{2716}",
        DialogKind::Warning => "\u{26a0}",
        DialogKind::Info => "\u{2139}",
    }
}

/// Background behind each occurrence of the search term in the results pane.
pub fn match_highlight(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgba_premultiplied(217, 119, 6, 90)
    } else {
        Color32::from_rgb(253, 230, 138) // Amber 200
    }
}

/// Layout constants.
pub const PANE_SPACING: f32 = 10.0;
pub const DIALOG_MIN_WIDTH: f32 = 320.0;
