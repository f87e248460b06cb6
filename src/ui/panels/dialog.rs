// DataStream - ui/panels/dialog.rs
//
// Message dialog for load errors, search warnings, and the
// "no matches" notice. Rendered as a centred, non-resizable window that
// stays up until the user presses OK or Escape.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the pending dialog, if any.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.dialog.as_ref() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(dialog.title.as_str())
        .id(egui::Id::new("message_dialog"))
        .collapsible(false)
        .resizable(false)
        .min_width(theme::DIALOG_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(theme::dialog_icon(dialog.kind))
                        .size(22.0)
                        .color(theme::dialog_colour(dialog.kind)),
                );
                ui.label(dialog.message.as_str());
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("  OK  ").clicked() {
                    dismissed = true;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        dismissed = true;
    }
    if dismissed {
        state.dismiss_dialog();
    }
}
