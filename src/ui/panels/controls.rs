// DataStream - ui/panels/controls.rs
//
// Control bar: search field plus Load / Search / Quit buttons.
// Returns the action the user picked; the app shell carries it out.

use crate::app::state::AppState;
use crate::util::constants::SEARCH_FIELD_CHARS;

/// A user gesture from the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Load,
    Search,
    Quit,
}

/// Render the control bar. Search is enabled only once a document is loaded.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlAction> {
    let mut action = None;
    let can_search = state.can_search();

    ui.horizontal(|ui| {
        ui.label("Search String:");

        let body_font = egui::TextStyle::Body.resolve(ui.style());
        let char_width = ui.fonts(|f| f.glyph_width(&body_font, 'M'));
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .desired_width(char_width * SEARCH_FIELD_CHARS)
                .hint_text("substring"),
        );
        // Enter in the field acts like the Search button.
        if can_search && response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
        {
            action = Some(ControlAction::Search);
        }

        if ui.button("Load File").clicked() {
            action = Some(ControlAction::Load);
        }
        let search_btn = ui
            .add_enabled(can_search, egui::Button::new("Search"))
            .on_disabled_hover_text("Load a file first");
        if search_btn.clicked() {
            action = Some(ControlAction::Search);
        }
        if ui.button("Quit").clicked() {
            action = Some(ControlAction::Quit);
        }
    });

    action
}
