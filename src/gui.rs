// DataStream - gui.rs
//
// Top-level eframe::App implementation.
// Owns the event loop side of the application: maps button and menu
// gestures onto AppState calls and lays out the panels.

use crate::app::state::AppState;
use crate::ui;
use crate::ui::panels::controls::ControlAction;

/// The Data Stream Processor application.
pub struct DataStreamApp {
    pub state: AppState,
    /// (dark_mode, font_size) last pushed into the egui style.
    applied_style: Option<(bool, f32)>,
}

impl DataStreamApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied_style: None,
        }
    }

    fn pick_and_load(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text files", &["txt", "log", "csv", "md"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.state.load_file(&path);
        }
    }

    fn handle(&mut self, ctx: &egui::Context, action: ControlAction) {
        match action {
            ControlAction::Load => self.pick_and_load(),
            ControlAction::Search => self.state.run_search(),
            ControlAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}

impl eframe::App for DataStreamApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wanted = (self.state.dark_mode, self.state.font_size);
        if self.applied_style != Some(wanted) {
            ui::theme::apply(ctx, wanted.0, wanted.1);
            self.applied_style = Some(wanted);
        }

        // While a dialog is up the rest of the window ignores input.
        let interactive = self.state.dialog.is_none();
        let mut action: Option<ControlAction> = None;

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        if ui.button("Load File\u{2026}").clicked() {
                            action = Some(ControlAction::Load);
                            ui.close_menu();
                        }
                        let has_results = !self.state.filtered_lines.is_empty();
                        ui.add_enabled_ui(has_results, |ui| {
                            let n = self.state.filtered_lines.len();
                            if ui.button(format!("Copy Filtered Results ({n} lines)")).clicked() {
                                ctx.copy_text(self.state.filtered_report());
                                self.state.status_message =
                                    format!("Copied {n} filtered lines to clipboard.");
                                ui.close_menu();
                            }
                        });
                        ui.separator();
                        if ui.button("Quit").clicked() {
                            action = Some(ControlAction::Quit);
                            ui.close_menu();
                        }
                    });
                    ui.menu_button("View", |ui| {
                        if ui.checkbox(&mut self.state.dark_mode, "Dark mode").clicked() {
                            ui.close_menu();
                        }
                    });
                    ui.menu_button("Help", |ui| {
                        if ui.button("About").clicked() {
                            self.state.show_about = true;
                            ui.close_menu();
                        }
                    });
                });
            });
        });

        // Control bar
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.add_enabled_ui(interactive, |ui| {
                if let Some(picked) = ui::panels::controls::render(ui, &mut self.state) {
                    action = Some(picked);
                }
            });
            ui.add_space(4.0);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                if let Some(first) = self.state.warnings.first() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("\u{26a0} {first}"))
                            .color(ui::theme::dialog_colour(
                                crate::app::state::DialogKind::Warning,
                            )),
                    )
                    .on_hover_text(self.state.warnings.join("\n"));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(badge) = self.state.mode_badge() {
                        ui.label(
                            egui::RichText::new(badge)
                                .strong()
                                .color(ui::theme::dialog_colour(
                                    crate::app::state::DialogKind::Warning,
                                )),
                        );
                        ui.separator();
                    }
                    if let Some(doc) = self.state.document() {
                        let total = doc.line_count();
                        match self.state.last_search_term {
                            Some(_) => {
                                let matched = self.state.filtered_lines.len();
                                ui.label(format!("{matched}/{total} lines"));
                            }
                            None => {
                                ui.label(format!("{total} lines"));
                            }
                        }
                    }
                });
            });
        });

        // Central panel: original and filtered panes
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing.x = ui::theme::PANE_SPACING;
            ui::panels::lines::render(ui, &self.state);
        });

        ui::panels::dialog::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);

        if let Some(action) = action {
            tracing::debug!(?action, "Control action");
            self.handle(ctx, action);
        }
    }
}
