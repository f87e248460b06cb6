// DataStream - ui/panels/lines.rs
//
// The two text panes: "Original File" and "Filtered Results".
//
// Both use `ScrollArea::show_rows`, so only the visible rows are laid out
// regardless of how many lines the document has. Rows never wrap; long
// lines scroll horizontally so every row keeps the same height.

use crate::app::state::AppState;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};

/// Render both panes side by side.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.columns(2, |cols| {
        render_original(&mut cols[0], state);
        render_filtered(&mut cols[1], state);
    });
}

fn render_original(ui: &mut egui::Ui, state: &AppState) {
    pane_heading(ui, "Original File");
    match state.document() {
        None => placeholder(ui, "No file loaded.\nClick \"Load File\" to open one."),
        Some(doc) if doc.is_empty() => placeholder(ui, "The file is empty."),
        Some(doc) => {
            let lines = doc.lines();
            line_list(ui, "original_pane", lines.len(), |ui, idx| {
                ui.add(egui::Label::new(egui::RichText::new(&lines[idx]).monospace()).extend());
            });
        }
    }
}

fn render_filtered(ui: &mut egui::Ui, state: &AppState) {
    pane_heading(ui, "Filtered Results");
    let Some(term) = state.last_search_term.as_deref() else {
        placeholder(ui, "");
        return;
    };
    if state.filtered_lines.is_empty() {
        placeholder(ui, &format!("No matches found for: {term}"));
        return;
    }

    let font_id = egui::TextStyle::Monospace.resolve(ui.style());
    let text_colour = ui.visuals().text_color();
    let highlight = theme::match_highlight(state.dark_mode);
    line_list(ui, "filtered_pane", state.filtered_lines.len(), |ui, idx| {
        let job = highlighted_line(
            &state.filtered_lines[idx],
            term,
            font_id.clone(),
            text_colour,
            highlight,
        );
        ui.add(egui::Label::new(job).extend());
    });
}

fn pane_heading(ui: &mut egui::Ui, title: &str) {
    ui.strong(title);
    ui.separator();
}

fn placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new(text).weak());
    });
}

/// Virtualised list of `count` monospace rows.
fn line_list(
    ui: &mut egui::Ui,
    id: &str,
    count: usize,
    mut add_row: impl FnMut(&mut egui::Ui, usize),
) {
    let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
    egui::ScrollArea::both()
        .id_salt(id)
        .auto_shrink([false; 2])
        .show_rows(ui, row_height, count, |ui, row_range| {
            for idx in row_range {
                add_row(ui, idx);
            }
        });
}

/// Lay out `line` with every occurrence of `term` given a background.
pub fn highlighted_line(
    line: &str,
    term: &str,
    font_id: egui::FontId,
    colour: egui::Color32,
    highlight: egui::Color32,
) -> LayoutJob {
    let plain = TextFormat {
        font_id: font_id.clone(),
        color: colour,
        ..Default::default()
    };
    let marked = TextFormat {
        font_id,
        color: colour,
        background: highlight,
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    let mut cursor = 0;
    if !term.is_empty() {
        for (start, matched) in line.match_indices(term) {
            if start > cursor {
                job.append(&line[cursor..start], 0.0, plain.clone());
            }
            job.append(matched, 0.0, marked.clone());
            cursor = start + matched.len();
        }
    }
    if cursor < line.len() || line.is_empty() {
        job.append(&line[cursor..], 0.0, plain);
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(line: &str, term: &str) -> Vec<(String, bool)> {
        let job = highlighted_line(
            line,
            term,
            egui::FontId::monospace(12.0),
            egui::Color32::WHITE,
            egui::Color32::RED,
        );
        job.sections
            .iter()
            .map(|s| {
                (
                    job.text[s.byte_range.clone()].to_string(),
                    s.format.background == egui::Color32::RED,
                )
            })
            .collect()
    }

    #[test]
    fn test_highlights_each_occurrence() {
        assert_eq!(
            sections("apple and apple", "apple"),
            vec![
                ("apple".to_string(), true),
                (" and ".to_string(), false),
                ("apple".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_unmatched_line_is_one_plain_section() {
        assert_eq!(sections("banana", "kiwi"), vec![("banana".to_string(), false)]);
    }

    #[test]
    fn test_text_is_preserved() {
        let job = highlighted_line(
            "x apple y",
            "apple",
            egui::FontId::monospace(12.0),
            egui::Color32::WHITE,
            egui::Color32::RED,
        );
        assert_eq!(job.text, "x apple y");
    }
}
