// DataStream - app/state.rs
//
// Application state management. Holds the LineFilterStore, the current
// filter results, the search input, and the pending message dialog.
// Owned by the eframe::App implementation; contains no egui types so it
// can be driven directly from tests.

use crate::app::store::LineFilterStore;
use crate::core::document::LoadedDocument;
use crate::platform::config::AppConfig;
use std::path::Path;

/// Severity of a message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Warning,
    Info,
}

/// A modal message shown to the user until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    fn new(kind: DialogKind, title: &str, message: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message,
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The loaded document and its search capability.
    pub store: LineFilterStore,

    /// Contents of the search field.
    pub search_input: String,

    /// Lines shown in the "Filtered Results" pane.
    pub filtered_lines: Vec<String>,

    /// Trimmed term that produced `filtered_lines` (None after a load).
    pub last_search_term: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Message dialog awaiting acknowledgement.
    pub dialog: Option<Dialog>,

    /// Non-fatal warnings from start-up (config problems).
    pub warnings: Vec<String>,

    /// Whether to show the About window.
    pub show_about: bool,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Started with `--debug`; shown as a badge in the status bar.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from validated config.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            store: LineFilterStore::new(),
            search_input: String::new(),
            filtered_lines: Vec::new(),
            last_search_term: None,
            status_message: "Ready. Load a file to begin.".to_string(),
            dialog: None,
            warnings: Vec::new(),
            show_about: false,
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            debug_mode,
        }
    }

    /// Whether the search control should be enabled.
    pub fn can_search(&self) -> bool {
        self.store.can_search()
    }

    /// The document shown in the "Original File" pane.
    pub fn document(&self) -> Option<&LoadedDocument> {
        self.store.document()
    }

    /// Load `path`, replacing the displayed document on success.
    ///
    /// A failure opens an error dialog and leaves both panes as they were.
    pub fn load_file(&mut self, path: &Path) {
        match self.store.load(path) {
            Ok(document) => {
                self.status_message = format!(
                    "Loaded {} lines from {}",
                    document.line_count(),
                    document.display_name()
                );
                self.filtered_lines.clear();
                self.last_search_term = None;
            }
            Err(e) => {
                self.status_message = "Load failed.".to_string();
                self.dialog = Some(Dialog::new(
                    DialogKind::Error,
                    "Error",
                    format!("Error reading file: {e}"),
                ));
            }
        }
    }

    /// Filter the loaded document by the current search input.
    pub fn run_search(&mut self) {
        match self.store.search(&self.search_input) {
            Ok(matches) => {
                let term = self.search_input.trim().to_string();
                let total = self.store.document().map_or(0, LoadedDocument::line_count);
                self.status_message =
                    format!("{} of {total} lines match \"{term}\"", matches.len());
                if matches.is_empty() {
                    self.dialog = Some(Dialog::new(
                        DialogKind::Info,
                        "Search Results",
                        format!("No matches found for: {term}"),
                    ));
                }
                self.filtered_lines = matches;
                self.last_search_term = Some(term);
            }
            Err(e) => {
                self.dialog = Some(Dialog::new(DialogKind::Warning, "Warning", e.to_string()));
            }
        }
    }

    /// Filtered lines as a single newline-joined block (for the clipboard).
    pub fn filtered_report(&self) -> String {
        self.filtered_lines.join("\n")
    }

    /// Close the current dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Right-hand status bar badge, if any.
    pub fn mode_badge(&self) -> Option<&'static str> {
        self.debug_mode.then_some("DEBUG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), false)
    }

    fn temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(content.as_bytes()).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn test_search_disabled_until_load() {
        let mut s = state();
        assert!(!s.can_search());
        let tmp = temp_file("line\n");
        s.load_file(tmp.path());
        assert!(s.can_search());
        assert!(s.dialog.is_none());
    }

    #[test]
    fn test_load_clears_previous_results() {
        let tmp = temp_file("apple pie\nbanana split\n");
        let mut s = state();
        s.load_file(tmp.path());
        s.search_input = "apple".to_string();
        s.run_search();
        assert_eq!(s.filtered_lines, vec!["apple pie"]);

        s.load_file(tmp.path());
        assert!(s.filtered_lines.is_empty());
        assert!(s.last_search_term.is_none());
    }

    #[test]
    fn test_failed_load_shows_error_and_keeps_view() {
        let tmp = temp_file("apple pie\n");
        let mut s = state();
        s.load_file(tmp.path());
        s.search_input = "apple".to_string();
        s.run_search();

        let dir = tempfile::tempdir().unwrap();
        s.load_file(&dir.path().join("missing.txt"));

        let dialog = s.dialog.clone().unwrap();
        assert_eq!(dialog.kind, DialogKind::Error);
        assert!(dialog.message.starts_with("Error reading file: "));
        assert_eq!(s.filtered_lines, vec!["apple pie"]);
        assert_eq!(s.document().unwrap().path(), tmp.path());
    }

    #[test]
    fn test_blank_search_warns() {
        let tmp = temp_file("apple\n");
        let mut s = state();
        s.load_file(tmp.path());
        s.search_input = "   ".to_string();
        s.run_search();

        let dialog = s.dialog.clone().unwrap();
        assert_eq!(dialog.kind, DialogKind::Warning);
        assert_eq!(dialog.message, "Please enter a search string");
    }

    #[test]
    fn test_empty_result_is_info_not_error() {
        let tmp = temp_file("apple pie\n");
        let mut s = state();
        s.load_file(tmp.path());
        s.search_input = "kiwi".to_string();
        s.run_search();

        let dialog = s.dialog.clone().unwrap();
        assert_eq!(dialog.kind, DialogKind::Info);
        assert_eq!(dialog.message, "No matches found for: kiwi");
        assert!(s.filtered_lines.is_empty());
        assert_eq!(s.last_search_term.as_deref(), Some("kiwi"));

        s.dismiss_dialog();
        assert!(s.dialog.is_none());
    }

    #[test]
    fn test_search_without_document_warns() {
        let mut s = state();
        s.search_input = "apple".to_string();
        s.run_search();
        assert_eq!(s.dialog.unwrap().kind, DialogKind::Warning);
    }

    #[test]
    fn test_debug_badge_follows_flag() {
        assert_eq!(state().mode_badge(), None);
        let debug = AppState::new(&AppConfig::default(), true);
        assert_eq!(debug.mode_badge(), Some("DEBUG"));
    }

    #[test]
    fn test_filtered_report_joins_lines() {
        let tmp = temp_file("a1\nb\na2\n");
        let mut s = state();
        s.load_file(tmp.path());
        s.search_input = "a".to_string();
        s.run_search();
        assert_eq!(s.filtered_report(), "a1\na2");
    }
}
