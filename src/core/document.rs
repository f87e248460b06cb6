// DataStream - core/document.rs
//
// In-memory snapshot of a loaded text file.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::util::constants::UTF8_BOM;
use std::path::{Path, PathBuf};

/// The ordered lines of the most recently loaded file.
///
/// Lines are fixed at construction; a new load produces a new
/// `LoadedDocument` rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl LoadedDocument {
    /// Build a document from already-split lines.
    pub fn new(path: PathBuf, lines: Vec<String>) -> Self {
        Self { path, lines }
    }

    /// Build a document by splitting decoded file text into lines.
    pub fn from_text(path: PathBuf, text: &str) -> Self {
        Self::new(path, split_lines(text))
    }

    /// Source file this document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines in file order, terminators stripped.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// File name for status text, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`.
///
/// The terminator is not kept. A final terminator does not produce a
/// trailing empty line, an empty text has no lines, and a leading BOM is
/// dropped.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let bytes = text.as_bytes();

    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    // Both terminators are ASCII, so every cut lands on a char boundary.
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(text[start..i].to_string());
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(text[start..i].to_string());
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unix_newlines() {
        assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_windows_newlines() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(split_lines("only\n"), vec!["only"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(split_lines("a\n\n\nb\n"), vec!["a", "", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\u{feff}").is_empty());
    }

    #[test]
    fn test_bom_is_dropped() {
        assert_eq!(split_lines("\u{feff}first\nsecond"), vec!["first", "second"]);
    }

    #[test]
    fn test_lone_carriage_return_breaks_line() {
        assert_eq!(split_lines("a\rb\rc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\rb\r"), vec!["a", "b"]);
        assert_eq!(split_lines("\r\r"), vec!["", ""]);
    }

    #[test]
    fn test_mixed_terminators() {
        assert_eq!(
            split_lines("unix\nwindows\r\nmac\rlast"),
            vec!["unix", "windows", "mac", "last"]
        );
        // `\n\r` is two breaks, not one.
        assert_eq!(split_lines("a\n\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_multibyte_text_split_cleanly() {
        assert_eq!(split_lines("héllo\rwörld\r\n日本"), vec!["héllo", "wörld", "日本"]);
    }

    #[test]
    fn test_display_name_uses_file_name() {
        let doc = LoadedDocument::from_text(PathBuf::from("/var/data/input.txt"), "x");
        assert_eq!(doc.display_name(), "input.txt");
        assert_eq!(doc.line_count(), 1);
        assert!(!doc.is_empty());
    }
}
