// DataStream - app/store.rs
//
// LineFilterStore: owns the currently loaded document and answers
// substring queries against it.
//
// Two states: Empty (no document yet) and Loaded. A failed load never
// leaves the store in between; the previous document stays in place.
// Searches always run over the in-memory snapshot taken at load time and
// never go back to disk.

use crate::core::document::LoadedDocument;
use crate::core::filter;
use crate::platform::fs::read_text_file;
use crate::util::error::{LoadError, SearchError};
use std::path::Path;

/// Holder of the current document. One instance per application.
#[derive(Debug, Default)]
pub struct LineFilterStore {
    document: Option<LoadedDocument>,
}

impl LineFilterStore {
    /// Create an empty store. Searching is disabled until a load succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` and make it the current document.
    ///
    /// On success the returned document should be displayed and any
    /// previously shown filter results discarded. On failure the store is
    /// unchanged.
    pub fn load(&mut self, path: &Path) -> Result<&LoadedDocument, LoadError> {
        let text = match read_text_file(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    path = %e.path().display(),
                    error = %e,
                    "Load failed; keeping previous document"
                );
                return Err(e);
            }
        };

        let document = LoadedDocument::from_text(path.to_path_buf(), &text);
        tracing::info!(
            path = %path.display(),
            lines = document.line_count(),
            "Document loaded"
        );
        Ok(self.document.insert(document))
    }

    /// Return every stored line containing `term`, in file order.
    ///
    /// The term is trimmed first; a blank term is rejected whether or not a
    /// document is loaded. An empty result is a valid answer.
    pub fn search(&self, term: &str) -> Result<Vec<String>, SearchError> {
        let term = filter::normalise_term(term).ok_or(SearchError::InvalidInput)?;
        let document = self
            .document
            .as_ref()
            .ok_or(SearchError::NoDocumentLoaded)?;

        let matches: Vec<String> = filter::matching_lines(document.lines(), term)
            .map(str::to_owned)
            .collect();

        tracing::debug!(
            term_len = term.len(),
            scanned = document.line_count(),
            matched = matches.len(),
            "Search complete"
        );
        Ok(matches)
    }

    /// True once any load has succeeded.
    pub fn can_search(&self) -> bool {
        self.document.is_some()
    }

    /// The current document, if any.
    pub fn document(&self) -> Option<&LoadedDocument> {
        self.document.as_ref()
    }
}
