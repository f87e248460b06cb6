// DataStream - app/batch.rs
//
// Headless load-then-search for `datastream FILE --search TERM`.
// Writes to any Write trait object so tests can capture the output.

use crate::app::store::LineFilterStore;
use crate::util::error::{DataStreamError, Result};
use std::io::Write;
use std::path::Path;

/// How matches are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One matching line per output line.
    #[default]
    Text,
    /// A pretty-printed JSON array of strings.
    Json,
}

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_lines: usize,
    pub matched_lines: usize,
}

/// Load `path`, filter by `term`, and write the matches to `out`.
///
/// An empty match set is written as nothing (text) or `[]` (JSON) and is
/// not an error.
pub fn run_batch<W: Write>(
    path: &Path,
    term: &str,
    format: OutputFormat,
    mut out: W,
) -> Result<BatchSummary> {
    let mut store = LineFilterStore::new();
    let total_lines = store.load(path)?.line_count();
    let matches = store.search(term)?;

    let output_err = |source| DataStreamError::Output { source };
    match format {
        OutputFormat::Text => {
            for line in &matches {
                writeln!(out, "{line}").map_err(output_err)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &matches)
                .map_err(|e| output_err(e.into()))?;
            writeln!(out).map_err(output_err)?;
        }
    }
    out.flush().map_err(output_err)?;

    Ok(BatchSummary {
        total_lines,
        matched_lines: matches.len(),
    })
}
