// DataStream - tests/e2e_load_search.rs
//
// End-to-end tests for the load-then-filter pipeline.
//
// These tests exercise the real filesystem through the public library API:
// fixture files on disk, temp files written per test, and the same
// LineFilterStore / AppState / batch entry points the binary uses.

use datastream::app::batch::{run_batch, OutputFormat};
use datastream::app::state::{AppState, DialogKind};
use datastream::app::store::LineFilterStore;
use datastream::platform::config::AppConfig;
use datastream::util::error::{LoadError, SearchError};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Load
// =============================================================================

/// Loading the dessert fixture returns its three lines in order.
#[test]
fn e2e_load_returns_lines_in_file_order() {
    let mut store = LineFilterStore::new();
    let doc = store.load(&fixture("desserts.txt")).unwrap();
    assert_eq!(doc.lines(), ["apple pie", "banana split", "apple tart"]);
}

/// CRLF terminators are stripped, not kept as trailing '\r'.
#[test]
fn e2e_load_strips_crlf() {
    let mut store = LineFilterStore::new();
    let doc = store.load(&fixture("access_crlf.log")).unwrap();
    assert_eq!(doc.line_count(), 4);
    assert!(doc.lines().iter().all(|l| !l.ends_with('\r')));
}

/// Classic Mac files separated only by `\r` load as separate lines.
#[test]
fn e2e_load_splits_lone_carriage_returns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "classic_mac.txt", "apple pie\rbanana split\rapple tart\r");

    let mut store = LineFilterStore::new();
    let doc = store.load(&path).unwrap();
    assert_eq!(doc.lines(), ["apple pie", "banana split", "apple tart"]);
    assert_eq!(store.search("apple").unwrap(), vec!["apple pie", "apple tart"]);
}

/// Unreadable inputs are load errors and never enable searching.
#[test]
fn e2e_unreadable_inputs_fail() {
    let dir = tempfile::tempdir().unwrap();
    let bad_utf8 = dir.path().join("latin1.txt");
    fs::write(&bad_utf8, [b'c', b'a', b'f', 0xe9, b'\n']).unwrap();

    let mut store = LineFilterStore::new();
    assert!(matches!(
        store.load(&dir.path().join("missing.txt")),
        Err(LoadError::Io { .. })
    ));
    assert!(matches!(
        store.load(&bad_utf8),
        Err(LoadError::InvalidEncoding { .. })
    ));
    assert!(store.load(dir.path()).is_err());
    assert!(!store.can_search());
}

// =============================================================================
// Search
// =============================================================================

/// The concrete scenario: "apple" matches two lines, "kiwi" matches none.
#[test]
fn e2e_search_concrete_scenario() {
    let mut store = LineFilterStore::new();
    store.load(&fixture("desserts.txt")).unwrap();

    assert_eq!(
        store.search("apple").unwrap(),
        vec!["apple pie", "apple tart"]
    );
    assert_eq!(store.search("kiwi"), Ok(Vec::new()));
}

/// Duplicated lines are each included; result never exceeds the document.
#[test]
fn e2e_search_keeps_duplicates() {
    let mut store = LineFilterStore::new();
    let total = store.load(&fixture("access_crlf.log")).unwrap().line_count();

    let hits = store.search("/index.html").unwrap();
    assert_eq!(hits, vec!["GET /index.html 200", "GET /index.html 200"]);
    assert!(store.search(" ").is_err());
    assert!(store.search("GET").unwrap().len() <= total);
}

/// Blank terms fail with InvalidInput before and after a load.
#[test]
fn e2e_blank_terms_always_invalid() {
    let mut store = LineFilterStore::new();
    assert_eq!(store.search(""), Err(SearchError::InvalidInput));
    assert_eq!(store.search("   "), Err(SearchError::InvalidInput));

    store.load(&fixture("desserts.txt")).unwrap();
    assert_eq!(store.search(""), Err(SearchError::InvalidInput));
    assert_eq!(store.search("   "), Err(SearchError::InvalidInput));
}

/// Searching before any successful load fails with NoDocumentLoaded.
#[test]
fn e2e_search_before_load() {
    let store = LineFilterStore::new();
    assert_eq!(store.search("apple"), Err(SearchError::NoDocumentLoaded));
}

/// Two identical searches with no load in between agree.
#[test]
fn e2e_search_is_idempotent() {
    let mut store = LineFilterStore::new();
    store.load(&fixture("desserts.txt")).unwrap();
    let first = store.search("a").unwrap();
    let second = store.search("a").unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Reload
// =============================================================================

/// After load(A) then load(B), nothing unique to A can match.
#[test]
fn e2e_reload_replaces_document() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_temp(&dir, "a.txt", "only in a\nshared\n");
    let b = write_temp(&dir, "b.txt", "only in b\nshared\n");

    let mut store = LineFilterStore::new();
    store.load(&a).unwrap();
    store.load(&b).unwrap();

    assert!(store.search("only in a").unwrap().is_empty());
    assert_eq!(store.search("shared").unwrap(), vec!["shared"]);
    assert_eq!(store.document().unwrap().path(), b.as_path());
}

/// A failed reload keeps searching against the previous document.
#[test]
fn e2e_failed_reload_preserves_previous() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_temp(&dir, "a.txt", "alpha\nbeta\n");

    let mut store = LineFilterStore::new();
    store.load(&a).unwrap();
    assert!(store.load(&dir.path().join("gone.txt")).is_err());

    assert_eq!(store.search("beta").unwrap(), vec!["beta"]);
}

// =============================================================================
// UI-facing state and headless mode
// =============================================================================

/// The GUI state flow: gated search, results, empty-result notice.
#[test]
fn e2e_app_state_flow() {
    let mut state = AppState::new(&AppConfig::default(), false);
    assert!(!state.can_search());

    state.load_file(&fixture("desserts.txt"));
    assert!(state.can_search());

    state.search_input = "apple".to_string();
    state.run_search();
    assert_eq!(state.filtered_lines, vec!["apple pie", "apple tart"]);
    assert!(state.dialog.is_none());

    state.search_input = "kiwi".to_string();
    state.run_search();
    assert!(state.filtered_lines.is_empty());
    assert_eq!(state.dialog.as_ref().map(|d| d.kind), Some(DialogKind::Info));
}

/// Headless text output matches the store's answer line for line.
#[test]
fn e2e_batch_text_output() {
    let mut out = Vec::new();
    let summary = run_batch(
        &fixture("access_crlf.log"),
        "200",
        OutputFormat::Text,
        &mut out,
    )
    .unwrap();

    assert_eq!(summary.total_lines, 4);
    assert_eq!(summary.matched_lines, 3);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "GET /index.html 200\nPOST /login 200\nGET /index.html 200\n"
    );
}
