// DataStream - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name (window title).
pub const APP_NAME: &str = "Data Stream Processor";

/// Application identifier used for config directories.
pub const APP_ID: &str = "DataStream";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Window
// =============================================================================

/// Initial window size in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

/// Smallest window that still fits the control bar.
pub const MIN_WINDOW_WIDTH: f32 = 560.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

// =============================================================================
// UI
// =============================================================================

/// Body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum configurable font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum configurable font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Width of the search field, in characters.
pub const SEARCH_FIELD_CHARS: f32 = 20.0;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// File names
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Byte-order mark stripped from the start of loaded documents.
pub const UTF8_BOM: char = '\u{feff}';
