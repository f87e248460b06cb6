// DataStream - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error aborts only the single requested operation; none is fatal
// to the process.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all DataStream operations.
/// Errors are categorised by the operation that produced them.
#[derive(Debug)]
pub enum DataStreamError {
    /// Loading a document from disk failed.
    Load(LoadError),

    /// A search request was rejected.
    Search(SearchError),

    /// I/O error writing results (headless mode).
    Output { source: io::Error },
}

impl fmt::Display for DataStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Error reading file: {e}"),
            Self::Search(e) => write!(f, "Search error: {e}"),
            Self::Output { source } => write!(f, "Error writing results: {source}"),
        }
    }
}

impl std::error::Error for DataStreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Output { source } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// The file could not be turned into a document. The previously loaded
/// document, if any, is untouched when one of these is returned.
#[derive(Debug)]
pub enum LoadError {
    /// Opening or reading the file failed (missing, permission denied, ...).
    Io { path: PathBuf, source: io::Error },

    /// The path exists but is a directory or another non-regular file.
    NotAFile { path: PathBuf },

    /// File content is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

impl LoadError {
    /// Path the failed load was attempted on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } => path,
            Self::NotAFile { path } => path,
            Self::InvalidEncoding { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "'{}': {source}", path.display()),
            Self::NotAFile { path } => {
                write!(f, "'{}' is not a regular file", path.display())
            }
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::NotAFile { .. } => None,
        }
    }
}

impl From<LoadError> for DataStreamError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Search errors
// ---------------------------------------------------------------------------

/// Reasons a search request is rejected before any line is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The term is empty or whitespace-only.
    InvalidInput,

    /// No document has been loaded successfully yet.
    NoDocumentLoaded,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Please enter a search string"),
            Self::NoDocumentLoaded => write!(f, "Load a file before searching"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<SearchError> for DataStreamError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Why part or all of `config.toml` was ignored.
///
/// Never fatal and never surfaced through `DataStreamError`: `load_config`
/// turns each one into a startup warning and keeps the default it replaces.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read; every setting keeps its default.
    Unreadable { path: PathBuf, source: io::Error },

    /// The file is not TOML of the expected shape; every setting keeps its default.
    Malformed {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// One `section.key` holds a value outside its accepted set; only that
    /// setting keeps its default.
    Rejected {
        key: &'static str,
        value: String,
        allowed: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read config '{}': {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "Config '{}' is not valid TOML: {source}", path.display())
            }
            Self::Rejected {
                key,
                value,
                allowed,
            } => write!(f, "Ignoring {key} = {value}; allowed: {allowed}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::Rejected { .. } => None,
        }
    }
}

/// Convenience type alias for DataStream results.
pub type Result<T> = std::result::Result<T, DataStreamError>;
