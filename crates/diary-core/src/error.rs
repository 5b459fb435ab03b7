//! Error types for Diary core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.
//!
//! "Not found" on lookups is not an error: `get_entry` returns `Ok(None)`,
//! and `update_entry`/`delete_entry` return `Ok(false)`.

use thiserror::Error;

/// Result type alias for Diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Core error type for Diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Caller broke the contract (missing date, unsupported export format)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found (used by callers that need a hard failure)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backing medium unavailable or corrupt
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Malformed JSON document
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl DiaryError {
    /// Whether this error means the backing medium failed, as opposed to bad input.
    pub fn is_storage_failure(&self) -> bool {
        !matches!(self, DiaryError::InvalidInput(_) | DiaryError::NotFound(_))
    }
}
