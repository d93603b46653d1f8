//! Error types for BetterNotes
//!
//! The rendering pipeline never fails; these errors only come from the
//! boundary (files, configuration, the notification backend).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for BetterNotes operations
pub type NotesResult<T> = Result<T, NotesError>;

/// Main error type for BetterNotes operations
#[derive(Error, Debug)]
pub enum NotesError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document missing and auto-creation disabled
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The file-change notification backend failed
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// JSON encoding error (embed mode, convert endpoint)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
