//! Error types for the history manager.
//!
//! Undo, redo and record never fail; running out of history is reported as
//! `None`. These errors only come from configuration and from rebuilding a
//! history out of raw parts.

use thiserror::Error;

/// Main error type for history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Cursor {cursor:?} out of range for {len} entries")]
    CursorOutOfRange { cursor: Option<usize>, len: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for HistoryError {
    fn from(e: serde_json::Error) -> Self {
        HistoryError::Serialization(e.to_string())
    }
}

/// Result type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
