//! Error types for Ivy.

use thiserror::Error;

/// Primary error type for all Ivy operations.
#[derive(Error, Debug)]
pub enum IvyError {
    /// The backend answered with a non-2xx status. Kept deliberately
    /// generic: no 4xx/5xx split, no structured error body parsing.
    #[error("backend returned HTTP {status}")]
    Backend { status: u16 },

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON at all. Shape
    /// surprises inside valid JSON never land here; they degrade to a
    /// stringified reply instead.
    #[error("malformed backend response: {0}")]
    Protocol(#[from] serde_json::Error),

    /// The document writer is missing or failed to persist a document.
    /// Never affects the conversation or a turn's outcome.
    #[error("document export unavailable: {0}")]
    ExportUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, IvyError>;
