//! Error types for booktoc operations.

use thiserror::Error;

/// Errors that can occur while staging or replaying a table of contents.
///
/// Section numbering never fails; only the persisted TOC store and
/// configuration loading produce errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A persisted record could not be decoded. Replay stops here.
    #[error("TOC stream corrupted at line {line}: {reason}")]
    StreamCorruption { line: usize, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error means the persisted TOC stream is untrustworthy.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::StreamCorruption { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
