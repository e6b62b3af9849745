//! Error types for object store uploads.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while uploading a file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The local file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Failed to read the local file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store rejected the upload.
    #[error("upload rejected with status {status}: {message}")]
    Upload { status: u16, message: String },

    /// Transport-level failure before a response was received.
    #[error("upload transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
