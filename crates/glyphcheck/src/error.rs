//! Error types for the glyphcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for glyphcheck operations.
#[derive(Debug, Error)]
pub enum GlyphcheckError {
    /// Error reading the reference database or lesson corpus.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the corrected corpus back to disk.
    #[error("Failed to persist '{path}': {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GlyphcheckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GlyphcheckError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn persist(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GlyphcheckError::Persist {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for glyphcheck operations.
pub type Result<T> = std::result::Result<T, GlyphcheckError>;
