//! Lesson corpus loading and source metadata.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::{GlyphcheckError, Result};

/// Metadata about the lesson corpus file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusSource {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of lines.
    pub line_count: usize,
    /// When the corpus was read.
    pub loaded_at: DateTime<Utc>,
}

impl CorpusSource {
    fn new(path: PathBuf, text: &str) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash: content_hash(text),
            size_bytes: text.len() as u64,
            line_count: text.lines().count(),
            loaded_at: Utc::now(),
        }
    }
}

/// The full lesson corpus text, read once.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub source: CorpusSource,
    pub text: String,
}

impl Corpus {
    /// Read a corpus file. A missing or unreadable file is fatal for the run.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GlyphcheckError::io(path, e))?;
        let source = CorpusSource::new(path.to_path_buf(), &text);

        info!(path = %path.display(), lines = source.line_count, "loaded lesson corpus");
        Ok(Self { source, text })
    }

    /// Wrap in-memory text, e.g. for tests or piped input.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let source = CorpusSource::new(path.into(), &text);
        Self { source, text }
    }
}

/// `sha256:<hex>` digest of corpus text.
pub(crate) fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
