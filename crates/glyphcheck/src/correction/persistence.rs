//! All-or-nothing corpus rewrites and backups.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{GlyphcheckError, Result};

/// Replace the file at `path` with `content` atomically.
///
/// The content is written to a temporary file in the same directory and then
/// renamed over the target, so a failure never leaves a half-written corpus.
/// Existing file permissions are carried over.
pub fn write_atomic(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| GlyphcheckError::persist(path, e))?;

    temp.write_all(content.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| GlyphcheckError::persist(path, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| GlyphcheckError::persist(path, e))?;
    }

    temp.persist(path)
        .map_err(|e| GlyphcheckError::persist(path, e.error))?;

    info!(path = %path.display(), bytes = content.len(), "wrote corpus");
    Ok(())
}

/// Copy the current corpus into its history directory before a rewrite.
///
/// Returns the backup path, or `None` if there was no file to back up.
///
/// ```text
/// src/
/// ├── CangjieData.res
/// └── CangjieData.history/
///     └── 2024-12-30T10-00-00.res
/// ```
pub fn backup_corpus(path: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let history_dir = history_directory(path);
    fs::create_dir_all(&history_dir).map_err(|e| GlyphcheckError::persist(&history_dir, e))?;

    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f");
    let file_name = match path.extension() {
        Some(ext) => format!("{}.{}", timestamp, ext.to_string_lossy()),
        None => timestamp.to_string(),
    };
    let backup = history_dir.join(file_name);

    fs::copy(path, &backup).map_err(|e| GlyphcheckError::persist(&backup, e))?;

    info!(backup = %backup.display(), "backed up corpus");
    Ok(Some(backup))
}

/// Get the history directory for a corpus file.
pub fn history_directory(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.history", stem))
}
