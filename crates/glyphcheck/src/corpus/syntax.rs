//! Configurable token shapes for the lesson corpus.

use serde::{Deserialize, Serialize};

use crate::error::{GlyphcheckError, Result};

/// Marker keyword used by the upstream lesson corpus.
pub const DEFAULT_MARKER: &str = "makeChar";

/// Suffix shared by lesson group bindings (`let lesson1Characters = [`).
pub const DEFAULT_GROUP_SUFFIX: &str = "Characters";

/// Keyword that starts a named binding.
pub(crate) const BINDING_KEYWORD: &str = "let ";

/// Right-hand side that opens an ordered collection.
pub(crate) const COLLECTION_OPENER: &str = " = [";

/// The marker keyword and group suffix that identify annotations and groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSyntax {
    marker: String,
    group_suffix: String,
}

impl AnnotationSyntax {
    /// Create a syntax with a custom marker and the default group suffix.
    pub fn new(marker: impl Into<String>) -> Result<Self> {
        Self::default().with_marker(marker)
    }

    /// Replace the marker keyword.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        if marker.is_empty() || marker.contains(['"', '(', '\n']) {
            return Err(GlyphcheckError::Config(format!(
                "invalid annotation marker '{}'",
                marker
            )));
        }
        self.marker = marker;
        Ok(self)
    }

    /// Replace the group name suffix.
    pub fn with_group_suffix(mut self, suffix: impl Into<String>) -> Result<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() || !suffix.chars().all(is_word_char) {
            return Err(GlyphcheckError::Config(format!(
                "invalid group suffix '{}': expected letters, digits or '_'",
                suffix
            )));
        }
        self.group_suffix = suffix;
        Ok(self)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn group_suffix(&self) -> &str {
        &self.group_suffix
    }

    /// The replacement anchor for a character/code pair: `marker("<char>", "<code>"`.
    ///
    /// Corrections always match this full prefix, never the bare code, so a
    /// code that is a prefix of another code cannot be rewritten by accident.
    pub fn prefix(&self, character: &str, code: &str) -> String {
        format!("{}(\"{}\", \"{}\"", self.marker, character, code)
    }
}

impl Default for AnnotationSyntax {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            group_suffix: DEFAULT_GROUP_SUFFIX.to_string(),
        }
    }
}

/// Identifier characters, ASCII only.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
