//! Per-annotation classification outcomes.

use serde::{Deserialize, Serialize};

use crate::corpus::Annotation;

/// Outcome of checking one annotation. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Classification {
    /// The annotated code matches the reference (case-insensitive).
    Valid,
    /// The character is known but annotated with a different code.
    Incorrect { correct_code: String },
    /// The character has no reference entry.
    Unknown,
}

impl Classification {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Valid => "Valid",
            Classification::Incorrect { .. } => "Incorrect",
            Classification::Unknown => "Not Found",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid)
    }

    /// The canonical code for an incorrect annotation.
    pub fn correct_code(&self) -> Option<&str> {
        match self {
            Classification::Incorrect { correct_code } => Some(correct_code.as_str()),
            _ => None,
        }
    }
}

/// A non-valid annotation with its reporting context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(flatten)]
    pub annotation: Annotation,
    pub classification: Classification,
    /// Enclosing group name, or `"unknown"`.
    pub context: String,
}

impl Finding {
    pub fn character(&self) -> &str {
        &self.annotation.character
    }

    pub fn line(&self) -> usize {
        self.annotation.line
    }
}
