//! Reference database parsing and lookups.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GlyphcheckError, Result};

/// A single character → code pairing from the reference corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub character: String,
    pub code: String,
}

/// Result of looking up one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub character: String,
    pub code: Option<String>,
    pub found: bool,
}

/// Result of checking an annotated code against the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeCheck {
    /// True iff the character is known and its code equals `expected`.
    pub valid: bool,
    pub character: String,
    /// The annotated code, upper-cased.
    pub expected: String,
    /// The canonical code, if the character is known.
    pub actual: Option<String>,
}

/// Immutable character → code mapping built from a reference corpus.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDatabase {
    codes: IndexMap<String, String>,
    skipped: usize,
    shadowed: usize,
}

impl ReferenceDatabase {
    /// Build the mapping from reference corpus text.
    ///
    /// Records are `code<TAB>character[<TAB>...]`. Blank lines, records with
    /// fewer than two fields and records with an empty code or character are
    /// skipped. Later records for an already-seen character are ignored.
    pub fn build(source: &str) -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(source.as_bytes());

        let mut db = Self::default();

        for (index, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    debug!(record = index + 1, error = %e, "skipping unreadable reference record");
                    db.skipped += 1;
                    continue;
                }
            };

            if record.len() < 2 {
                db.skipped += 1;
                continue;
            }

            db.insert(&record[1], &record[0]);
        }

        debug!(
            entries = db.codes.len(),
            skipped = db.skipped,
            shadowed = db.shadowed,
            "built reference database"
        );

        db
    }

    /// Read and build the mapping from a reference file.
    ///
    /// A missing or unreadable file is fatal for the run.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| GlyphcheckError::io(path, e))?;
        let db = Self::build(&source);

        info!(path = %path.display(), entries = db.len(), "loaded reference database");
        Ok(db)
    }

    /// Add one record, applying the trim, skip and first-wins rules.
    fn insert(&mut self, character: &str, code: &str) {
        let character = character.trim();
        let code = code.trim();

        if code.is_empty() || character.is_empty() {
            self.skipped += 1;
            return;
        }

        if self.codes.contains_key(character) {
            self.shadowed += 1;
            return;
        }

        self.codes.insert(character.to_string(), code.to_uppercase());
    }

    /// Canonical code for a character.
    pub fn lookup(&self, character: &str) -> Option<&str> {
        self.codes.get(character).map(String::as_str)
    }

    /// Look up several characters, preserving input order and duplicates.
    pub fn lookup_many<I, S>(&self, characters: I) -> Vec<LookupResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        characters
            .into_iter()
            .map(|c| {
                let character = c.as_ref();
                let code = self.lookup(character).map(str::to_string);
                LookupResult {
                    character: character.to_string(),
                    found: code.is_some(),
                    code,
                }
            })
            .collect()
    }

    /// Check an annotated code against the canonical one (case-insensitive).
    pub fn validate(&self, character: &str, expected_code: &str) -> CodeCheck {
        let expected = expected_code.to_uppercase();
        let actual = self.lookup(character).map(str::to_string);

        CodeCheck {
            valid: actual.as_deref() == Some(expected.as_str()),
            character: character.to_string(),
            expected,
            actual,
        }
    }

    /// Whether the character has a reference entry.
    pub fn contains(&self, character: &str) -> bool {
        self.codes.contains_key(character)
    }

    /// Entries in reference order.
    pub fn iter(&self) -> impl Iterator<Item = ReferenceEntry> + '_ {
        self.codes.iter().map(|(character, code)| ReferenceEntry {
            character: character.clone(),
            code: code.clone(),
        })
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Records dropped as blank, malformed or empty.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Records ignored because an earlier record already defined the character.
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }
}

impl FromIterator<ReferenceEntry> for ReferenceDatabase {
    /// Build from entries directly, with the same rules as [`ReferenceDatabase::build`].
    fn from_iter<T: IntoIterator<Item = ReferenceEntry>>(iter: T) -> Self {
        let mut db = Self::default();
        for entry in iter {
            db.insert(&entry.character, &entry.code);
        }
        db
    }
}
