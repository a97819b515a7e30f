//! Validation of extracted annotations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::{Annotation, AnnotationSyntax, ContextIndex};
use crate::error::Result;
use crate::reference::ReferenceDatabase;

use super::finding::{Classification, Finding};

/// Classify a single annotation.
///
/// A character absent from the reference is `Unknown` whatever its code.
pub fn classify(db: &ReferenceDatabase, annotation: &Annotation) -> Classification {
    let check = db.validate(&annotation.character, &annotation.code);

    match check.actual {
        None => Classification::Unknown,
        Some(_) if check.valid => Classification::Valid,
        Some(correct_code) => Classification::Incorrect { correct_code },
    }
}

/// Classification summary for a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid_count: usize,
    /// Incorrect findings in document order.
    pub incorrect: Vec<Finding>,
    /// Unknown findings in document order.
    pub unknown: Vec<Finding>,
}

impl ValidationReport {
    /// Number of annotations classified.
    pub fn total(&self) -> usize {
        self.valid_count + self.incorrect.len() + self.unknown.len()
    }

    /// No incorrect and no unknown annotations.
    pub fn passed(&self) -> bool {
        self.incorrect.is_empty() && self.unknown.is_empty()
    }

    /// Incorrect findings grouped by context, in first-seen group order.
    pub fn incorrect_by_context(&self) -> IndexMap<&str, Vec<&Finding>> {
        group_by_context(&self.incorrect)
    }

    /// Unknown findings grouped by context, in first-seen group order.
    pub fn unknown_by_context(&self) -> IndexMap<&str, Vec<&Finding>> {
        group_by_context(&self.unknown)
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Partition findings by context, keeping document order inside each group.
pub fn group_by_context(findings: &[Finding]) -> IndexMap<&str, Vec<&Finding>> {
    let mut groups: IndexMap<&str, Vec<&Finding>> = IndexMap::new();
    for finding in findings {
        groups.entry(finding.context.as_str()).or_default().push(finding);
    }
    groups
}

/// Classifies annotations and attaches group context to non-valid ones.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    syntax: AnnotationSyntax,
}

impl Validator {
    pub fn new(syntax: AnnotationSyntax) -> Self {
        Self { syntax }
    }

    /// Classify every annotation. Reads `text` only to resolve context.
    pub fn validate_all(
        &self,
        db: &ReferenceDatabase,
        annotations: &[Annotation],
        text: &str,
    ) -> ValidationReport {
        let index = ContextIndex::new(text, &self.syntax);
        let mut report = ValidationReport::default();

        for annotation in annotations {
            let classification = classify(db, annotation);
            if classification.is_valid() {
                report.valid_count += 1;
                continue;
            }

            let finding = Finding {
                context: index.resolve(annotation.line),
                annotation: annotation.clone(),
                classification,
            };

            if finding.classification == Classification::Unknown {
                report.unknown.push(finding);
            } else {
                report.incorrect.push(finding);
            }
        }

        debug!(
            valid = report.valid_count,
            incorrect = report.incorrect.len(),
            unknown = report.unknown.len(),
            "validated annotations"
        );

        report
    }
}

/// Validate with the default syntax.
pub fn validate_all(
    db: &ReferenceDatabase,
    annotations: &[Annotation],
    text: &str,
) -> ValidationReport {
    Validator::default().validate_all(db, annotations, text)
}
