//! Deduplication of incorrect findings into correction groups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::validation::{Classification, Finding};

/// A single (character, old code → new code) fix and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionGroup {
    pub character: String,
    pub old_code: String,
    pub new_code: String,
    /// Occurrences counted during validation.
    pub occurrences: usize,
}

impl CorrectionGroup {
    /// Get a human-readable description.
    pub fn description(&self) -> String {
        format!(
            "{}: \"{}\" → \"{}\" ({} instances)",
            self.character, self.old_code, self.new_code, self.occurrences
        )
    }
}

/// Group incorrect findings by (character, old code, new code).
///
/// Groups keep first-seen order. Findings that are not `Incorrect` are
/// ignored, so unknown characters never produce a fix.
pub fn compute_fixes(findings: &[Finding]) -> Vec<CorrectionGroup> {
    let mut groups: IndexMap<(&str, &str, &str), usize> = IndexMap::new();

    for finding in findings {
        let Classification::Incorrect { correct_code } = &finding.classification else {
            continue;
        };
        let key = (
            finding.annotation.character.as_str(),
            finding.annotation.code.as_str(),
            correct_code.as_str(),
        );
        *groups.entry(key).or_insert(0) += 1;
    }

    groups
        .into_iter()
        .map(|((character, old_code, new_code), occurrences)| CorrectionGroup {
            character: character.to_string(),
            old_code: old_code.to_string(),
            new_code: new_code.to_string(),
            occurrences,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Annotation;

    fn finding(character: &str, code: &str, classification: Classification) -> Finding {
        Finding {
            annotation: Annotation {
                character: character.to_string(),
                code: code.to_string(),
                line: 1,
                column: 1,
                line_content: String::new(),
            },
            classification,
            context: "unknown".to_string(),
        }
    }

    fn incorrect(character: &str, code: &str, correct: &str) -> Finding {
        finding(
            character,
            code,
            Classification::Incorrect {
                correct_code: correct.to_string(),
            },
        )
    }

    #[test]
    fn test_groups_and_counts() {
        let findings = vec![
            incorrect("林", "DD", "CD"),
            incorrect("明", "XY", "AB"),
            incorrect("林", "DD", "CD"),
            incorrect("明", "XZ", "AB"),
        ];
        let groups = compute_fixes(&findings);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].character, "林");
        assert_eq!(groups[0].occurrences, 2);
        assert_eq!(groups[1].old_code, "XY");
        assert_eq!(groups[2].old_code, "XZ");
    }

    #[test]
    fn test_unknown_produces_no_group() {
        let findings = vec![finding("炎", "OO", Classification::Unknown)];
        assert!(compute_fixes(&findings).is_empty());
    }

    #[test]
    fn test_description() {
        let groups = compute_fixes(&[incorrect("明", "XY", "AB")]);
        assert_eq!(groups[0].description(), "明: \"XY\" → \"AB\" (1 instances)");
    }
}
