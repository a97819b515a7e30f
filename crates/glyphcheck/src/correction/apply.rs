//! Literal prefix replacement over corpus text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::AnnotationSyntax;

use super::fix::CorrectionGroup;

/// A correction group and the replacements it actually made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFix {
    #[serde(flatten)]
    pub group: CorrectionGroup,
    /// Replacements counted in the text; authoritative over `group.occurrences`.
    pub replaced: usize,
}

/// Corrected text and per-group replacement counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFixes {
    #[serde(skip)]
    pub text: String,
    pub total_replaced: usize,
    pub fixes: Vec<AppliedFix>,
}

impl AppliedFixes {
    /// Whether any replacement was made.
    pub fn changed(&self) -> bool {
        self.total_replaced > 0
    }

    /// Groups whose replacement count differs from the validation count,
    /// e.g. tokens written with non-canonical spacing.
    pub fn mismatched(&self) -> impl Iterator<Item = &AppliedFix> {
        self.fixes
            .iter()
            .filter(|fix| fix.replaced != fix.group.occurrences)
    }
}

/// Applies correction groups to corpus text.
#[derive(Debug, Clone, Default)]
pub struct Corrector {
    syntax: AnnotationSyntax,
}

impl Corrector {
    pub fn new(syntax: AnnotationSyntax) -> Self {
        Self { syntax }
    }

    /// Replace `marker("<char>", "<old>"` with `marker("<char>", "<new>"`
    /// for every group, across the whole text.
    ///
    /// Matching is literal and non-overlapping. Bytes outside replaced
    /// prefixes are preserved. With no groups the text is returned unchanged.
    pub fn apply_fixes(&self, text: &str, groups: &[CorrectionGroup]) -> AppliedFixes {
        let mut content = text.to_string();
        let mut fixes = Vec::with_capacity(groups.len());
        let mut total_replaced = 0;

        for group in groups {
            let old = self.syntax.prefix(&group.character, &group.old_code);
            let new = self.syntax.prefix(&group.character, &group.new_code);

            let replaced = content.matches(old.as_str()).count();
            if replaced > 0 {
                content = content.replace(&old, &new);
            }

            debug!(
                character = %group.character,
                old = %group.old_code,
                new = %group.new_code,
                replaced,
                "applied correction group"
            );

            total_replaced += replaced;
            fixes.push(AppliedFix {
                group: group.clone(),
                replaced,
            });
        }

        AppliedFixes {
            text: content,
            total_replaced,
            fixes,
        }
    }
}

/// Apply fixes using the default syntax.
pub fn apply_fixes(text: &str, groups: &[CorrectionGroup]) -> AppliedFixes {
    Corrector::default().apply_fixes(text, groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(character: &str, old: &str, new: &str, occurrences: usize) -> CorrectionGroup {
        CorrectionGroup {
            character: character.to_string(),
            old_code: old.to_string(),
            new_code: new.to_string(),
            occurrences,
        }
    }

    fn annot() -> Corrector {
        Corrector::new(AnnotationSyntax::new("ANNOT").unwrap())
    }

    #[test]
    fn test_apply_single() {
        let applied = annot().apply_fixes(
            r#"ANNOT("明", "XY", ())"#,
            &[group("明", "XY", "AB", 1)],
        );

        assert_eq!(applied.text, r#"ANNOT("明", "AB", ())"#);
        assert_eq!(applied.total_replaced, 1);
        assert!(applied.changed());
    }

    #[test]
    fn test_no_groups_is_noop() {
        let text = "let x = [\n  ANNOT(\"明\", \"AB\", ()),\n]\n";
        let applied = annot().apply_fixes(text, &[]);

        assert_eq!(applied.text, text);
        assert_eq!(applied.total_replaced, 0);
        assert!(!applied.changed());
    }

    #[test]
    fn test_prefix_code_not_rewritten() {
        // Fixing "A" must not touch "AB" for the same character or "A" elsewhere.
        let text = r#"ANNOT("日", "A") ANNOT("日", "AB") ANNOT("月", "A") code "A""#;
        let applied = annot().apply_fixes(text, &[group("日", "A", "B", 1)]);

        assert_eq!(
            applied.text,
            r#"ANNOT("日", "B") ANNOT("日", "AB") ANNOT("月", "A") code "A""#
        );
        assert_eq!(applied.total_replaced, 1);
    }

    #[test]
    fn test_special_characters_are_literal() {
        let text = r#"ANNOT("(", ".*") ANNOT("(", "XX")"#;
        let applied = annot().apply_fixes(text, &[group("(", ".*", "HX", 1)]);

        assert_eq!(applied.text, r#"ANNOT("(", "HX") ANNOT("(", "XX")"#);
        assert_eq!(applied.total_replaced, 1);
    }

    #[test]
    fn test_counts_actual_replacements() {
        let text = "ANNOT(\"明\", \"XY\")\nANNOT(\"明\",\"XY\")\nANNOT(\"明\", \"XY\")\n";
        let applied = annot().apply_fixes(text, &[group("明", "XY", "AB", 3)]);

        assert_eq!(applied.total_replaced, 2);
        let mismatched: Vec<_> = applied.mismatched().collect();
        assert_eq!(mismatched.len(), 1);
        assert_eq!(mismatched[0].replaced, 2);
    }

    #[test]
    fn test_preserves_surrounding_bytes() {
        let text = "// header\r\n\tANNOT(\"明\", \"XY\", None, ()), // 明\r\ntrailing";
        let applied = annot().apply_fixes(text, &[group("明", "XY", "AB", 1)]);

        assert_eq!(
            applied.text,
            "// header\r\n\tANNOT(\"明\", \"AB\", None, ()), // 明\r\ntrailing"
        );
    }
}
