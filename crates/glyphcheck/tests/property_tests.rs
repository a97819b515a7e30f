//! Property-based tests for the validate/correct pipeline.
//!
//! ```bash
//! cargo test -p glyphcheck --test property_tests
//! PROPTEST_CASES=10000 cargo test -p glyphcheck --test property_tests
//! ```

use proptest::prelude::*;

use glyphcheck::correction::{apply_fixes, compute_fixes};
use glyphcheck::corpus::extract;
use glyphcheck::validation::{classify, validate_all};
use glyphcheck::{Classification, ReferenceDatabase};

// =============================================================================
// Test Strategies
// =============================================================================

/// A small CJK alphabet so generated corpora hit the reference often.
fn character() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["明", "林", "炎", "日", "月", "木", "火"])
        .prop_map(String::from)
}

fn code() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,5}"
}

/// Reference records; duplicates exercise first-occurrence-wins.
fn reference() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((code(), character()), 0..10)
}

/// Lesson lines, each a mix of tokens and filler text.
fn lessons() -> impl Strategy<Value = String> {
    let token = (character(), code())
        .prop_map(|(c, k)| format!("makeChar(\"{}\", \"{}\", None, ())", c, k));
    let line = prop::collection::vec(
        prop_oneof![token, "[ a-z,=\\[\\]]{0,12}".prop_map(String::from)],
        0..4,
    )
    .prop_map(|parts| parts.join(" "));
    prop::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
}

fn reference_text(records: &[(String, String)]) -> String {
    records
        .iter()
        .map(|(code, character)| format!("{}\t{}\t1\n", code, character))
        .collect()
}

proptest! {
    /// Extraction never panics on arbitrary text.
    #[test]
    fn extract_never_panics(text in "\\PC{0,200}") {
        let _ = extract(&text);
    }

    /// Reference parsing never panics on arbitrary text.
    #[test]
    fn build_never_panics(text in "\\PC{0,200}") {
        let _ = ReferenceDatabase::build(&text);
    }

    /// The first record for a character defines its code.
    #[test]
    fn first_occurrence_wins(records in reference()) {
        let db = ReferenceDatabase::build(&reference_text(&records));
        for (_, character) in &records {
            let first = records.iter().find(|(_, c)| c == character).map(|(k, _)| k.to_uppercase());
            prop_assert_eq!(db.lookup(character).map(str::to_string), first);
        }
    }

    /// Every annotation lands in exactly one bucket; Unknown iff absent.
    #[test]
    fn classification_is_exhaustive(records in reference(), text in lessons()) {
        let db = ReferenceDatabase::build(&reference_text(&records));
        let annotations = extract(&text);
        let report = validate_all(&db, &annotations, &text);

        prop_assert_eq!(report.total(), annotations.len());
        for annotation in &annotations {
            let unknown = classify(&db, annotation) == Classification::Unknown;
            prop_assert_eq!(unknown, !db.contains(&annotation.character));
        }
    }

    /// One fix pass leaves no incorrect annotations.
    #[test]
    fn fixes_converge(records in reference(), text in lessons()) {
        let db = ReferenceDatabase::build(&reference_text(&records));
        let report = validate_all(&db, &extract(&text), &text);
        let applied = apply_fixes(&text, &compute_fixes(&report.incorrect));

        let after = validate_all(&db, &extract(&applied.text), &applied.text);
        prop_assert!(after.incorrect.is_empty());
        prop_assert_eq!(after.unknown.len(), report.unknown.len());
        prop_assert_eq!(applied.total_replaced, report.incorrect.len());
    }

    /// Applying fixes to already-correct text is a no-op.
    #[test]
    fn fixes_are_idempotent(records in reference(), text in lessons()) {
        let db = ReferenceDatabase::build(&reference_text(&records));
        let report = validate_all(&db, &extract(&text), &text);
        let fixed = apply_fixes(&text, &compute_fixes(&report.incorrect)).text;

        let again = validate_all(&db, &extract(&fixed), &fixed);
        let applied = apply_fixes(&fixed, &compute_fixes(&again.incorrect));
        prop_assert_eq!(applied.text, fixed);
        prop_assert_eq!(applied.total_replaced, 0);
    }
}
