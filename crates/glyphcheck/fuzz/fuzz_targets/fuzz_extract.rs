//! Fuzz target for annotation extraction and correction.
//!
//! Checks that scanning arbitrary text never panics, and that applying fixes
//! derived from that text only swaps codes: the line count is unchanged and
//! the length changes by exactly the code substitutions made.

#![no_main]

use glyphcheck::correction::{apply_fixes, compute_fixes};
use glyphcheck::corpus::extract;
use glyphcheck::validation::validate_all;
use glyphcheck::ReferenceDatabase;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let db = ReferenceDatabase::build("A\t日\nB\t月\nDD\t林\n");
    let annotations = extract(text);
    let report = validate_all(&db, &annotations, text);
    assert_eq!(report.total(), annotations.len());

    let applied = apply_fixes(text, &compute_fixes(&report.incorrect));
    assert_eq!(applied.text.lines().count(), text.lines().count());

    let expected_len = applied.fixes.iter().fold(text.len() as isize, |len, fix| {
        let delta = fix.group.new_code.len() as isize - fix.group.old_code.len() as isize;
        len + delta * fix.replaced as isize
    });
    assert_eq!(applied.text.len() as isize, expected_len);
});
