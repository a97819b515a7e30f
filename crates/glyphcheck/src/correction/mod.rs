//! Correction planning, application and persistence.
//!
//! Incorrect findings are deduplicated into [`CorrectionGroup`]s, applied as
//! literal prefix replacements, and the corpus is rewritten in one atomic
//! step:
//!
//! ```
//! use glyphcheck::correction::{apply_fixes, compute_fixes};
//! use glyphcheck::corpus::extract;
//! use glyphcheck::reference::ReferenceDatabase;
//! use glyphcheck::validation::validate_all;
//!
//! let db = ReferenceDatabase::build("AB\t明\t10\n");
//! let text = r#"makeChar("明", "XY", None, ())"#;
//! let report = validate_all(&db, &extract(text), text);
//!
//! let applied = apply_fixes(text, &compute_fixes(&report.incorrect));
//! assert_eq!(applied.text, r#"makeChar("明", "AB", None, ())"#);
//! assert_eq!(applied.total_replaced, 1);
//! ```

mod apply;
mod fix;
mod persistence;

pub use apply::{apply_fixes, AppliedFix, AppliedFixes, Corrector};
pub use fix::{compute_fixes, CorrectionGroup};
pub use persistence::{backup_corpus, history_directory, write_atomic};
