//! glyphcheck: validate and repair character input-code annotations.
//!
//! A lesson corpus embeds tokens such as `makeChar("明", "AB", None, ())`.
//! glyphcheck checks every token against an authoritative reference
//! database and can rewrite the corpus so that each character carries its
//! canonical code.
//!
//! # Pipeline
//!
//! - **Reference**: build an immutable character → code mapping (first record wins)
//! - **Extract**: find annotation tokens in document order
//! - **Validate**: classify each as valid, incorrect or unknown, with group context
//! - **Correct**: deduplicate fixes, apply literal prefix replacements, write atomically
//!
//! # Example
//!
//! ```no_run
//! use glyphcheck::{Checker, CheckerConfig, FixOptions};
//!
//! let checker = Checker::with_config(
//!     CheckerConfig::default()
//!         .with_reference_path("public/assets/cangjie5.txt")
//!         .with_corpus_path("src/CangjieData.res"),
//! );
//!
//! let db = checker.load_reference().unwrap();
//! let corpus = checker.load_corpus().unwrap();
//! let result = checker.validate(&db, &corpus);
//! println!("Incorrect: {}", result.report.incorrect.len());
//!
//! if !result.report.incorrect.is_empty() {
//!     checker.fix(&db, FixOptions::default()).unwrap();
//! }
//! ```

pub mod correction;
pub mod corpus;
pub mod error;
pub mod generator;
pub mod reference;
pub mod validation;

mod checker;

pub use crate::checker::{
    CheckResult, Checker, CheckerConfig, FixOptions, FixReport, DEFAULT_CORPUS_PATH,
    DEFAULT_REFERENCE_PATH,
};
pub use correction::{AppliedFix, AppliedFixes, CorrectionGroup};
pub use corpus::{Annotation, AnnotationSyntax, Corpus, CorpusSource};
pub use error::{GlyphcheckError, Result};
pub use generator::{split_characters, AnnotationGenerator};
pub use reference::{CodeCheck, LookupResult, ReferenceDatabase};
pub use validation::{Classification, Finding, ValidationReport};
