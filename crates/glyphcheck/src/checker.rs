//! Main Checker struct and public API.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::correction::{
    backup_corpus, compute_fixes, write_atomic, AppliedFixes, CorrectionGroup, Corrector,
};
use crate::corpus::{Annotation, AnnotationExtractor, AnnotationSyntax, Corpus, CorpusSource};
use crate::error::Result;
use crate::generator::AnnotationGenerator;
use crate::reference::{LookupResult, ReferenceDatabase};
use crate::validation::{ValidationReport, Validator};

/// Default location of the reference corpus.
pub const DEFAULT_REFERENCE_PATH: &str = "public/assets/cangjie5.txt";

/// Default location of the lesson corpus.
pub const DEFAULT_CORPUS_PATH: &str = "src/CangjieData.res";

/// Configuration for a check or fix run.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Path to the tab-separated reference corpus.
    pub reference_path: PathBuf,
    /// Path to the lesson corpus.
    pub corpus_path: PathBuf,
    /// Marker keyword and group suffix.
    pub syntax: AnnotationSyntax,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            syntax: AnnotationSyntax::default(),
        }
    }
}

impl CheckerConfig {
    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_path = path.into();
        self
    }

    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = path.into();
        self
    }

    pub fn with_syntax(mut self, syntax: AnnotationSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}

/// Options for [`Checker::fix`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    /// Compute and report fixes without writing the corpus.
    pub dry_run: bool,
    /// Copy the original corpus into its history directory before writing.
    pub backup: bool,
}

/// Result of validating the lesson corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Metadata about the lesson corpus.
    pub source: CorpusSource,
    /// Distinct characters in the reference database.
    pub reference_entries: usize,
    /// Annotation instances found in the corpus.
    pub annotations: usize,
    pub report: ValidationReport,
}

/// Result of fixing the lesson corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixReport {
    /// Metadata about the corpus as it was read.
    pub source: CorpusSource,
    /// Annotation instances found in the corpus.
    pub annotations: usize,
    /// Incorrect instances found before fixing.
    pub incorrect: usize,
    /// Replacements made, per group.
    pub applied: AppliedFixes,
    /// Validation of the corrected text.
    pub remaining: ValidationReport,
    /// Whether the corpus file was rewritten.
    pub written: bool,
    /// Backup of the original corpus, if one was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    pub fixed_at: DateTime<Utc>,
}

/// The lookup-validate-correct pipeline.
pub struct Checker {
    config: CheckerConfig,
    extractor: AnnotationExtractor,
    validator: Validator,
    corrector: Corrector,
}

impl Checker {
    /// Create a new Checker with default configuration.
    pub fn new() -> Self {
        Self::with_config(CheckerConfig::default())
    }

    /// Create a Checker with custom configuration.
    pub fn with_config(config: CheckerConfig) -> Self {
        let extractor = AnnotationExtractor::new(config.syntax.clone());
        let validator = Validator::new(config.syntax.clone());
        let corrector = Corrector::new(config.syntax.clone());

        Self {
            config,
            extractor,
            validator,
            corrector,
        }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Load the reference database from the configured path.
    pub fn load_reference(&self) -> Result<ReferenceDatabase> {
        ReferenceDatabase::load(&self.config.reference_path)
    }

    /// Load the lesson corpus from the configured path.
    pub fn load_corpus(&self) -> Result<Corpus> {
        Corpus::load(&self.config.corpus_path)
    }

    /// Look up codes for ad-hoc characters.
    pub fn lookup<S: AsRef<str>>(
        &self,
        db: &ReferenceDatabase,
        characters: &[S],
    ) -> Vec<LookupResult> {
        db.lookup_many(characters.iter().map(|c| c.as_ref()))
    }

    /// Token generator using the configured syntax.
    pub fn generator(&self) -> AnnotationGenerator {
        AnnotationGenerator::new(self.config.syntax.clone())
    }

    /// Extract annotations from corpus text.
    pub fn extract(&self, text: &str) -> Vec<Annotation> {
        self.extractor.extract(text)
    }

    /// Validate corpus text against the reference.
    pub fn validate_text(&self, db: &ReferenceDatabase, text: &str) -> ValidationReport {
        let annotations = self.extractor.extract(text);
        self.validator.validate_all(db, &annotations, text)
    }

    /// Validate a loaded corpus.
    pub fn validate(&self, db: &ReferenceDatabase, corpus: &Corpus) -> CheckResult {
        let annotations = self.extractor.extract(&corpus.text);
        let report = self.validator.validate_all(db, &annotations, &corpus.text);

        CheckResult {
            source: corpus.source.clone(),
            reference_entries: db.len(),
            annotations: annotations.len(),
            report,
        }
    }

    /// Load both inputs and validate.
    pub fn check(&self) -> Result<CheckResult> {
        let db = self.load_reference()?;
        let corpus = self.load_corpus()?;
        Ok(self.validate(&db, &corpus))
    }

    /// Correction groups for a validation report.
    pub fn plan_fixes(&self, report: &ValidationReport) -> Vec<CorrectionGroup> {
        compute_fixes(&report.incorrect)
    }

    /// Compute fixes for a corpus without touching the filesystem.
    pub fn fix_corpus(&self, db: &ReferenceDatabase, corpus: &Corpus) -> FixReport {
        let checked = self.validate(db, corpus);
        let groups = self.plan_fixes(&checked.report);
        let applied = self.corrector.apply_fixes(&corpus.text, &groups);
        let remaining = self.validate_text(db, &applied.text);

        FixReport {
            source: corpus.source.clone(),
            annotations: checked.annotations,
            incorrect: checked.report.incorrect.len(),
            applied,
            remaining,
            written: false,
            backup: None,
            fixed_at: Utc::now(),
        }
    }

    /// Fix the configured corpus in place.
    ///
    /// The corpus is only rewritten when at least one replacement was made
    /// and `dry_run` is off. The write is atomic.
    pub fn fix(&self, db: &ReferenceDatabase, options: FixOptions) -> Result<FixReport> {
        let corpus = self.load_corpus()?;
        let mut report = self.fix_corpus(db, &corpus);

        if options.dry_run || !report.applied.changed() {
            return Ok(report);
        }

        if options.backup {
            report.backup = backup_corpus(&self.config.corpus_path)?;
        }

        write_atomic(&self.config.corpus_path, &report.applied.text)?;
        report.written = true;

        info!(
            path = %self.config.corpus_path.display(),
            replaced = report.applied.total_replaced,
            "fixed lesson corpus"
        );

        Ok(report)
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}
