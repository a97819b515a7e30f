//! Lesson corpus handling: token syntax, annotation extraction and
//! group context resolution.
//!
//! The corpus is treated as opaque text. Only two shapes are recognised:
//!
//! ```text
//! let lesson1Characters = [          <- group start (backward-scan landmark)
//!   makeChar("明", "AB", None, ()),   <- annotation token
//! ]
//! ```

mod annotation;
mod context;
mod source;
mod syntax;

pub use annotation::{extract, Annotation, AnnotationExtractor};
pub use context::{resolve_context, ContextIndex, UNKNOWN_CONTEXT};
pub use source::{Corpus, CorpusSource};
pub use syntax::{AnnotationSyntax, DEFAULT_GROUP_SUFFIX, DEFAULT_MARKER};
