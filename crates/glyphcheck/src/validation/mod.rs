//! Classification of annotations against the reference database.

mod finding;
mod validator;

pub use finding::{Classification, Finding};
pub use validator::{classify, group_by_context, validate_all, ValidationReport, Validator};
