//! Backward-scan resolution of the group enclosing an annotation.

use super::syntax::{is_word_char, AnnotationSyntax, BINDING_KEYWORD, COLLECTION_OPENER};

/// Context reported when no enclosing group can be determined.
pub const UNKNOWN_CONTEXT: &str = "unknown";

/// Line index over a corpus for repeated context lookups.
#[derive(Debug, Clone)]
pub struct ContextIndex<'a> {
    lines: Vec<&'a str>,
    group_suffix: &'a str,
}

impl<'a> ContextIndex<'a> {
    pub fn new(text: &'a str, syntax: &'a AnnotationSyntax) -> Self {
        Self {
            lines: text.lines().collect(),
            group_suffix: syntax.group_suffix(),
        }
    }

    /// Name of the group enclosing `line_number` (1-based), or `"unknown"`.
    ///
    /// Scans from the line itself toward the top of the corpus. The first
    /// group-start declaration wins; any other collection binding met first
    /// ends the scan, so context never leaks across unrelated declarations.
    pub fn resolve(&self, line_number: usize) -> String {
        let end = line_number.min(self.lines.len());

        for line in self.lines[..end].iter().rev() {
            if let Some(name) = group_name(line, self.group_suffix) {
                return name.to_string();
            }
            if is_binding_start(line) {
                break;
            }
        }

        UNKNOWN_CONTEXT.to_string()
    }
}

/// Resolve a single line's context without building an index first.
pub fn resolve_context(line_number: usize, text: &str, syntax: &AnnotationSyntax) -> String {
    ContextIndex::new(text, syntax).resolve(line_number)
}

/// `let <ident><suffix> = [` anywhere on the line.
fn group_name<'l>(line: &'l str, suffix: &str) -> Option<&'l str> {
    for (index, _) in line.match_indices(BINDING_KEYWORD) {
        let rest = &line[index + BINDING_KEYWORD.len()..];
        let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        let ident = &rest[..len];

        if ident.len() > suffix.len()
            && ident.ends_with(suffix)
            && rest[len..].starts_with(COLLECTION_OPENER)
        {
            return Some(ident);
        }
    }
    None
}

/// Any binding that opens an ordered collection.
fn is_binding_start(line: &str) -> bool {
    line.contains(BINDING_KEYWORD) && line.contains(COLLECTION_OPENER)
}
