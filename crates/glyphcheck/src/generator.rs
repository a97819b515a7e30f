//! Generation of annotation tokens from reference lookups.

use std::collections::HashMap;

use crate::corpus::AnnotationSyntax;
use crate::reference::{LookupResult, ReferenceDatabase};

/// Renders ready-to-paste annotation tokens with verified codes.
#[derive(Debug, Clone, Default)]
pub struct AnnotationGenerator {
    syntax: AnnotationSyntax,
}

impl AnnotationGenerator {
    pub fn new(syntax: AnnotationSyntax) -> Self {
        Self { syntax }
    }

    /// `marker("<char>", "<code>", None, ())`, with an optional trailing comment.
    pub fn render(&self, character: &str, code: &str, comment: Option<&str>) -> String {
        let mut token = format!("{}, None, ())", self.syntax.prefix(character, code));
        if let Some(comment) = comment {
            token.push_str(", // ");
            token.push_str(comment);
        }
        token
    }

    /// Render one line per lookup result; missing characters become comments.
    pub fn render_all(
        &self,
        results: &[LookupResult],
        comments: &HashMap<String, String>,
    ) -> Vec<String> {
        results
            .iter()
            .map(|result| match &result.code {
                Some(code) => self.render(
                    &result.character,
                    code,
                    comments.get(&result.character).map(String::as_str),
                ),
                None => format!("// NOT FOUND: {}", result.character),
            })
            .collect()
    }

    /// Look up characters and render their tokens.
    pub fn generate<S: AsRef<str>>(&self, db: &ReferenceDatabase, characters: &[S]) -> Vec<String> {
        let results = db.lookup_many(characters.iter().map(|c| c.as_ref()));
        self.render_all(&results, &HashMap::new())
    }
}

/// Turn command-line arguments into individual characters.
///
/// Single-character arguments are kept as-is; longer ones are split, so
/// `["明林", "炎"]` and `["明", "林", "炎"]` are equivalent.
pub fn split_characters<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.as_ref().chars().map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let generator = AnnotationGenerator::default();
        assert_eq!(
            generator.render("明", "AB", None),
            r#"makeChar("明", "AB", None, ())"#
        );
        assert_eq!(
            generator.render("明", "AB", Some("bright")),
            r#"makeChar("明", "AB", None, ()), // bright"#
        );
    }

    #[test]
    fn test_generate_marks_missing() {
        let db = ReferenceDatabase::build("AB\t明\n");
        let lines = AnnotationGenerator::default().generate(&db, &["明", "炎"]);

        assert_eq!(lines[0], r#"makeChar("明", "AB", None, ())"#);
        assert_eq!(lines[1], "// NOT FOUND: 炎");
    }

    #[test]
    fn test_render_all_with_comments() {
        let db = ReferenceDatabase::build("AB\t明\n");
        let results = db.lookup_many(["明"]);
        let comments = HashMap::from([("明".to_string(), "bright".to_string())]);

        let lines = AnnotationGenerator::default().render_all(&results, &comments);
        assert!(lines[0].ends_with("// bright"));
    }

    #[test]
    fn test_split_characters() {
        assert_eq!(split_characters(&["明林", "炎"]), vec!["明", "林", "炎"]);
        assert!(split_characters::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_generated_tokens_are_extractable() {
        let db = ReferenceDatabase::build("AB\t明\nCD\t林\n");
        let text = AnnotationGenerator::default().generate(&db, &["明", "林"]).join("\n");
        let found = crate::corpus::extract(&text);

        assert_eq!(found.len(), 2);
        assert_eq!(found[1].code, "CD");
    }
}
