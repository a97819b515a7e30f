//! Annotation token extraction.
//!
//! A token is the marker keyword immediately followed by `(`, a quoted
//! character, `,`, optional whitespace and a quoted code:
//! `makeChar("明", "AB", None, ())`. Anything after the code is ignored.
//!
//! Quoted strings end at the first `"`. Escaped quotes are not supported:
//! `makeChar("\"", ...)` yields the character `\`.

use serde::{Deserialize, Serialize};

use super::syntax::AnnotationSyntax;

/// One character/code occurrence in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub character: String,
    pub code: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based character column of the marker.
    pub column: usize,
    /// The full source line, without its terminator.
    pub line_content: String,
}

/// Scans corpus text for annotation tokens.
#[derive(Debug, Clone, Default)]
pub struct AnnotationExtractor {
    syntax: AnnotationSyntax,
}

impl AnnotationExtractor {
    pub fn new(syntax: AnnotationSyntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &AnnotationSyntax {
        &self.syntax
    }

    /// Extract every annotation in document order.
    pub fn extract(&self, text: &str) -> Vec<Annotation> {
        let mut annotations = Vec::new();

        for (index, line) in text.lines().enumerate() {
            for token in Tokens::new(line, self.syntax.marker()) {
                annotations.push(Annotation {
                    character: token.character.to_string(),
                    code: token.code.to_string(),
                    line: index + 1,
                    column: line[..token.start].chars().count() + 1,
                    line_content: line.to_string(),
                });
            }
        }

        annotations
    }
}

/// Extract annotations using the default syntax.
pub fn extract(text: &str) -> Vec<Annotation> {
    AnnotationExtractor::default().extract(text)
}

#[derive(Debug, PartialEq, Eq)]
struct Token<'a> {
    start: usize,
    character: &'a str,
    code: &'a str,
}

/// Left-to-right token iterator over a single line.
struct Tokens<'a> {
    line: &'a str,
    marker: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str, marker: &'a str) -> Self {
        Self { line, marker, pos: 0 }
    }

    /// Try to read a token whose marker starts at `start`.
    ///
    /// Returns the token and the byte offset just past the code's closing quote.
    fn parse_at(&self, start: usize) -> Option<(Token<'a>, usize)> {
        let mut cursor = Cursor {
            rest: &self.line[start + self.marker.len()..],
        };

        cursor.expect('(')?;
        let character = cursor.quoted()?;
        cursor.expect(',')?;
        cursor.skip_whitespace();
        let code = cursor.quoted()?;

        let end = self.line.len() - cursor.rest.len();
        Some((
            Token {
                start,
                character,
                code,
            },
            end,
        ))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.line.len() {
            let start = self.pos + self.line[self.pos..].find(self.marker)?;

            match self.parse_at(start) {
                Some((token, end)) => {
                    self.pos = end;
                    return Some(token);
                }
                None => {
                    // Resume one character past the failed marker.
                    let step = self.line[start..].chars().next().map_or(1, char::len_utf8);
                    self.pos = start + step;
                }
            }
        }
        None
    }
}

/// Minimal forward-only reader over the remainder of a line.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn expect(&mut self, c: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(c)?;
        Some(())
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// A non-empty `"..."` string, ending at the first closing quote.
    fn quoted(&mut self) -> Option<&'a str> {
        let body = self.rest.strip_prefix('"')?;
        let len = body.find('"')?;
        if len == 0 {
            return None;
        }
        self.rest = &body[len + 1..];
        Some(&body[..len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annot() -> AnnotationExtractor {
        AnnotationExtractor::new(AnnotationSyntax::new("ANNOT").unwrap())
    }

    #[test]
    fn test_extract_single() {
        let found = annot().extract(r#"  ANNOT("明", "XY", ()),"#);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].character, "明");
        assert_eq!(found[0].code, "XY");
        assert_eq!(found[0].line, 1);
        assert_eq!(found[0].column, 3);
        assert_eq!(found[0].line_content, r#"  ANNOT("明", "XY", ()),"#);
    }

    #[test]
    fn test_document_order() {
        let text = "ANNOT(\"a\", \"A\", ()), ANNOT(\"b\", \"B\", ())\n\
                    no tokens here\n\
                    ANNOT(\"c\", \"C\", ())\n";
        let found = annot().extract(text);

        let order: Vec<(usize, &str)> = found
            .iter()
            .map(|a| (a.line, a.character.as_str()))
            .collect();
        assert_eq!(order, vec![(1, "a"), (1, "b"), (3, "c")]);
        assert_eq!(found[0].line_content, found[1].line_content);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(annot().extract("").is_empty());
    }

    #[test]
    fn test_whitespace_after_comma_is_optional() {
        let found = annot().extract(r#"ANNOT("明","AB") ANNOT("林",    "CD")"#);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].code, "CD");
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        let text = concat!(
            r#"ANNOT ("明", "AB") "#,
            r#"ANNOT( "明", "AB") "#,
            r#"ANNOT("", "AB") "#,
            r#"ANNOT("明" , "AB") "#,
            r#"ANNOT("明", "") "#,
            r#"ANNOT("明", AB) "#,
            r#"ANNOT("明""#,
        );
        assert!(annot().extract(text).is_empty());
    }

    #[test]
    fn test_failed_marker_does_not_hide_next_token() {
        let found = annot().extract(r#"ANNOTANNOT("明", "AB")"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].column, 6);
    }

    #[test]
    fn test_escaped_quote_is_literal() {
        let found = annot().extract(r#"ANNOT("\"", "AB")"#);
        assert!(found.is_empty());

        let found = annot().extract(r#"ANNOT("\", "AB")"#);
        assert_eq!(found[0].character, "\\");
    }

    #[test]
    fn test_trailing_arguments_ignored() {
        let found = extract(r#"makeChar("日", "A", Some(["日"]), ()), // sun"#);
        assert_eq!(found[0].code, "A");
    }

    #[test]
    fn test_crlf_lines() {
        let found = annot().extract("x\r\nANNOT(\"明\", \"AB\")\r\n");
        assert_eq!(found[0].line, 2);
        assert_eq!(found[0].line_content, "ANNOT(\"明\", \"AB\")");
    }
}
