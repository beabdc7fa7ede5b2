//! Programmatic construction of path expressions.

use crate::parser::is_identifier_char;
use crate::{Condition, Literal, ParseError, PathExpression, Segment};

/// Fluent builder for [`PathExpression`].
///
/// Names and literals are validated on [`PathBuilder::build`], so every built
/// expression prints to a string that compiles back to the same expression.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<Segment>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.segments.push(Segment::Property(name.into()));
        self
    }

    pub fn filter(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.segments
            .push(Segment::Filter(conditions.into_iter().collect()));
        self
    }

    pub fn build(self) -> Result<PathExpression, ParseError> {
        for segment in &self.segments {
            match segment {
                Segment::Property(name) => check_identifier(name)?,
                Segment::Filter(conditions) => {
                    if conditions.is_empty() {
                        return Err(ParseError::EmptyFilter(0));
                    }
                    for condition in conditions {
                        check_identifier(&condition.field)?;
                        if let Literal::String(s) = &condition.expected {
                            if s.contains('\'') && s.contains('"') {
                                return Err(ParseError::UnrepresentableLiteral(s.clone()));
                            }
                        }
                    }
                }
            }
        }
        Ok(PathExpression::new(self.segments))
    }
}

/// Positions in builder errors are offsets into the offending name.
fn check_identifier(name: &str) -> Result<(), ParseError> {
    if name.is_empty() {
        return Err(ParseError::ExpectedIdentifier(0));
    }
    match name.char_indices().find(|(_, c)| !is_identifier_char(*c)) {
        Some((position, ch)) => Err(ParseError::UnexpectedChar { ch, position }),
        None => Ok(()),
    }
}

/// Path to one variant of a property value inside a content document:
///
/// ```text
/// $.values[?(@.alias == '<alias>' && @.culture == <culture> && @.segment == <segment>)].value
/// ```
///
/// `None` for culture or segment targets the invariant or unsegmented value
/// and is written as `null`.
pub fn variant_value_path(
    alias: &str,
    culture: Option<&str>,
    segment: Option<&str>,
) -> Result<PathExpression, ParseError> {
    PathBuilder::new()
        .property("values")
        .filter([
            Condition::equals("alias", alias),
            Condition::new("culture", culture),
            Condition::new("segment", segment),
        ])
        .property("value")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathParser;

    #[test]
    fn variant_value_path_renders_nulls() {
        let expr = variant_value_path("title", Some("en-US"), None).unwrap();
        assert_eq!(
            expr.to_string(),
            "$.values[?(@.alias == 'title' && @.culture == 'en-US' && @.segment == null)].value"
        );
    }

    #[test]
    fn built_paths_recompile_identically() {
        let expr = PathBuilder::new()
            .property("values")
            .filter([Condition::equals("alias", "contentBlocks"), Condition::is_null("culture")])
            .property("value")
            .property("contentData")
            .filter([Condition::equals("key", "it's-a-key")])
            .build()
            .unwrap();
        let printed = expr.to_string();
        assert_eq!(PathParser::compile(&printed).unwrap(), expr);
    }

    #[test]
    fn build_rejects_what_the_grammar_cannot_express() {
        assert_eq!(
            PathBuilder::new().property("").build(),
            Err(ParseError::ExpectedIdentifier(0))
        );
        assert_eq!(
            PathBuilder::new().property("a.b").build(),
            Err(ParseError::UnexpectedChar {
                ch: '.',
                position: 1
            })
        );
        assert_eq!(
            PathBuilder::new().filter(Vec::<Condition>::new()).build(),
            Err(ParseError::EmptyFilter(0))
        );
        assert_eq!(
            PathBuilder::new()
                .filter([Condition::equals("alias", r#"a'b"c"#)])
                .build(),
            Err(ParseError::UnrepresentableLiteral(r#"a'b"c"#.into()))
        );
    }
}
