//! Compiled path expression types.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{ParseError, PathParser};

/// Right-hand side of a filter condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Quoted string literal, `'en-US'` or `"en-US"`.
    String(String),
    /// The `null` literal.
    Null,
}

impl Literal {
    /// Exact match against a document value: `Null` only matches JSON null,
    /// a string literal only matches a JSON string with identical characters.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Null, Value::Null) => true,
            (Literal::String(expected), Value::String(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Literal::Null)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::String(s) if s.contains('\'') => write!(f, "\"{s}\""),
            Literal::String(s) => write!(f, "'{s}'"),
        }
    }
}

/// One equality test inside a filter: `@.field == literal`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition {
    pub field: String,
    pub expected: Literal,
}

impl Condition {
    pub fn new(field: impl Into<String>, expected: impl Into<Literal>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// `@.field == 'value'`
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Literal::String(value.into()))
    }

    /// `@.field == null`
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::new(field, Literal::Null)
    }

    /// True when `element` is an object whose `field` equals the literal.
    /// A missing field never matches, not even `null`.
    pub fn holds_for(&self, element: &Value) -> bool {
        element
            .as_object()
            .and_then(|map| map.get(&self.field))
            .is_some_and(|actual| self.expected.matches(actual))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@.{} == {}", self.field, self.expected)
    }
}

/// One step of a compiled path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object field access: `.name`
    Property(String),
    /// Array element filter: `[?(@.a == 'x' && @.b == null)]`.
    ///
    /// Compiled and built filters hold at least one condition; all of them
    /// must hold. A filter constructed with no conditions selects nothing.
    Filter(Vec<Condition>),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Property(name) => write!(f, ".{name}"),
            Segment::Filter(conditions) => {
                f.write_str("[?(")?;
                for (idx, condition) in conditions.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" && ")?;
                    }
                    write!(f, "{condition}")?;
                }
                f.write_str(")]")
            }
        }
    }
}

/// A compiled path, anchored at the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathExpression {
    pub segments: Vec<Segment>,
}

impl PathExpression {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The root path `$`.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for PathExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathParser::compile(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_matching_is_exact() {
        assert!(Literal::Null.matches(&json!(null)));
        assert!(!Literal::Null.matches(&json!("")));
        assert!(Literal::from("en-US").matches(&json!("en-US")));
        assert!(!Literal::from("en-US").matches(&json!("EN-US")));
        assert!(!Literal::from("null").matches(&json!(null)));
        assert!(!Literal::from("1").matches(&json!(1)));
    }

    #[test]
    fn condition_requires_present_field() {
        let cond = Condition::is_null("culture");
        assert!(cond.holds_for(&json!({"culture": null})));
        assert!(!cond.holds_for(&json!({"alias": "title"})));
        assert!(!cond.holds_for(&json!([null])));
    }

    #[test]
    fn display_picks_quote_style() {
        let expr = PathExpression::new(vec![
            Segment::Property("values".into()),
            Segment::Filter(vec![
                Condition::equals("alias", "it's"),
                Condition::is_null("culture"),
            ]),
            Segment::Property("value".into()),
        ]);
        assert_eq!(
            expr.to_string(),
            r#"$.values[?(@.alias == "it's" && @.culture == null)].value"#
        );
        assert_eq!(PathExpression::root().to_string(), "$");
    }

    #[test]
    fn literal_from_option() {
        assert_eq!(Literal::from(None::<&str>), Literal::Null);
        assert_eq!(Literal::from(Some("da")), Literal::String("da".into()));
    }
}
