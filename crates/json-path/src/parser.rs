//! Path compiler.
//!
//! Grammar:
//!
//! ```text
//! Path      := '$' Segment*
//! Segment   := '.' Identifier | '[?(' Condition ('&&' Condition)* ')]'
//! Condition := '@.' Identifier '==' ( 'single' | "double" | null )
//! ```
//!
//! Whitespace is accepted between tokens inside a filter and nowhere else.
//! String literals are taken verbatim; there are no escape sequences.

use crate::{Condition, Literal, ParseError, PathExpression, Segment};

/// Cursor over the source string.
#[derive(Debug, Clone)]
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn is(&self, expected: &str) -> bool {
        self.rest().starts_with(expected)
    }

    /// Length in bytes of the longest prefix whose chars satisfy `predicate`.
    fn r#match(&self, predicate: fn(char) -> bool) -> usize {
        self.rest()
            .chars()
            .take_while(|c| predicate(*c))
            .map(char::len_utf8)
            .sum()
    }

    fn skip(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.src.len());
    }

    fn ws(&mut self) {
        let len = self.r#match(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
        self.skip(len);
    }

    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(ch) => ParseError::UnexpectedChar {
                ch,
                position: self.pos,
            },
            None => ParseError::ExpectedIdentifier(self.pos),
        }
    }
}

pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Entry point of the compiler.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathParser;

impl PathParser {
    /// Compile a path string into its segment list.
    pub fn compile(path: &str) -> Result<PathExpression, ParseError> {
        if path.is_empty() {
            return Err(ParseError::Empty);
        }
        let mut p = Parser::new(path);
        if !p.is("$") {
            return Err(ParseError::MissingRoot(0));
        }
        p.skip(1);

        let mut segments = Vec::new();
        while !p.eof() {
            if p.is(".") {
                p.skip(1);
                segments.push(Segment::Property(parse_identifier(&mut p)?));
            } else if p.is("[") {
                segments.push(parse_filter(&mut p)?);
            } else {
                return Err(p.unexpected());
            }
        }
        Ok(PathExpression::new(segments))
    }

    /// Non-failing grammar check.
    pub fn is_valid(path: &str) -> bool {
        Self::compile(path).is_ok()
    }
}

fn parse_identifier(p: &mut Parser<'_>) -> Result<String, ParseError> {
    let len = p.r#match(is_identifier_char);
    if len == 0 {
        return Err(ParseError::ExpectedIdentifier(p.pos));
    }
    let ident = p.rest()[..len].to_string();
    p.skip(len);
    Ok(ident)
}

fn parse_filter(p: &mut Parser<'_>) -> Result<Segment, ParseError> {
    let start = p.pos;
    p.skip(1);
    for expected in ['?', '('] {
        match p.peek() {
            None => return Err(ParseError::UnbalancedFilter(start)),
            Some(c) if c == expected => p.skip(1),
            Some(_) => return Err(p.unexpected()),
        }
    }

    p.ws();
    if p.is(")") {
        return Err(ParseError::EmptyFilter(start));
    }

    let mut conditions = vec![parse_condition(p, start)?];
    loop {
        p.ws();
        if !p.is("&&") {
            break;
        }
        p.skip(2);
        p.ws();
        conditions.push(parse_condition(p, start)?);
    }

    for expected in [')', ']'] {
        match p.peek() {
            None => return Err(ParseError::UnbalancedFilter(start)),
            Some(c) if c == expected => p.skip(1),
            Some(_) => return Err(p.unexpected()),
        }
    }
    Ok(Segment::Filter(conditions))
}

fn parse_condition(p: &mut Parser<'_>, filter_start: usize) -> Result<Condition, ParseError> {
    if p.eof() {
        return Err(ParseError::UnbalancedFilter(filter_start));
    }
    if !p.is("@.") {
        return Err(ParseError::ExpectedCondition(p.pos));
    }
    p.skip(2);
    let field = parse_identifier(p)?;

    p.ws();
    if p.eof() {
        return Err(ParseError::UnbalancedFilter(filter_start));
    }
    if !p.is("==") {
        return Err(ParseError::ExpectedCondition(p.pos));
    }
    p.skip(2);
    p.ws();
    if p.eof() {
        return Err(ParseError::UnbalancedFilter(filter_start));
    }

    let expected = parse_literal(p)?;
    Ok(Condition { field, expected })
}

fn parse_literal(p: &mut Parser<'_>) -> Result<Literal, ParseError> {
    let start = p.pos;
    match p.peek() {
        Some(quote @ ('\'' | '"')) => {
            p.skip(1);
            let Some(len) = p.rest().find(quote) else {
                return Err(ParseError::UnterminatedString(start));
            };
            let value = p.rest()[..len].to_string();
            p.skip(len + 1);
            Ok(Literal::String(value))
        }
        _ if p.is("null") => {
            p.skip(4);
            if p.peek().is_some_and(is_identifier_char) {
                return Err(ParseError::ExpectedCondition(start));
            }
            Ok(Literal::Null)
        }
        _ => Err(ParseError::ExpectedCondition(start)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(conditions: Vec<Condition>) -> Segment {
        Segment::Filter(conditions)
    }

    fn prop(name: &str) -> Segment {
        Segment::Property(name.to_string())
    }

    #[test]
    fn compiles_root_and_properties() {
        assert_eq!(PathParser::compile("$").unwrap(), PathExpression::root());
        assert_eq!(
            PathParser::compile("$.values.value").unwrap().segments,
            vec![prop("values"), prop("value")]
        );
    }

    #[test]
    fn compiles_filter_with_mixed_literals() {
        let expr = PathParser::compile(
            r#"$.values[?(@.alias == 'title' && @.culture=="en-US" && @.segment == null)].value"#,
        )
        .unwrap();
        assert_eq!(
            expr.segments,
            vec![
                prop("values"),
                filter(vec![
                    Condition::equals("alias", "title"),
                    Condition::equals("culture", "en-US"),
                    Condition::is_null("segment"),
                ]),
                prop("value"),
            ]
        );
    }

    #[test]
    fn filter_may_follow_filter() {
        let expr = PathParser::compile("$.grid[?(@.row == '1')][?(@.col == '2')]").unwrap();
        assert_eq!(expr.segments.len(), 3);
    }

    #[test]
    fn whitespace_inside_filter_is_ignored() {
        let tight = PathParser::compile("$.v[?(@.a=='x'&&@.b==null)]").unwrap();
        let loose = PathParser::compile("$.v[?( @.a  ==  'x'  &&\t@.b == null )]").unwrap();
        assert_eq!(tight, loose);
    }

    #[test]
    fn literals_are_taken_verbatim() {
        let expr = PathParser::compile(r#"$.v[?(@.a == "it's \n")]"#).unwrap();
        assert_eq!(
            expr.segments[1],
            filter(vec![Condition::equals("a", r"it's \n")])
        );
        let expr = PathParser::compile("$.v[?(@.a == '[?(@.b == 1)]')]").unwrap();
        assert_eq!(
            expr.segments[1],
            filter(vec![Condition::equals("a", "[?(@.b == 1)]")])
        );
    }

    #[test]
    fn error_matrix() {
        assert_eq!(PathParser::compile(""), Err(ParseError::Empty));
        assert_eq!(
            PathParser::compile("values"),
            Err(ParseError::MissingRoot(0))
        );
        assert_eq!(
            PathParser::compile("$."),
            Err(ParseError::ExpectedIdentifier(2))
        );
        assert_eq!(
            PathParser::compile("$.values[?()]"),
            Err(ParseError::EmptyFilter(8))
        );
        assert_eq!(
            PathParser::compile("$.values[?(@.alias == 'title"),
            Err(ParseError::UnterminatedString(22))
        );
        assert_eq!(
            PathParser::compile("$.values[?(@.alias == "),
            Err(ParseError::UnbalancedFilter(8))
        );
        assert_eq!(
            PathParser::compile("$.values[?(@.alias == 'title')"),
            Err(ParseError::UnbalancedFilter(8))
        );
        assert_eq!(
            PathParser::compile("$.values[?(alias == 'title')]"),
            Err(ParseError::ExpectedCondition(11))
        );
        assert_eq!(
            PathParser::compile("$.values[?(@.alias != 'title')]"),
            Err(ParseError::ExpectedCondition(19))
        );
        assert_eq!(
            PathParser::compile("$.values[?(@.alias == nullable)]"),
            Err(ParseError::ExpectedCondition(22))
        );
        assert_eq!(
            PathParser::compile("$.values[0]"),
            Err(ParseError::UnexpectedChar {
                ch: '0',
                position: 9
            })
        );
        assert_eq!(
            PathParser::compile("$ .values"),
            Err(ParseError::UnexpectedChar {
                ch: ' ',
                position: 1
            })
        );
    }

    #[test]
    fn or_is_not_part_of_the_grammar() {
        assert!(matches!(
            PathParser::compile("$.v[?(@.a == 'x' || @.a == 'y')]"),
            Err(ParseError::UnexpectedChar { ch: '|', .. })
        ));
    }

    #[test]
    fn is_valid_matrix() {
        assert!(PathParser::is_valid("$.values[?(@.alias == 'title')]"));
        assert!(!PathParser::is_valid("$.values[?(@.alias == "));
        assert!(!PathParser::is_valid(""));
        assert!(PathParser::is_valid("$"));
    }
}
