use thiserror::Error;

/// A path string that does not follow the grammar.
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("path is empty")]
    Empty,
    #[error("path must start with '$' (position {0})")]
    MissingRoot(usize),
    #[error("expected identifier at position {0}")]
    ExpectedIdentifier(usize),
    #[error("expected condition of the form '@.field == literal' at position {0}")]
    ExpectedCondition(usize),
    #[error("filter at position {0} has no conditions")]
    EmptyFilter(usize),
    #[error("unterminated string literal starting at position {0}")]
    UnterminatedString(usize),
    #[error("unbalanced filter delimiters at position {0}")]
    UnbalancedFilter(usize),
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("literal cannot be written with either quote style: {0:?}")]
    UnrepresentableLiteral(String),
}

impl ParseError {
    /// Byte offset of the failure, when it refers to a place in the source.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Empty | ParseError::UnrepresentableLiteral(_) => None,
            ParseError::MissingRoot(pos)
            | ParseError::ExpectedIdentifier(pos)
            | ParseError::ExpectedCondition(pos)
            | ParseError::EmptyFilter(pos)
            | ParseError::UnterminatedString(pos)
            | ParseError::UnbalancedFilter(pos) => Some(*pos),
            ParseError::UnexpectedChar { position, .. } => Some(*position),
        }
    }
}
