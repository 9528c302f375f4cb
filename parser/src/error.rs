//! Parser error types.

use crate::Span;
use std::fmt;

/// Classification of parse failures.
///
/// `UnsupportedConstruct` and `AmbiguousExpression` identify source
/// programs that lex cleanly but fall outside the closed grammar;
/// `Syntax` covers malformed token streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Syntax,
    UnsupportedConstruct,
    AmbiguousExpression,
}

/// A parse error with location information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub kind: ParseErrorKind,
    pub expected: Option<Vec<String>>,
    pub found: Option<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ParseErrorKind::Syntax,
            expected: None,
            found: None,
        }
    }

    pub fn unexpected_eof(span: Span, expected: &str) -> Self {
        Self {
            message: format!("unexpected end of input, expected {}", expected),
            span,
            kind: ParseErrorKind::Syntax,
            expected: Some(vec![expected.to_string()]),
            found: Some("end of input".to_string()),
        }
    }

    pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Self {
        Self {
            message: format!("expected {}, found {}", expected, found),
            span,
            kind: ParseErrorKind::Syntax,
            expected: Some(vec![expected.to_string()]),
            found: Some(found.to_string()),
        }
    }

    /// A construct that lexes but is outside the closed grammar.
    pub fn unsupported_construct(span: Span, construct: impl Into<String>) -> Self {
        Self {
            message: format!("unsupported construct: {}", construct.into()),
            span,
            kind: ParseErrorKind::UnsupportedConstruct,
            expected: None,
            found: None,
        }
    }

    /// A boolean chain mixing `and`/`or` without parentheses.
    pub fn ambiguous_chain(span: Span) -> Self {
        Self {
            message: "ambiguous expression: 'and' and 'or' mixed without parentheses".to_string(),
            span,
            kind: ParseErrorKind::AmbiguousExpression,
            expected: None,
            found: None,
        }
    }

    /// Whether the input ended before the construct was complete.
    ///
    /// Interactive callers use this to prompt for continuation lines
    /// instead of reporting the error.
    pub fn is_incomplete(&self) -> bool {
        self.found.as_deref() == Some("end of input")
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
