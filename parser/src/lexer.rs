//! Lexer (tokenizer) for molecular program source text.

use crate::{ParseError, ParseResult, Span};

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords (case-sensitive)
    If,
    Else,
    And,
    Or,

    // Literals
    Ident(String),
    String(String),

    // Symbols
    Assign, // =
    Eq,     // ==
    NotEq,  // !=
    LParen, // (
    RParen, // )
    Colon,  // :

    // Statement separator
    Newline,

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Ident(_) => "identifier",
            TokenKind::String(_) => "string",
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of input",
        }
    }

    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If | TokenKind::Else | TokenKind::And | TokenKind::Or
        )
    }
}

/// A token with its span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, line, column),
        }
    }
}

/// Lexer state.
///
/// Newlines are significant (they separate statements) and are emitted
/// as tokens; the column in each token's span carries the indentation
/// information the parser uses to delimit conditional blocks.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize all input into a vector of tokens.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    /// Skip horizontal whitespace. Newlines are tokens, not whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == ' ' || c == '\t' || c == '\r' {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Ok(Token::eof(self.pos, self.line, self.column));
        };

        let kind = match c {
            '\n' => TokenKind::Newline,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ':' => TokenKind::Colon,
            '=' => {
                if self.peek_char() == Some('=') {
                    self.next_char();
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.next_char();
                    TokenKind::NotEq
                } else {
                    return Err(ParseError::new(
                        "unexpected character '!'",
                        self.span_from(start, start_line, start_col),
                    ));
                }
            }
            '#' => {
                // Comment: skip to end of line, leaving the newline for
                // the next token.
                while let Some(c) = self.peek_char() {
                    if c == '\n' {
                        break;
                    }
                    self.next_char();
                }
                return self.next_token();
            }
            '"' => self.scan_string(start, start_line, start_col)?,
            '_' | 'a'..='z' | 'A'..='Z' => self.scan_ident_or_keyword(c),
            _ => {
                return Err(ParseError::new(
                    format!("unexpected character '{}'", c),
                    self.span_from(start, start_line, start_col),
                ));
            }
        };

        Ok(Token::new(
            kind,
            self.span_from(start, start_line, start_col),
        ))
    }

    fn scan_string(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        let mut value = String::new();

        loop {
            match self.next_char() {
                None => {
                    return Err(ParseError::new(
                        "unterminated string literal",
                        self.span_from(start, start_line, start_col),
                    ));
                }
                Some('"') => break,
                Some('\n') => {
                    return Err(ParseError::new(
                        "unterminated string literal",
                        self.span_from(start, start_line, start_col),
                    ));
                }
                Some(c) => value.push(c),
            }
        }

        Ok(TokenKind::String(value))
    }

    fn scan_ident_or_keyword(&mut self, first: char) -> TokenKind {
        let mut ident = String::new();
        ident.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '_' {
                ident.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            _ => TokenKind::Ident(ident),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_keywords() {
        let kinds = tokenize("if else and or");
        assert_eq!(
            kinds,
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_keywords_case_sensitive() {
        // Capitalized forms are plain identifiers.
        let kinds = tokenize("If AND Or");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("If".into()),
                TokenKind::Ident("AND".into()),
                TokenKind::Ident("Or".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        let kinds = tokenize("foo Bar _baz seq_2");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("foo".into()),
                TokenKind::Ident("Bar".into()),
                TokenKind::Ident("_baz".into()),
                TokenKind::Ident("seq_2".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_strings() {
        let kinds = tokenize(r#""ACG" "CAT""#);
        assert_eq!(
            kinds,
            vec![
                TokenKind::String("ACG".into()),
                TokenKind::String("CAT".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_symbols() {
        let kinds = tokenize("( ) : = == !=");
        assert_eq!(
            kinds,
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Colon,
                TokenKind::Assign,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_assignment_tokens() {
        let kinds = tokenize(r#"a = "ACG""#);
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Assign,
                TokenKind::String("ACG".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_newlines_are_tokens() {
        let kinds = tokenize("a\nb\n");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Newline,
                TokenKind::Ident("b".into()),
                TokenKind::Newline,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_comments() {
        let kinds = tokenize("a # trailing comment\nb");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Newline,
                TokenKind::Ident("b".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = Lexer::new("a != b\n  c").tokenize().unwrap();
        assert_eq!(tokens[0].span.line, 1);
        assert_eq!(tokens[0].span.column, 1);
        // `!=` starts at column 3
        assert_eq!(tokens[1].span.column, 3);
        // `c` is indented two columns on line 2
        assert_eq!(tokens[4].span.line, 2);
        assert_eq!(tokens[4].span.column, 3);
    }

    #[test]
    fn test_if_line_tokens() {
        let kinds = tokenize("if a != b:");
        assert_eq!(
            kinds,
            vec![
                TokenKind::If,
                TokenKind::Ident("a".into()),
                TokenKind::NotEq,
                TokenKind::Ident("b".into()),
                TokenKind::Colon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new("a = \"ACG").tokenize().unwrap_err();
        assert!(err.message.contains("unterminated string"));
    }

    #[test]
    fn test_string_may_not_span_lines() {
        let err = Lexer::new("a = \"AC\nG\"").tokenize().unwrap_err();
        assert!(err.message.contains("unterminated string"));
    }

    #[test]
    fn test_bare_bang_rejected() {
        let err = Lexer::new("a ! b").tokenize().unwrap_err();
        assert!(err.message.contains("'!'"));
    }

    #[test]
    fn test_numbers_rejected() {
        // The grammar has no numeric literals.
        let err = Lexer::new("a = 42").tokenize().unwrap_err();
        assert!(err.message.contains("unexpected character '4'"));
    }
}
