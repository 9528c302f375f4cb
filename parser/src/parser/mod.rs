//! Parser for molecular program source text.
//!
//! This module is organized into submodules by parsing category:
//! - `expr`: Expression parsing (comparisons, boolean chains, grouping)
//! - `stmt`: Statement parsing (assignments, bare expressions, conditionals)
//!
//! Statements are line-oriented; conditional bodies are delimited by
//! indentation, read from the column of each line's first token.

mod expr;
mod stmt;

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::symbols::SymbolTable;

/// A parsed compilation unit: the statement list plus the symbol table
/// populated from its assignments.
#[derive(Debug, Clone)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub symbols: SymbolTable,
}

// ==================== PARSER STATE ====================

/// Parser state.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    symbols: SymbolTable,
}

impl Parser {
    /// Create a new parser from source text.
    pub fn new(input: &str) -> ParseResult<Self> {
        Self::with_symbols(input, SymbolTable::new())
    }

    /// Create a parser with a pre-seeded symbol table.
    pub fn with_symbols(input: &str, symbols: SymbolTable) -> ParseResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            symbols,
        })
    }

    /// Consume the parser, yielding its symbol table.
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }
}

// ==================== TOKEN HELPERS ====================

impl Parser {
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("tokens should always end with EOF")
        })
    }

    pub(crate) fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("tokens should always end with EOF")
        })
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            if matches!(token.kind, TokenKind::Eof) {
                Err(ParseError::unexpected_eof(token.span, kind.name()))
            } else {
                Err(ParseError::unexpected_token(
                    token.span,
                    kind.name(),
                    token.kind.name(),
                ))
            }
        }
    }

    pub(crate) fn expect_ident(&mut self) -> ParseResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            TokenKind::Eof => Err(ParseError::unexpected_eof(self.peek().span, "identifier")),
            _ => {
                let token = self.peek();
                Err(ParseError::unexpected_token(
                    token.span,
                    "identifier",
                    token.kind.name(),
                ))
            }
        }
    }

    /// Skip over any run of newline tokens.
    pub(crate) fn skip_newlines(&mut self) {
        while self.check(&TokenKind::Newline) {
            self.advance();
        }
    }

    /// A statement ends at a newline (consumed) or at end of input.
    pub(crate) fn expect_stmt_end(&mut self) -> ParseResult<()> {
        match &self.peek().kind {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => {
                let token = self.peek();
                Err(ParseError::unexpected_token(
                    token.span,
                    "newline",
                    token.kind.name(),
                ))
            }
        }
    }

    pub(crate) fn span_from(&self, start: Span) -> Span {
        let end_token = if self.pos > 0 {
            &self.tokens[self.pos - 1]
        } else {
            self.peek()
        };
        Span::new(start.start, end_token.span.end, start.line, start.column)
    }

    /// Parse all statements in the unit.
    pub(crate) fn parse_program(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut stmts = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(&TokenKind::Eof) {
                break;
            }
            if self.peek().span.column != 1 {
                return Err(ParseError::new("unexpected indent", self.peek().span));
            }
            stmts.push(self.parse_stmt(1)?);
        }
        Ok(stmts)
    }
}

// ==================== PUBLIC API ====================

/// Parse a complete compilation unit.
pub fn parse(input: &str) -> ParseResult<Program> {
    parse_with(input, SymbolTable::new())
}

/// Parse a compilation unit against a pre-seeded symbol table.
///
/// Interactive sessions thread their accumulated bindings through this
/// so each new input can reference names defined earlier. The input
/// table is consumed; on error it is dropped, leaving the caller's own
/// copy untouched.
pub fn parse_with(input: &str, symbols: SymbolTable) -> ParseResult<Program> {
    let mut parser = Parser::with_symbols(input, symbols)?;
    let stmts = parser.parse_program()?;
    Ok(Program {
        stmts,
        symbols: parser.into_symbols(),
    })
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn parse_one(input: &str) -> Stmt {
        let mut program = parse(input).unwrap();
        assert_eq!(program.stmts.len(), 1, "expected exactly one statement");
        program.stmts.remove(0)
    }

    fn parse_err(input: &str) -> ParseError {
        parse(input).unwrap_err()
    }

    // ==================== ASSIGNMENT TESTS ====================

    #[test]
    fn test_parse_assignment() {
        let program = parse(r#"a = "ACG""#).unwrap();

        match &program.stmts[0] {
            Stmt::Assign(a) => {
                assert_eq!(a.name, "a");
                assert_eq!(a.value, "ACG");
            }
            other => panic!("expected assignment, got {:?}", other),
        }
        assert_eq!(program.symbols.value("a"), Some("ACG"));
    }

    #[test]
    fn test_assignment_records_binding_immediately() {
        // The comparison on line 3 references names bound above it.
        let src = "a = \"ACG\"\nb = \"CAT\"\na != b";
        let program = parse(src).unwrap();

        assert_eq!(program.stmts.len(), 3);
        assert_eq!(program.symbols.len(), 2);
    }

    #[test]
    fn test_assignment_shadowing() {
        let program = parse("a = \"ACG\"\na = \"TGC\"").unwrap();

        assert_eq!(program.stmts.len(), 2);
        assert_eq!(program.symbols.value("a"), Some("TGC"));
    }

    #[test]
    fn test_assignment_requires_literal() {
        let err = parse_err("a = b");
        assert_eq!(err.kind, ParseErrorKind::UnsupportedConstruct);
        assert!(err.message.contains("non-literal"));
    }

    #[test]
    fn test_assignment_missing_value_is_incomplete() {
        let err = parse_err("a =");
        assert!(err.is_incomplete());
    }

    // ==================== EXPRESSION TESTS ====================

    #[test]
    fn test_parse_bare_comparison() {
        let stmt = parse_one("left == right");

        let Stmt::Expr(es) = stmt else {
            panic!("expected expression statement");
        };
        match es.expr {
            Expr::Compare(c) => {
                assert_eq!(c.op, CompareOp::Eq);
                match *c.left {
                    Expr::Ref(ref r) => assert_eq!(r.name, "left"),
                    ref other => panic!("expected reference, got {:?}", other),
                }
                match *c.right {
                    Expr::Ref(ref r) => assert_eq!(r.name, "right"),
                    ref other => panic!("expected reference, got {:?}", other),
                }
            }
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_not_eq() {
        let stmt = parse_one("a != b");
        let Stmt::Expr(es) = stmt else {
            panic!("expected expression statement");
        };
        match es.expr {
            Expr::Compare(c) => assert_eq!(c.op, CompareOp::NotEq),
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_and_chain() {
        let stmt = parse_one("a == b and c == d");
        let Stmt::Expr(es) = stmt else {
            panic!("expected expression statement");
        };
        match es.expr {
            Expr::Chain(ch) => {
                assert_eq!(ch.op, ChainOp::And);
                assert_eq!(ch.operands.len(), 2);
                assert!(matches!(ch.operands[0], Expr::Compare(_)));
                assert!(matches!(ch.operands[1], Expr::Compare(_)));
            }
            other => panic!("expected chain, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_nary_chain() {
        // Same combinator chains flat, not nested.
        let stmt = parse_one("a == b or c == d or e == f");
        let Stmt::Expr(es) = stmt else {
            panic!("expected expression statement");
        };
        match es.expr {
            Expr::Chain(ch) => {
                assert_eq!(ch.op, ChainOp::Or);
                assert_eq!(ch.operands.len(), 3);
            }
            other => panic!("expected chain, got {:?}", other),
        }
    }

    #[test]
    fn test_chain_of_plain_references_parses() {
        // Grammatical: operand typing is the generator's concern.
        let stmt = parse_one("x and y");
        let Stmt::Expr(es) = stmt else {
            panic!("expected expression statement");
        };
        match es.expr {
            Expr::Chain(ch) => {
                assert!(matches!(ch.operands[0], Expr::Ref(_)));
                assert!(matches!(ch.operands[1], Expr::Ref(_)));
            }
            other => panic!("expected chain, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_chain_rejected() {
        let err = parse_err("x and y or z");
        assert_eq!(err.kind, ParseErrorKind::AmbiguousExpression);
    }

    #[test]
    fn test_mixed_chain_with_parens_allowed() {
        let stmt = parse_one("x and (y or z)");
        let Stmt::Expr(es) = stmt else {
            panic!("expected expression statement");
        };
        match es.expr {
            Expr::Chain(ch) => {
                assert_eq!(ch.op, ChainOp::And);
                assert_eq!(ch.operands.len(), 2);
                match &ch.operands[1] {
                    Expr::Chain(inner) => assert_eq!(inner.op, ChainOp::Or),
                    other => panic!("expected inner chain, got {:?}", other),
                }
            }
            other => panic!("expected chain, got {:?}", other),
        }
    }

    #[test]
    fn test_parenthesized_comparisons() {
        let stmt = parse_one("(a == b) and (c != d)");
        let Stmt::Expr(es) = stmt else {
            panic!("expected expression statement");
        };
        assert!(matches!(es.expr, Expr::Chain(_)));
    }

    #[test]
    fn test_chained_comparison_rejected() {
        let err = parse_err("a == b == c");
        assert_eq!(err.kind, ParseErrorKind::UnsupportedConstruct);
        assert!(err.message.contains("chained comparison"));
    }

    #[test]
    fn test_literal_comparison_operand_rejected() {
        let err = parse_err("a == \"ACG\"");
        assert_eq!(err.kind, ParseErrorKind::UnsupportedConstruct);
    }

    #[test]
    fn test_bare_reference_rejected() {
        let err = parse_err("a = \"ACG\"\na");
        assert_eq!(err.kind, ParseErrorKind::UnsupportedConstruct);
        assert!(err.message.contains("bare reference"));
    }

    // ==================== CONDITIONAL TESTS ====================

    #[test]
    fn test_parse_if_block() {
        let src = "a = \"ACG\"\nb = \"CAT\"\nif a != b:\n    c = \"X\"";
        let program = parse(src).unwrap();

        assert_eq!(program.stmts.len(), 3);
        let Stmt::If(ref ifs) = program.stmts[2] else {
            panic!("expected conditional");
        };
        assert!(matches!(ifs.test, Expr::Compare(_)));
        assert_eq!(ifs.then_branch.len(), 1);
        assert!(ifs.else_branch.is_empty());
        // The body assignment was still recorded at parse time.
        assert_eq!(program.symbols.value("c"), Some("X"));
    }

    #[test]
    fn test_parse_if_else() {
        let src = "a = \"ACG\"\nif a == a:\n    x = \"1\"\nelse:\n    y = \"2\"";
        let program = parse(src).unwrap();

        let Stmt::If(ref ifs) = program.stmts[1] else {
            panic!("expected conditional");
        };
        assert_eq!(ifs.then_branch.len(), 1);
        assert_eq!(ifs.else_branch.len(), 1);
    }

    #[test]
    fn test_parse_if_inline() {
        let src = "a = \"ACG\"\nif a == a: b = \"CAT\"";
        let program = parse(src).unwrap();

        let Stmt::If(ref ifs) = program.stmts[1] else {
            panic!("expected conditional");
        };
        assert_eq!(ifs.then_branch.len(), 1);
        assert!(ifs.else_branch.is_empty());
    }

    #[test]
    fn test_parse_multi_statement_body() {
        let src = "a = \"ACG\"\nif a == a:\n  b = \"1\"\n  c = \"2\"\n  a == b";
        let program = parse(src).unwrap();

        let Stmt::If(ref ifs) = program.stmts[1] else {
            panic!("expected conditional");
        };
        assert_eq!(ifs.then_branch.len(), 3);
    }

    #[test]
    fn test_parse_nested_if() {
        let src = "\
a = \"ACG\"
if a == a:
  if a != a:
    b = \"1\"
  else:
    c = \"2\"
";
        let program = parse(src).unwrap();

        let Stmt::If(ref outer) = program.stmts[1] else {
            panic!("expected conditional");
        };
        assert_eq!(outer.then_branch.len(), 1);
        assert!(outer.else_branch.is_empty());
        let Stmt::If(ref inner) = outer.then_branch[0] else {
            panic!("expected nested conditional");
        };
        // The aligned else belongs to the inner conditional.
        assert_eq!(inner.then_branch.len(), 1);
        assert_eq!(inner.else_branch.len(), 1);
    }

    #[test]
    fn test_else_aligned_with_outer_if() {
        let src = "\
a = \"ACG\"
if a == a:
  if a != a:
    b = \"1\"
else:
  c = \"2\"
";
        let program = parse(src).unwrap();

        let Stmt::If(ref outer) = program.stmts[1] else {
            panic!("expected conditional");
        };
        assert_eq!(outer.else_branch.len(), 1);
        let Stmt::If(ref inner) = outer.then_branch[0] else {
            panic!("expected nested conditional");
        };
        assert!(inner.else_branch.is_empty());
    }

    #[test]
    fn test_if_without_body_is_incomplete() {
        let err = parse_err("a = \"ACG\"\nif a == a:");
        assert!(err.is_incomplete());
    }

    #[test]
    fn test_if_body_must_be_indented() {
        let err = parse_err("a = \"ACG\"\nif a == a:\nb = \"1\"");
        assert!(err.message.contains("expected an indented block"));
    }

    #[test]
    fn test_if_condition_must_be_logical() {
        let err = parse_err("a = \"ACG\"\nif a:\n  b = \"1\"");
        assert_eq!(err.kind, ParseErrorKind::UnsupportedConstruct);
        assert!(err.message.contains("condition"));
    }

    #[test]
    fn test_orphan_else_rejected() {
        let err = parse_err("else:\n  a = \"1\"");
        assert!(err.message.contains("'else' without matching 'if'"));
    }

    #[test]
    fn test_inconsistent_dedent_rejected() {
        let src = "if a == a:\n    b = \"1\"\n  c = \"2\"";
        let err = parse_err(src);
        assert!(err.message.contains("inconsistent indentation"));
    }

    #[test]
    fn test_inline_if_body_may_not_nest() {
        let err = parse_err("a = \"ACG\"\nif a == a: if a == a: b = \"1\"");
        assert_eq!(err.kind, ParseErrorKind::UnsupportedConstruct);
    }

    // ==================== PROGRAM TESTS ====================

    #[test]
    fn test_empty_program() {
        let program = parse("").unwrap();
        assert!(program.stmts.is_empty());
        assert!(program.symbols.is_empty());
    }

    #[test]
    fn test_blank_lines_and_comments() {
        let src = "# header\n\na = \"ACG\"\n\n# middle\nb = \"CAT\"\n\na != b  # trailing\n";
        let program = parse(src).unwrap();
        assert_eq!(program.stmts.len(), 3);
    }

    #[test]
    fn test_top_level_indent_rejected() {
        let err = parse_err("  a = \"ACG\"");
        assert!(err.message.contains("unexpected indent"));
    }

    #[test]
    fn test_parse_with_seeded_symbols() {
        let first = parse("a = \"ACG\"").unwrap();
        let second = parse_with("b = \"CAT\"", first.symbols).unwrap();
        assert_eq!(second.symbols.value("a"), Some("ACG"));
        assert_eq!(second.symbols.value("b"), Some("CAT"));
    }

    #[test]
    fn test_statement_spans() {
        let program = parse("a = \"ACG\"\nb = \"CAT\"").unwrap();
        assert_eq!(program.stmts[0].span().line, 1);
        assert_eq!(program.stmts[1].span().line, 2);
        assert_eq!(program.stmts[1].span().column, 1);
    }
}
