//! Statement parsing.
//!
//! Handles the three statement forms of the closed grammar:
//! - Assignment: `name = "literal"`
//! - Bare expression: `a == b`
//! - Conditional: `if <expr>:` with indented blocks and optional `else:`

use super::Parser;
use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::TokenKind;
use crate::symbols::Binding;

impl Parser {
    /// Parse a single statement starting at the given indent column.
    pub(crate) fn parse_stmt(&mut self, indent: usize) -> ParseResult<Stmt> {
        let token = self.peek();
        match &token.kind {
            TokenKind::If => self.parse_if(indent).map(Stmt::If),
            TokenKind::Else => Err(ParseError::new(
                "'else' without matching 'if'",
                token.span,
            )),
            TokenKind::Ident(_) => self.parse_simple_stmt(),
            TokenKind::LParen => self.parse_expr_stmt().map(Stmt::Expr),
            TokenKind::String(_) => Err(ParseError::unsupported_construct(
                token.span,
                "string literal at statement position",
            )),
            TokenKind::Eof => Err(ParseError::unexpected_eof(token.span, "statement")),
            _ => Err(ParseError::unexpected_token(
                token.span,
                "statement",
                token.kind.name(),
            )),
        }
    }

    /// Parse an identifier-led statement: assignment or bare expression.
    fn parse_simple_stmt(&mut self) -> ParseResult<Stmt> {
        if matches!(self.peek_ahead(1).kind, TokenKind::Assign) {
            self.parse_assign().map(Stmt::Assign)
        } else {
            self.parse_expr_stmt().map(Stmt::Expr)
        }
    }

    // ==================== ASSIGNMENT ====================

    fn parse_assign(&mut self) -> ParseResult<AssignStmt> {
        let start = self.peek().span;
        let name = self.expect_ident()?;
        self.expect(&TokenKind::Assign)?;

        let token = self.peek().clone();
        let value = match token.kind {
            TokenKind::String(s) => {
                self.advance();
                s
            }
            TokenKind::Eof => {
                return Err(ParseError::unexpected_eof(token.span, "a quoted literal"));
            }
            _ => {
                return Err(ParseError::unsupported_construct(
                    token.span,
                    format!("assignment of a non-literal value to '{}'", name),
                ));
            }
        };

        let span = self.span_from(start);
        self.expect_stmt_end()?;

        // Record the binding immediately so later statements in the
        // same unit can reference it.
        self.symbols
            .define(Binding::new(name.clone(), value.clone(), span));

        Ok(AssignStmt { name, value, span })
    }

    // ==================== EXPRESSION STATEMENT ====================

    fn parse_expr_stmt(&mut self) -> ParseResult<ExprStmt> {
        let start = self.peek().span;
        let expr = self.parse_expr()?;
        if !expr.is_logical() {
            return Err(ParseError::unsupported_construct(
                expr.span(),
                format!("bare reference '{}' is not a statement", expr),
            ));
        }
        let span = self.span_from(start);
        self.expect_stmt_end()?;
        Ok(ExprStmt { expr, span })
    }

    // ==================== CONDITIONAL ====================

    fn parse_if(&mut self, indent: usize) -> ParseResult<IfStmt> {
        let start = self.expect(&TokenKind::If)?.span;

        let test = self.parse_expr()?;
        if !test.is_logical() {
            return Err(ParseError::unsupported_construct(
                test.span(),
                format!("condition '{}' is not a comparison or boolean chain", test),
            ));
        }
        self.expect(&TokenKind::Colon)?;

        let then_branch = self.parse_block(indent)?;

        self.skip_newlines();
        let else_branch = if self.check(&TokenKind::Else) && self.peek().span.column == indent {
            self.advance();
            self.expect(&TokenKind::Colon)?;
            self.parse_block(indent)?
        } else {
            Vec::new()
        };

        let span = self.span_from(start);
        Ok(IfStmt {
            test,
            then_branch,
            else_branch,
            span,
        })
    }

    /// Parse a conditional body: either a single statement on the same
    /// line, or a newline followed by statements indented past the
    /// parent. The body must contain at least one statement.
    fn parse_block(&mut self, parent_indent: usize) -> ParseResult<Vec<Stmt>> {
        // Single-line form: `if a == b: c = "X"`
        if !self.check(&TokenKind::Newline) && !self.check(&TokenKind::Eof) {
            if self.check(&TokenKind::If) {
                return Err(ParseError::unsupported_construct(
                    self.peek().span,
                    "'if' inside a single-line body",
                ));
            }
            return Ok(vec![self.parse_stmt(parent_indent)?]);
        }

        if self.check(&TokenKind::Eof) {
            return Err(ParseError::unexpected_eof(
                self.peek().span,
                "an indented block",
            ));
        }
        self.advance();
        self.skip_newlines();
        if self.check(&TokenKind::Eof) {
            return Err(ParseError::unexpected_eof(
                self.peek().span,
                "an indented block",
            ));
        }

        let body_indent = self.peek().span.column;
        if body_indent <= parent_indent {
            return Err(ParseError::new(
                "expected an indented block",
                self.peek().span,
            ));
        }

        let mut stmts = vec![self.parse_stmt(body_indent)?];
        loop {
            self.skip_newlines();
            if self.check(&TokenKind::Eof) {
                break;
            }
            let col = self.peek().span.column;
            if col < body_indent {
                // Dedent must land back on an enclosing indent level.
                if col > parent_indent {
                    return Err(ParseError::new(
                        "inconsistent indentation",
                        self.peek().span,
                    ));
                }
                break;
            }
            if col > body_indent {
                return Err(ParseError::new("unexpected indent", self.peek().span));
            }
            stmts.push(self.parse_stmt(body_indent)?);
        }

        Ok(stmts)
    }
}
