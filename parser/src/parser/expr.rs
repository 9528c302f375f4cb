//! Expression parsing.
//!
//! Expressions are comparisons between names, n-ary `and`/`or` chains
//! over them, and parenthesized groups. A chain carries exactly one
//! combinator: mixing `and` with `or` at the same level is rejected as
//! ambiguous rather than resolved by precedence.

use super::Parser;
use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::TokenKind;

impl Parser {
    /// Parse an expression at the combinator level.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        let start = self.peek().span;
        let first = self.parse_operand()?;

        // A single operand is not a chain.
        let op = match &self.peek().kind {
            TokenKind::And => {
                self.advance();
                ChainOp::And
            }
            TokenKind::Or => {
                self.advance();
                ChainOp::Or
            }
            _ => return Ok(first),
        };
        let mut operands = vec![first, self.parse_operand()?];

        loop {
            match &self.peek().kind {
                TokenKind::And if op == ChainOp::And => {
                    self.advance();
                }
                TokenKind::Or if op == ChainOp::Or => {
                    self.advance();
                }
                TokenKind::And | TokenKind::Or => {
                    return Err(ParseError::ambiguous_chain(self.peek().span));
                }
                _ => break,
            }
            operands.push(self.parse_operand()?);
        }

        let span = self.span_from(start);
        Ok(Expr::Chain(ChainExpr { op, operands, span }))
    }

    /// Parse a chain operand: a comparison, a plain reference, or a
    /// parenthesized expression.
    fn parse_operand(&mut self) -> ParseResult<Expr> {
        let start = self.peek().span;
        match &self.peek().kind {
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Ident(_) => self.parse_comparison_or_ref(),
            TokenKind::String(_) => Err(ParseError::unsupported_construct(
                start,
                "string literal in an expression; bind it to a name first",
            )),
            TokenKind::Eof => Err(ParseError::unexpected_eof(start, "expression")),
            _ => {
                let token = self.peek();
                Err(ParseError::unexpected_token(
                    token.span,
                    "expression",
                    token.kind.name(),
                ))
            }
        }
    }

    /// Parse `name`, `name == name`, or `name != name`.
    fn parse_comparison_or_ref(&mut self) -> ParseResult<Expr> {
        let start = self.peek().span;
        let name = self.expect_ident()?;
        let left = Expr::Ref(RefExpr { name, span: start });

        let op = match &self.peek().kind {
            TokenKind::Eq => CompareOp::Eq,
            TokenKind::NotEq => CompareOp::NotEq,
            _ => return Ok(left),
        };
        self.advance();

        let token = self.peek().clone();
        let right = match token.kind {
            TokenKind::Ident(rname) => {
                self.advance();
                Expr::Ref(RefExpr {
                    name: rname,
                    span: token.span,
                })
            }
            TokenKind::String(_) => {
                return Err(ParseError::unsupported_construct(
                    token.span,
                    "literal operand in a comparison; bind it to a name first",
                ));
            }
            TokenKind::Eof => {
                return Err(ParseError::unexpected_eof(token.span, "identifier"));
            }
            _ => {
                return Err(ParseError::unexpected_token(
                    token.span,
                    "identifier",
                    token.kind.name(),
                ));
            }
        };

        if matches!(self.peek().kind, TokenKind::Eq | TokenKind::NotEq) {
            return Err(ParseError::unsupported_construct(
                self.peek().span,
                "chained comparison",
            ));
        }

        let span = self.span_from(start);
        Ok(Expr::Compare(CompareExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }))
    }
}
