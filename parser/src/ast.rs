//! Abstract Syntax Tree types for the molecular expression language.

use std::fmt;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// A statement in a source program.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    Expr(ExprStmt),
    If(IfStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Assign(s) => s.span,
            Stmt::Expr(s) => s.span,
            Stmt::If(s) => s.span,
        }
    }
}

// ==================== ASSIGNMENT ====================

/// Binding of a name to a quoted symbol literal: `a = "ACG"`.
///
/// Assignments populate the symbol table as they are parsed and emit
/// no output of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: String,
    pub value: String,
    pub span: Span,
}

// ==================== EXPRESSION STATEMENT ====================

/// A bare logical expression at statement position: `a == b`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

// ==================== CONDITIONAL ====================

/// `if test:` with an indented then block and optional `else:` block.
///
/// The test must be a comparison or a boolean chain. Blocks introduce
/// no binding scope; assignments inside either branch land in the same
/// compilation-unit symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub test: Expr,
    pub then_branch: Vec<Stmt>,
    pub else_branch: Vec<Stmt>,
    pub span: Span,
}

// ==================== EXPRESSIONS ====================

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a bound name.
    Ref(RefExpr),
    /// Equality or inequality comparison.
    Compare(CompareExpr),
    /// Boolean combinator chain (single operator, n-ary).
    Chain(ChainExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Ref(e) => e.span,
            Expr::Compare(e) => e.span,
            Expr::Chain(e) => e.span,
        }
    }

    /// Whether this expression resolves to a truth value.
    pub fn is_logical(&self) -> bool {
        matches!(self, Expr::Compare(_) | Expr::Chain(_))
    }
}

/// Reference to a bound name; resolves through the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct RefExpr {
    pub name: String,
    pub span: Span,
}

/// Comparison between two references: `a == b`, `a != b`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareExpr {
    pub op: CompareOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::NotEq => write!(f, "!="),
        }
    }
}

/// Boolean combinator chain: `x and y and z`.
///
/// A chain carries exactly one operator; mixing `and`/`or` without
/// parentheses is rejected at parse time. `operands` always holds at
/// least two entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainExpr {
    pub op: ChainOp,
    pub operands: Vec<Expr>,
    pub span: Span,
}

/// Boolean combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainOp {
    And,
    Or,
}

impl fmt::Display for ChainOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainOp::And => write!(f, "and"),
            ChainOp::Or => write!(f, "or"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ref(e) => write!(f, "{}", e.name),
            Expr::Compare(e) => write!(f, "{} {} {}", e.left, e.op, e.right),
            Expr::Chain(e) => {
                for (i, operand) in e.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", e.op)?;
                    }
                    if matches!(operand, Expr::Chain(_)) {
                        write!(f, "({})", operand)?;
                    } else {
                        write!(f, "{}", operand)?;
                    }
                }
                Ok(())
            }
        }
    }
}
