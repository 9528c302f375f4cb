//! Code generation error types.

use operon_parser::Span;
use operon_registry::Operator;
use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Parse error from the parser.
    #[error("{0}")]
    Parse(#[from] operon_parser::ParseError),

    /// Reference to a name no assignment has bound.
    #[error("Undefined binding '{name}' at line {line}, column {column}")]
    UndefinedBinding {
        name: String,
        line: usize,
        column: usize,
    },

    /// Operand of the wrong kind for its position.
    #[error("Type error at line {line}, column {column}: expected {expected}, found {found}")]
    Type {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },

    /// No registry rule for an (operator, truth) pair.
    #[error("Unsupported operator: no rule for ({operator}, {truth}) at line {line}, column {column}")]
    UnsupportedOperator {
        operator: Operator,
        truth: bool,
        line: usize,
        column: usize,
    },

    /// Registry consistency failure.
    #[error("Registry error: {0}")]
    Registry(#[from] operon_registry::RegistryError),
}

impl CompileError {
    pub fn undefined_binding(name: impl Into<String>, span: Span) -> Self {
        Self::UndefinedBinding {
            name: name.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn type_error(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        Self::Type {
            expected: expected.into(),
            found: found.into(),
            line: span.line,
            column: span.column,
        }
    }

    pub fn unsupported_operator(operator: Operator, truth: bool, span: Span) -> Self {
        Self::UnsupportedOperator {
            operator,
            truth,
            line: span.line,
            column: span.column,
        }
    }
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
