//! Operon Parser
//!
//! This crate turns molecular program source into an AST:
//! - Line-oriented statement parsing (assignments, bare expressions, conditionals)
//! - Expression parsing (comparisons, boolean chains, parenthesized grouping)
//! - Symbol table population as assignments are encountered
//! - Error reporting with location information
//!
//! The grammar is deliberately closed: anything outside it is rejected
//! at parse time rather than carried forward.

mod ast;
mod error;
mod lexer;
mod parser;
mod symbols;

pub use ast::*;
pub use error::*;
pub use parser::{parse, parse_with, Parser, Program};
pub use symbols::{Binding, SymbolTable};
