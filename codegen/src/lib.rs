//! Operon Codegen
//!
//! Transform parsed source into a rendered molecular program.
//!
//! Responsibilities:
//! - Evaluate references, comparisons and chains against the symbol table
//! - Resolve every (operator, truth) result through the registry
//! - Collect output blocks in traversal order
//! - Render blocks as SEQUENCE/ENZYME/OUTPUT text

mod error;
mod generator;
mod output;
mod value;

pub use error::{CompileError, CompileResult};
pub use generator::{compile, compile_to_program, compile_with, generate, Generator};
pub use output::{MolecularProgram, OutputBlock};
pub use value::Value;
