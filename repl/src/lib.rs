//! Operon REPL library - interactive front end for the molecular compiler.
//!
//! This crate wraps the parser and generator in batch and interactive
//! entry points. It is split into modules:
//!
//! - `repl`: Session state, file and interactive execution
//! - `format`: Output formatting utilities

mod format;
mod repl;

pub use format::{format_registry, format_symbols, print_help};
pub use repl::Repl;
