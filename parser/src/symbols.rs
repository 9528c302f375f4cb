//! Symbol table for literal bindings.

use crate::Span;
use std::collections::HashMap;

/// A binding of a name to a quoted literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound name.
    pub name: String,
    /// The literal symbol sequence.
    pub value: String,
    /// Span of the assignment that (last) defined this binding.
    pub span: Span,
}

impl Binding {
    pub fn new(name: impl Into<String>, value: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            span,
        }
    }
}

/// Flat map of bindings for one compilation unit.
///
/// The grammar has no block scope: conditionals do not open a frame,
/// and a later assignment to the same name shadows the earlier one.
/// Each compilation owns its own table; nothing is shared across
/// compilations.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    bindings: HashMap<String, Binding>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a binding, shadowing any previous one of the same name.
    pub fn define(&mut self, binding: Binding) {
        self.bindings.insert(binding.name.clone(), binding);
    }

    /// Look up a binding by name.
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Look up just the literal value of a binding.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|b| b.value.as_str())
    }

    /// Check whether a name is bound.
    pub fn is_defined(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings in name order.
    pub fn sorted(&self) -> Vec<&Binding> {
        let mut all: Vec<&Binding> = self.bindings.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}
