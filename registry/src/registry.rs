//! The Registry - immutable lookup of operation records and output rules.

use crate::builder::RegistryBuilder;
use crate::types::{OperationRecord, Operator, OutputRule};
use std::collections::HashMap;

/// Immutable lookup table mapping (operator, truth) pairs to output
/// rules and operation keys to reagent records.
///
/// Built once through [`RegistryBuilder`]; nothing can be added or
/// removed afterwards, so lookups during compilation never change
/// between statements.
#[derive(Debug)]
pub struct Registry {
    operations: HashMap<String, OperationRecord>,
    rules: HashMap<(Operator, bool), OutputRule>,
}

impl Registry {
    pub(crate) fn new(
        operations: HashMap<String, OperationRecord>,
        rules: HashMap<(Operator, bool), OutputRule>,
    ) -> Self {
        Self { operations, rules }
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    // ==================== Operation Lookups ====================

    /// Get an operation record by key.
    pub fn operation(&self, key: &str) -> Option<&OperationRecord> {
        self.operations.get(key)
    }

    /// All operation records, in key order.
    pub fn operations(&self) -> Vec<&OperationRecord> {
        let mut all: Vec<&OperationRecord> = self.operations.values().collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        all
    }

    /// Number of operation records.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    // ==================== Rule Lookups ====================

    /// Get the output rule for an (operator, truth) pair.
    pub fn rule(&self, operator: Operator, truth: bool) -> Option<&OutputRule> {
        self.rules.get(&(operator, truth))
    }

    /// All output rules, in operator order with `true` before `false`.
    pub fn rules(&self) -> Vec<&OutputRule> {
        let mut all: Vec<&OutputRule> = self.rules.values().collect();
        all.sort_by_key(|rule| (operator_index(rule.operator), !rule.truth));
        all
    }

    /// Number of output rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

fn operator_index(operator: Operator) -> usize {
    Operator::ALL
        .iter()
        .position(|&op| op == operator)
        .unwrap_or(Operator::ALL.len())
}
