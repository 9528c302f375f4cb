//! RegistryBuilder for constructing an immutable Registry.

use crate::registry::Registry;
use crate::types::{OperationRecord, Operator, OutputRule};
use regex_lite::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors raised while building or querying a registry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Duplicate operation record: {0}")]
    DuplicateOperation(String),

    #[error("Duplicate output rule: ({0}, {1})")]
    DuplicateRule(Operator, bool),

    #[error("Rule ({0}, {1}) references unknown operation: {2}")]
    UnknownOperation(Operator, bool, String),

    #[error("Invalid code '{code}' for rule ({operator}, {truth}): codes are non-empty A/C/G/T strings")]
    InvalidCode {
        operator: Operator,
        truth: bool,
        code: String,
    },

    #[error("Code '{code}' for rule ({operator}, {truth}) contains avoided motif {motif}")]
    AvoidedMotif {
        operator: Operator,
        truth: bool,
        code: String,
        motif: String,
    },

    #[error("Invalid template '{template}' for rule ({operator}, {truth}): expected A/C/G/T segments joined by ' + '")]
    InvalidTemplate {
        operator: Operator,
        truth: bool,
        template: String,
    },

    #[error("Missing operation record: {0}")]
    MissingOperation(String),
}

fn code_pattern() -> &'static Regex {
    static PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new("^[ACGT]+$").expect("code pattern compiles"));
    &PATTERN
}

// Homopolymer runs of length four; codes containing one are rejected.
fn motif_pattern() -> &'static Regex {
    static PATTERN: LazyLock<Regex> =
        LazyLock::new(|| Regex::new("AAAA|CCCC|GGGG|TTTT").expect("motif pattern compiles"));
    &PATTERN
}

fn template_pattern() -> &'static Regex {
    static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[ACGT]+( \+ [ACGT]+)*$").expect("template pattern compiles")
    });
    &PATTERN
}

/// Builder for constructing an immutable [`Registry`].
///
/// Operation records must be added before the rules that reference them.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    operations: HashMap<String, OperationRecord>,
    rules: HashMap<(Operator, bool), OutputRule>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation record.
    pub fn add_operation(&mut self, key: impl Into<String>) -> OperationBuilder<'_> {
        OperationBuilder {
            builder: self,
            key: key.into(),
            reagent: String::new(),
            temperature: 0,
            buffer: String::new(),
            site: None,
            cut: None,
        }
    }

    /// Add the output rule for an (operator, truth) pair.
    pub fn add_rule(&mut self, operator: Operator, truth: bool) -> RuleBuilder<'_> {
        RuleBuilder {
            builder: self,
            operator,
            truth,
            template: String::new(),
            operation: String::new(),
            code: String::new(),
        }
    }

    /// Build the immutable registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        Ok(Registry::new(self.operations, self.rules))
    }
}

/// Builder for one operation record.
pub struct OperationBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    key: String,
    reagent: String,
    temperature: u32,
    buffer: String,
    site: Option<String>,
    cut: Option<String>,
}

impl<'a> OperationBuilder<'a> {
    pub fn reagent(mut self, reagent: impl Into<String>) -> Self {
        self.reagent = reagent.into();
        self
    }

    pub fn temperature(mut self, celsius: u32) -> Self {
        self.temperature = celsius;
        self
    }

    pub fn buffer(mut self, buffer: impl Into<String>) -> Self {
        self.buffer = buffer.into();
        self
    }

    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn cut(mut self, cut: impl Into<String>) -> Self {
        self.cut = Some(cut.into());
        self
    }

    /// Finish building this operation record.
    pub fn done(self) -> Result<(), RegistryError> {
        if self.builder.operations.contains_key(&self.key) {
            return Err(RegistryError::DuplicateOperation(self.key));
        }
        let record = OperationRecord {
            key: self.key.clone(),
            reagent: self.reagent,
            temperature: self.temperature,
            buffer: self.buffer,
            site: self.site,
            cut: self.cut,
        };
        self.builder.operations.insert(self.key, record);
        Ok(())
    }
}

/// Builder for one output rule.
pub struct RuleBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    operator: Operator,
    truth: bool,
    template: String,
    operation: String,
    code: String,
}

impl<'a> RuleBuilder<'a> {
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn operation(mut self, key: impl Into<String>) -> Self {
        self.operation = key.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Finish building this rule, validating the entry.
    pub fn done(self) -> Result<(), RegistryError> {
        let slot = (self.operator, self.truth);
        if self.builder.rules.contains_key(&slot) {
            return Err(RegistryError::DuplicateRule(self.operator, self.truth));
        }
        if !self.builder.operations.contains_key(&self.operation) {
            return Err(RegistryError::UnknownOperation(
                self.operator,
                self.truth,
                self.operation,
            ));
        }
        if !code_pattern().is_match(&self.code) {
            return Err(RegistryError::InvalidCode {
                operator: self.operator,
                truth: self.truth,
                code: self.code,
            });
        }
        if let Some(hit) = motif_pattern().find(&self.code) {
            let motif = hit.as_str().to_string();
            return Err(RegistryError::AvoidedMotif {
                operator: self.operator,
                truth: self.truth,
                code: self.code,
                motif,
            });
        }
        if !template_pattern().is_match(&self.template) {
            return Err(RegistryError::InvalidTemplate {
                operator: self.operator,
                truth: self.truth,
                template: self.template,
            });
        }
        let rule = OutputRule {
            operator: self.operator,
            truth: self.truth,
            template: self.template,
            operation: self.operation,
            code: self.code,
        };
        self.builder.rules.insert(slot, rule);
        Ok(())
    }
}
