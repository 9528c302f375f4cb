//! Core registry types: operators, operation records, output rules.

use std::fmt;

/// The logical operators the rule table is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `!=`
    NotEq,
    /// `==`
    Eq,
    /// `and`
    And,
    /// `or`
    Or,
}

impl Operator {
    /// Every supported operator, in display order.
    pub const ALL: [Operator; 4] = [Operator::NotEq, Operator::Eq, Operator::And, Operator::Or];

    /// Source-level spelling of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::NotEq => "!=",
            Operator::Eq => "==",
            Operator::And => "and",
            Operator::Or => "or",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reagent metadata for one operation key.
///
/// The temperature, buffer and recognition details describe the wet-lab
/// step an emitted block names; they carry no semantic weight during
/// compilation and are rendered verbatim on the ENZYME line.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// Lookup key, e.g. `EcoRI`.
    pub key: String,
    /// Reagent class, e.g. `restriction endonuclease`.
    pub reagent: String,
    /// Reaction temperature in degrees Celsius.
    pub temperature: u32,
    /// Reaction buffer.
    pub buffer: String,
    /// Recognition site, for reagents that bind a fixed motif.
    pub site: Option<String>,
    /// Cut pattern within the recognition site, `^` marking the cut.
    pub cut: Option<String>,
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}\u{00b0}C, {}",
            self.key, self.reagent, self.temperature, self.buffer
        )?;
        if let Some(site) = &self.site {
            write!(f, ", site {}", site)?;
        }
        if let Some(cut) = &self.cut {
            write!(f, ", cut {}", cut)?;
        }
        write!(f, ")")
    }
}

/// One entry of the rule table: what an (operator, truth) pair renders to.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRule {
    pub operator: Operator,
    pub truth: bool,
    /// Sequence template rendered on the SEQUENCE line, e.g. `ACG + CAT`.
    pub template: String,
    /// Key of the operation record rendered on the ENZYME line.
    pub operation: String,
    /// Code rendered on the OUTPUT line.
    pub code: String,
}
