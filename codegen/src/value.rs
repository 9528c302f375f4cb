//! Values computed while evaluating expressions.
//!
//! The language has exactly two kinds of value: the literal symbol
//! sequences bound by assignments, and the truth values produced by
//! comparisons and boolean chains.

use std::fmt;

/// The result of evaluating one expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A symbol sequence, as bound by an assignment.
    Seq(String),
    /// A truth value, as produced by a comparison or chain.
    Bool(bool),
}

impl Value {
    /// Returns true if this is a sequence value.
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Returns true if this is a truth value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Get the sequence text if this is a Seq value.
    pub fn as_seq(&self) -> Option<&str> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Get the truth value if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Kind name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Seq(_) => "sequence",
            Value::Bool(_) => "truth value",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Seq(s) => write!(f, "\"{}\"", s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_checks() {
        assert!(Value::Seq("ACG".into()).is_seq());
        assert!(Value::Bool(true).is_bool());
        assert!(!Value::Seq("ACG".into()).is_bool());
        assert!(!Value::Bool(false).is_seq());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Seq("ACG".into()).as_seq(), Some("ACG"));
        assert_eq!(Value::Seq("ACG".into()).as_bool(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Bool(true).as_seq(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Seq("ACG".into()).to_string(), "\"ACG\"");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Bool(true).type_name(), "truth value");
        assert_eq!(Value::Seq(String::new()).type_name(), "sequence");
    }
}
