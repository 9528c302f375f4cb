//! Output blocks and the rendered molecular program.

use operon_registry::{OperationRecord, Operator};
use std::fmt;

/// The resolution of one logical operation: everything needed to
/// render its three output lines.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputBlock {
    /// Operator the block resolved.
    pub operator: Operator,
    /// Truth value the operation evaluated to.
    pub truth: bool,
    /// Sequence template from the matched rule.
    pub template: String,
    /// Operation record named by the matched rule.
    pub enzyme: OperationRecord,
    /// Output code from the matched rule.
    pub code: String,
}

impl fmt::Display for OutputBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SEQUENCE: {}", self.template)?;
        writeln!(f, "ENZYME: {}", self.enzyme)?;
        write!(f, "OUTPUT: {}", self.code)
    }
}

/// A compiled program: output blocks in traversal order.
///
/// Blocks are never reordered or deduplicated; two identical operations
/// in the source produce two identical blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MolecularProgram {
    pub blocks: Vec<OutputBlock>,
}

impl MolecularProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render the whole program, blocks separated by a blank line.
    pub fn render(&self) -> String {
        self.blocks
            .iter()
            .map(|block| block.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl fmt::Display for MolecularProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
