//! The built-in operation table.
//!
//! Every compilation resolves against this table unless a caller
//! supplies its own registry. It covers all four operators at both
//! truth values, so resolution is total over the supported language.

use crate::builder::{RegistryBuilder, RegistryError};
use crate::registry::Registry;
use crate::types::Operator;
use std::sync::LazyLock;

/// Construct a fresh registry holding the built-in table.
///
/// Callers that need an owned instance (or want to extend the table
/// before building) start here; [`builtin`] serves the shared one.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();

    builder
        .add_operation("EcoRI")
        .reagent("restriction endonuclease")
        .temperature(37)
        .buffer("CutSmart")
        .site("GAATTC")
        .cut("G^AATTC")
        .done()?;
    builder
        .add_operation("DNA_ligase")
        .reagent("T4 DNA ligase")
        .temperature(25)
        .buffer("T4")
        .done()?;
    builder
        .add_operation("Polymerase")
        .reagent("Taq polymerase")
        .temperature(72)
        .buffer("Taq")
        .done()?;

    // The eight codes are pairwise distinct, so a rendered OUTPUT line
    // identifies exactly one (operator, truth) slot.
    builder
        .add_rule(Operator::NotEq, true)
        .template("ACG + CAT")
        .operation("EcoRI")
        .code("CTAA")
        .done()?;
    builder
        .add_rule(Operator::NotEq, false)
        .template("ACG + CAT")
        .operation("EcoRI")
        .code("TAGG")
        .done()?;
    builder
        .add_rule(Operator::Eq, true)
        .template("ACG + TGC")
        .operation("DNA_ligase")
        .code("GATT")
        .done()?;
    builder
        .add_rule(Operator::Eq, false)
        .template("ACG + TGC")
        .operation("DNA_ligase")
        .code("ATCC")
        .done()?;
    builder
        .add_rule(Operator::And, true)
        .template("ACG + GCA")
        .operation("DNA_ligase")
        .code("GCAT")
        .done()?;
    builder
        .add_rule(Operator::And, false)
        .template("ACG + GCA")
        .operation("DNA_ligase")
        .code("ATCG")
        .done()?;
    builder
        .add_rule(Operator::Or, true)
        .template("ACG + TAC")
        .operation("Polymerase")
        .code("TATA")
        .done()?;
    builder
        .add_rule(Operator::Or, false)
        .template("ACG + TAC")
        .operation("Polymerase")
        .code("CGCG")
        .done()?;

    builder.build()
}

/// The shared, process-wide built-in registry.
///
/// Initialized on first use. A built-in table that fails its own
/// validation is a packaging defect, so initialization aborts rather
/// than handing out a partial registry.
pub fn builtin() -> &'static Registry {
    static BUILTIN: LazyLock<Registry> =
        LazyLock::new(|| builtin_registry().expect("built-in operation table validates"));
    &BUILTIN
}
