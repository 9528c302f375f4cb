//! Operon Registry
//!
//! Lookup tables that drive code generation: reagent metadata keyed by
//! operation name, and output rules keyed by (operator, truth) pairs.
//! A [`Registry`] is immutable once built; construction goes through
//! [`RegistryBuilder`], which validates codes, templates and
//! cross-references as entries are added. The built-in table used by
//! the compiler ships in [`builtin`].

mod builder;
mod builtin;
mod registry;
mod types;

pub use builder::{RegistryBuilder, RegistryError};
pub use builtin::{builtin, builtin_registry};
pub use registry::Registry;
pub use types::*;
