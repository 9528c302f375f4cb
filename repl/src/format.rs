//! Output formatting utilities for the REPL.

use operon_codegen::OutputBlock;
use operon_parser::SymbolTable;
use operon_registry::Registry;

/// Format a verbose echo for a binding definition.
pub fn format_definition(name: &str, value: &str) -> String {
    format!("defined {} = \"{}\"", name, value)
}

/// Format a verbose echo for one resolved operation.
pub fn format_resolution(block: &OutputBlock) -> String {
    format!(
        "resolved ({}, {}) => {}",
        block.operator, block.truth, block.code
    )
}

/// Format the session's bindings, one per line in name order.
pub fn format_symbols(symbols: &SymbolTable) -> String {
    if symbols.is_empty() {
        return "(no bindings)".to_string();
    }
    symbols
        .sorted()
        .iter()
        .map(|binding| format!("{} = \"{}\"", binding.name, binding.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the registry's operations and rules.
pub fn format_registry(registry: &Registry) -> String {
    let mut lines = Vec::new();
    lines.push("Operations:".to_string());
    for record in registry.operations() {
        lines.push(format!("  {}", record));
    }
    lines.push("Rules:".to_string());
    for rule in registry.rules() {
        lines.push(format!(
            "  ({}, {}) -> {} | {} | {}",
            rule.operator, rule.truth, rule.template, rule.operation, rule.code
        ));
    }
    lines.join("\n")
}

/// Print help information.
pub fn print_help() {
    println!("Operon REPL Commands:");
    println!("  \\i <file>      Compile a file in this session");
    println!("  \\ds            Show bindings");
    println!("  \\dr            Show the operation registry");
    println!("  \\clear         Drop all bindings");
    println!("  verbose        Toggle verbose mode");
    println!("  help, \\h       Show this help");
    println!("  quit, \\q       Exit");
    println!();
    println!("Statements:");
    println!("  name = \"SEQ\"              Bind a name to a sequence literal");
    println!("  a == b, a != b            Compare two bindings");
    println!("  x and y, x or y           Combine comparisons");
    println!("  if expr: ... else: ...    Conditional block");
}

#[cfg(test)]
mod tests {
    use super::*;
    use operon_parser::{Binding, Span};
    use operon_registry::builtin;

    #[test]
    fn formats_symbols_in_name_order() {
        let mut symbols = SymbolTable::new();
        symbols.define(Binding::new("z", "TT", Span::default()));
        symbols.define(Binding::new("a", "ACG", Span::default()));

        assert_eq!(format_symbols(&symbols), "a = \"ACG\"\nz = \"TT\"");
    }

    #[test]
    fn formats_empty_symbols() {
        assert_eq!(format_symbols(&SymbolTable::new()), "(no bindings)");
    }

    #[test]
    fn formats_registry_with_operations_and_rules() {
        let listing = format_registry(builtin());

        assert!(listing.starts_with("Operations:"));
        assert!(listing.contains("EcoRI (restriction endonuclease"));
        assert!(listing.contains("Rules:"));
        assert!(listing.contains("(!=, true) -> ACG + CAT | EcoRI | CTAA"));
    }

    #[test]
    fn formats_definition_echo() {
        assert_eq!(format_definition("a", "ACG"), "defined a = \"ACG\"");
    }
}
