//! Core REPL state and execution.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use operon_codegen::generate;
use operon_parser::{parse_with, AssignStmt, Stmt, SymbolTable};
use operon_registry::builtin;

use crate::format::{
    format_definition, format_registry, format_resolution, format_symbols, print_help,
};

/// REPL state.
///
/// Bindings persist across submissions; each submission is parsed and
/// generated as one unit against the session's symbol table.
pub struct Repl {
    symbols: SymbolTable,
    verbose: bool,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            verbose: false,
        }
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Toggle verbose mode.
    pub fn toggle_verbose(&mut self) {
        self.verbose = !self.verbose;
        println!("Verbose mode: {}", self.verbose);
    }

    /// Drop all session bindings.
    pub fn clear(&mut self) {
        self.symbols = SymbolTable::new();
        println!("Bindings cleared");
    }

    /// Compile one source unit against the session bindings.
    ///
    /// On success the unit's bindings (including shadowing ones) fold
    /// into the session; on failure the session is left unchanged.
    pub fn run_source(&mut self, source: &str) -> Result<String, String> {
        let program = parse_with(source, self.symbols.clone()).map_err(|e| format!("{}", e))?;
        let output =
            generate(&program, builtin()).map_err(|e| format!("Compile error: {}", e))?;

        if self.verbose {
            let mut assigns = Vec::new();
            collect_assigns(&program.stmts, &mut assigns);
            for assign in assigns {
                println!("{}", format_definition(&assign.name, &assign.value));
            }
            for block in &output.blocks {
                println!("{}", format_resolution(block));
            }
        }

        self.symbols = program.symbols;
        Ok(output.render())
    }

    /// Compile a file against the session and print its output.
    pub fn run_file(&mut self, path: &Path) -> Result<(), String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        let output = self.run_source(&content)?;
        if !output.is_empty() {
            println!("{}", output);
        }
        Ok(())
    }

    /// Run the interactive REPL.
    pub fn interactive(&mut self) {
        println!("Operon REPL v0.1.0");
        println!("Type 'help' for commands, 'quit' to exit");
        println!();

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut buffer = String::new();

        loop {
            let prompt = if buffer.is_empty() {
                "operon> "
            } else {
                "......> "
            };
            print!("{}", prompt);
            stdout.flush().unwrap();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap() == 0 {
                break; // EOF
            }

            let trimmed = line.trim();

            // Inside an open block a blank line closes it; indentation
            // is significant, so the raw line is buffered.
            if !buffer.is_empty() {
                if trimmed.is_empty() {
                    let source = std::mem::take(&mut buffer);
                    self.submit(&source);
                } else {
                    push_line(&mut buffer, &line);
                }
                continue;
            }

            // Handle special commands
            match trimmed.to_lowercase().as_str() {
                "quit" | "exit" | "\\q" => break,
                "help" | "\\h" => {
                    print_help();
                    continue;
                }
                "symbols" | "\\ds" => {
                    println!("{}", format_symbols(&self.symbols));
                    continue;
                }
                "registry" | "\\dr" => {
                    println!("{}", format_registry(builtin()));
                    continue;
                }
                "\\clear" => {
                    self.clear();
                    continue;
                }
                "verbose" => {
                    self.toggle_verbose();
                    continue;
                }
                "" => continue,
                _ => {}
            }

            // Handle file loading
            if let Some(path) = trimmed.strip_prefix("\\i ") {
                if let Err(e) = self.run_file(Path::new(path.trim())) {
                    eprintln!("Error: {}", e);
                }
                continue;
            }

            // A line that opens a block keeps reading continuation
            // lines until a blank line; anything else runs now.
            match parse_with(&line, self.symbols.clone()) {
                Err(e) if e.is_incomplete() => push_line(&mut buffer, &line),
                _ => self.submit(&line),
            }
        }

        println!("Goodbye!");
    }

    fn submit(&mut self, source: &str) {
        match self.run_source(source) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    if !line.ends_with('\n') {
        buffer.push('\n');
    }
}

fn collect_assigns<'a>(stmts: &'a [Stmt], out: &mut Vec<&'a AssignStmt>) {
    for stmt in stmts {
        match stmt {
            Stmt::Assign(assign) => out.push(assign),
            Stmt::If(cond) => {
                collect_assigns(&cond.then_branch, out);
                collect_assigns(&cond.else_branch, out);
            }
            Stmt::Expr(_) => {}
        }
    }
}
