//! Operon REPL - compile molecular programs from files, stdin, or an
//! interactive session.
//!
//! This is the entry point for the `operon` binary.

use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use operon_repl::Repl;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut repl = Repl::new();
    let mut ran_file = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => repl.set_verbose(true),
            "-h" | "--help" => {
                print_usage();
                return;
            }
            path => {
                ran_file = true;
                if let Err(e) = repl.run_file(Path::new(path)) {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    if ran_file {
        return;
    }

    // Enter interactive mode if stdin is a terminal
    let stdin = io::stdin();
    if stdin.is_terminal() {
        repl.interactive();
    } else {
        let mut input = String::new();
        if let Err(e) = stdin.lock().read_to_string(&mut input) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        match repl.run_source(&input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Usage: operon [OPTIONS] [FILE]...");
    println!();
    println!("Compile molecular programs and print the rendered output.");
    println!("With no file, input is read from stdin, or an interactive");
    println!("session starts when stdin is a terminal.");
    println!();
    println!("Options:");
    println!("  -v, --verbose    Echo bindings and rule resolutions");
    println!("  -h, --help       Show this help");
}
