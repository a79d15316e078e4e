//! CodeGo CLI
//!
//! Reads a `.cg` source file, tokenizes and parses it, and prints the
//! token listing and the syntax tree, or a diagnostic on failure.

use std::env;
use std::fs;
use std::process;

use codego_lang::{parse, printer, tokenize, CodeGoError, Diagnostic, VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut show_tokens_only = false;
    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tokens" | "-t" => show_tokens_only = true,
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    let Some(filename) = filename else {
        eprintln!("Error: No input file specified");
        print_usage();
        process::exit(1);
    };

    if !filename.ends_with(".cg") {
        eprintln!("Error: The file must have a .cg extension.");
        process::exit(1);
    }

    if let Err(code) = run_file(filename, show_tokens_only) {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: codego [OPTIONS] <script.cg>");
    eprintln!("       codego --help");
}

fn print_help() {
    println!("CodeGo v{} - syntax checker for the CodeGo language", VERSION);
    println!();
    println!("USAGE:");
    println!("    codego [OPTIONS] <script.cg>");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens    Show tokenization output only (lexer only)");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    codego luto.cg           Parse a script and print its tree");
    println!("    codego --tokens luto.cg  Show tokens from the lexer");
}

/// Tokenize and parse a file, printing the artifacts of each phase
fn run_file(filename: &str, show_tokens_only: bool) -> Result<(), i32> {
    let source = fs::read_to_string(filename).map_err(|e| {
        eprintln!("Error: Failed to read file '{}': {}", filename, e);
        1
    })?;

    let tokens = tokenize(&source).map_err(|e| report(e, &source))?;

    println!("Tokens:");
    for token in &tokens {
        println!("  {:4}  {}", token.line, token);
    }

    if show_tokens_only {
        return Ok(());
    }

    let program = parse(tokens).map_err(|e| report(e, &source))?;

    println!();
    println!("Syntax Tree:");
    print!("{}", printer::render(&program));
    println!();
    println!("Result: Valid Syntax!");

    Ok(())
}

fn report(error: impl Into<CodeGoError>, source: &str) -> i32 {
    eprintln!("{}", Diagnostic::with_source(error, source));
    1
}
