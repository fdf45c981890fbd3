use std::io::{self, Write};

use clap::Parser;
use numera::evaluate;

/// numera is a single-expression calculator for Arabic and Roman numerals.
///
/// The expression is read from standard input; the program itself takes no
/// arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    // No flags beyond clap's built-in --help and --version; stray
    // arguments are rejected here.
    Args::parse();

    print!("Enter an expression (e.g. '1 + 2' or 'III / II'): ");
    if let Err(e) = io::stdout().flush() {
        eprintln!("Failed to write the prompt: {e}");
        std::process::exit(1);
    }

    let mut line = String::new();
    if let Err(e) = io::stdin().read_line(&mut line) {
        eprintln!("Failed to read the input line: {e}");
        std::process::exit(1);
    }

    match evaluate(line.trim()) {
        Ok(result) => println!("Result: {result}"),
        Err(e) => eprintln!("{e}"),
    }
}
