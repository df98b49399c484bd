// Tally: four-function integer calculator for the console

mod eval;
mod parser;

use std::io;
use std::process;

use eval::engine::evaluate;
use eval::errors::EvalError;
use parser::parse::Parser;

fn main() {
    // No prompt is printed. Lines accumulate until the three tokens of the
    // calculation have arrived; anything typed after the operator is left
    // unread.
    let stdin = io::stdin();
    let mut input = String::new();

    let calculation = loop {
        let mut line = String::new();
        let bytes = match stdin.read_line(&mut line) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
        };
        input.push_str(&line);

        match Parser::new(&input).parse_calculation() {
            Ok(calculation) => break calculation,
            // Stream still open and nothing wrong yet, keep reading
            Err(e) if e.is_incomplete() && bytes > 0 => continue,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    };

    match evaluate(&calculation) {
        Ok(result) => println!("{}", result),
        Err(err @ EvalError::DivisionByZero { .. }) => {
            // Contract: this diagnostic goes on stdout, followed by a
            // failure status and no numeric line
            println!("{}", err);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
