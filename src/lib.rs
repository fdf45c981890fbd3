//! # numera
//!
//! numera is a single-expression calculator written in Rust.
//! It evaluates one binary arithmetic expression whose operands are written
//! either in Arabic numerals (1–10) or in Roman numerals (I–X), and formats
//! the result in the numeral system of the operands.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{evaluator::eval_expression, lexer::Token, parser::parse_expression},
};

/// Defines the structure of a parsed expression.
///
/// This module declares the `Expression` type and the `BinaryOperator` enum
/// that together represent the single two-operand shape the grammar allows.
/// The expression is built by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the operator set: addition, subtraction, multiplication,
///   division.
/// - Carries operand text unchanged from the lexer to the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. It standardizes error reporting: every
/// failure carries one human-readable message, is detected at the earliest
/// possible stage, and terminates the calculation.
///
/// # Responsibilities
/// - Defines error enums for both phases (parse, evaluate).
/// - Attaches the offending token text where it helps the user.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, numeral classification, Roman
/// conversion and evaluation to turn one input line into one result string.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, numeral logic,
///   evaluator.
/// - Keeps each phase pure: explicit inputs, explicit results or errors.
pub mod interpreter;

/// Evaluates one arithmetic expression line.
///
/// The input is expected to be trimmed by the caller. It is lexed into
/// tokens, parsed against the fixed `operand operator operand` grammar, and
/// evaluated; the result is returned as a string in the numeral system of
/// the operands. The first error at any stage terminates the attempt — no
/// partial results, no retries.
///
/// # Errors
/// Returns a boxed [`ParseError`](error::ParseError) or
/// [`EvalError`](error::EvalError) if the line is not a recognized
/// expression or cannot be evaluated.
///
/// # Examples
/// ```
/// use numera::evaluate;
///
/// assert_eq!(evaluate("3 + 4").unwrap(), "7");
/// assert_eq!(evaluate("III + II").unwrap(), "V");
///
/// // Mixing numeral systems is an error.
/// assert!(evaluate("1 + I").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string() }));
        }
    }

    let expression = match parse_expression(&mut tokens.iter()) {
        Ok(expression) => expression,
        Err(e) => return Err(Box::new(e)),
    };

    match eval_expression(&expression) {
        Ok(result) => Ok(result),
        Err(e) => Err(Box::new(e)),
    }
}
