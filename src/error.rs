/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of the
/// input line. Parse errors cover characters outside the recognized
/// alphabet, incomplete expressions, and trailing garbage — everything
/// detected before any numeral is interpreted.
pub mod parse_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised once an expression has been
/// parsed: mixed numeral systems, out-of-range operands, malformed Roman
/// numerals, results the Roman system cannot represent, and division by
/// zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
