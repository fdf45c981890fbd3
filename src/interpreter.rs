/// The evaluator module computes the result of a parsed expression.
///
/// The evaluator classifies both operands, enforces numeral-system
/// consistency and the supported value range, applies the arithmetic
/// operator, and formats the result back into the numeral system of the
/// inputs. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Enforces that both operands use one and the same numeral system.
/// - Validates Roman structure and the 1–10 operand range.
/// - Applies the operator and reports evaluation errors such as
///   non-representable Roman results or division by zero.
pub mod evaluator;
/// The lexer module tokenizes the input line for further parsing.
///
/// The lexer reads the raw line and produces a stream of tokens: numeral
/// literals and the four arithmetic operators. This is the first stage of
/// interpretation, and the stage at which any character outside the
/// recognized alphabet is rejected.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Keeps numeral operands as raw text for later classification.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The numeral module knows the two numeral systems.
///
/// This module classifies operand tokens as Arabic or Roman and converts
/// between Roman numeral strings and their integer values, including strict
/// validation of canonical Roman form.
///
/// # Responsibilities
/// - Classifies tokens by numeral system using liberal per-system checks.
/// - Validates canonical Roman structure.
/// - Converts Roman numerals to integers and back.
pub mod numeral;
/// The parser module builds the expression from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs the single two-operand expression the grammar allows,
/// rejecting anything shorter or longer.
///
/// # Responsibilities
/// - Converts tokens into an [`Expression`](crate::ast::Expression).
/// - Validates the fixed `operand operator operand` shape.
/// - Rejects incomplete input and trailing tokens.
pub mod parser;
