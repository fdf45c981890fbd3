use crate::{
    ast::{BinaryOperator, Expression},
    error::EvalError,
    interpreter::numeral::{
        classify::{NumeralSystem, classify},
        roman::{integer_to_roman, is_valid_roman_structure, roman_to_integer},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Smallest operand value accepted in either numeral system.
pub const MIN_OPERAND: i64 = 1;
/// Largest operand value accepted in either numeral system.
pub const MAX_OPERAND: i64 = 10;

/// Evaluates a parsed expression and formats the result.
///
/// Both operands are classified first and must agree on a single numeral
/// system. Arabic operands are then parsed as integers; Roman operands are
/// structurally validated (both of them, before any other check) and
/// converted. Operands outside the 1–10 range are rejected in either
/// system. The operator is applied — division truncates toward zero — and
/// the result is rendered in the numeral system of the inputs. Results
/// below one cannot be represented in the Roman system and are errors
/// there, while Arabic results may be zero or negative.
///
/// # Parameters
/// - `expression`: The parsed expression to evaluate.
///
/// # Returns
/// The formatted result, in the same numeral system as the operands.
///
/// # Errors
/// - `MixedNumeralSystems` if the operands do not resolve to one system.
/// - `InvalidRomanNumeral` if a Roman operand is not in canonical form.
/// - `OperandOutOfRange` if an operand value lies outside 1–10.
/// - `NegativeRomanResult` if a Roman subtraction drops below one.
/// - `NonPositiveRomanResult` if a Roman result reaches zero another way.
/// - `DivisionByZero` on a zero divisor (unreachable through `evaluate`,
///   where the range check runs first).
///
/// # Example
/// ```
/// use numera::{
///     ast::{BinaryOperator, Expression},
///     interpreter::evaluator::eval_expression,
/// };
///
/// let expression = Expression { left:  "III".to_string(),
///                               op:    BinaryOperator::Add,
///                               right: "II".to_string(), };
///
/// assert_eq!(eval_expression(&expression).unwrap(), "V");
/// ```
pub fn eval_expression(expression: &Expression) -> EvalResult<String> {
    let system = match (classify(&expression.left), classify(&expression.right)) {
        (Some(left), Some(right)) if left == right => left,
        _ => return Err(EvalError::MixedNumeralSystems),
    };

    let (a, b) = match system {
        NumeralSystem::Arabic => {
            (arabic_value(&expression.left)?, arabic_value(&expression.right)?)
        },
        NumeralSystem::Roman => {
            for token in [&expression.left, &expression.right] {
                if !is_valid_roman_structure(token) {
                    return Err(EvalError::InvalidRomanNumeral { token: token.clone() });
                }
            }
            (roman_to_integer(&expression.left), roman_to_integer(&expression.right))
        },
    };

    for (token, value) in [(&expression.left, a), (&expression.right, b)] {
        if !(MIN_OPERAND..=MAX_OPERAND).contains(&value) {
            return Err(EvalError::OperandOutOfRange { token: token.clone() });
        }
    }

    let result = match expression.op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => {
            let difference = a - b;
            if system == NumeralSystem::Roman && difference < 1 {
                return Err(EvalError::NegativeRomanResult);
            }
            difference
        },
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        },
    };

    match system {
        NumeralSystem::Arabic => Ok(result.to_string()),
        NumeralSystem::Roman => {
            if result < 1 {
                return Err(EvalError::NonPositiveRomanResult);
            }
            Ok(integer_to_roman(result))
        },
    }
}

/// Parses an Arabic operand to its integer value.
///
/// The classifier has already accepted the token as Arabic. A literal that
/// overflows `i64` fails the liberal Arabic check too and never classifies;
/// if one did reach this point it would be reported as out of range.
fn arabic_value(token: &str) -> EvalResult<i64> {
    token.parse()
         .map_err(|_| EvalError::OperandOutOfRange { token: token.to_string() })
}
