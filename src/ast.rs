/// Represents a binary operator.
///
/// The expression grammar admits exactly the four arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Represents one parsed two-operand expression.
///
/// Operands are kept as the raw text matched by the lexer. The lexical
/// classes (`[0-9]+` and `[IVX]+`) say nothing yet about which numeral
/// system an operand belongs to; that decision, and every validation beyond
/// token shape, belongs to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Raw text of the left operand.
    pub left:  String,
    /// The operator to apply.
    pub op:    BinaryOperator,
    /// Raw text of the right operand.
    pub right: String,
}
