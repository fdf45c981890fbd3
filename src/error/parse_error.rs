#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant means the same thing to the user: the input line is not a
/// recognized arithmetic expression of the form `operand operator operand`.
pub enum ParseError {
    /// Found a token that does not fit the expression grammar, or a
    /// character outside the recognized alphabet.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// The line ended before a full expression was read.
    UnexpectedEndOfInput,
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Not a recognized arithmetic expression: unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Not a recognized arithmetic expression: unexpected end of input.")
            },

            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Not a recognized arithmetic expression: extra tokens after expression: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
