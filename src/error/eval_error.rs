#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// The two operands belong to different numeral systems, or to none.
    MixedNumeralSystems,
    /// An operand's value lies outside the supported range of 1 to 10.
    OperandOutOfRange {
        /// The offending operand as written.
        token: String,
    },
    /// An operand uses Roman characters but is not a well-formed Roman
    /// numeral.
    InvalidRomanNumeral {
        /// The offending operand as written.
        token: String,
    },
    /// A Roman subtraction produced a value below one.
    NegativeRomanResult,
    /// A Roman result of zero or less was produced through a path other
    /// than subtraction, such as truncating division.
    NonPositiveRomanResult,
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MixedNumeralSystems => write!(f,
                                                "Both operands must use the same numeral system, either Arabic or Roman."),

            Self::OperandOutOfRange { token } => write!(f,
                                                        "Operand '{token}' is out of range: numbers must be between 1 and 10 inclusive."),

            Self::InvalidRomanNumeral { token } => {
                write!(f, "'{token}' is not a valid Roman numeral.")
            },

            Self::NegativeRomanResult => {
                write!(f, "Roman numerals cannot represent non-positive values.")
            },

            Self::NonPositiveRomanResult => {
                write!(f, "The result must be greater than zero in the Roman system.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for EvalError {}
