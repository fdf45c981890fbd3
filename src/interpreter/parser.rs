use crate::{
    ast::{BinaryOperator, Expression},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete two-operand expression from the token stream.
///
/// This is the entry point for parsing, and the whole grammar:
///
/// Grammar: `expression := numeral operator numeral`
///
/// The stream must be consumed exactly: anything left after the second
/// operand is a trailing-token error. Operands stay raw strings here;
/// deciding whether they are Arabic or Roman, and whether a Roman operand
/// is structurally valid, is the evaluator's job.
///
/// # Parameters
/// - `tokens`: Token iterator over the lexed input line.
///
/// # Returns
/// The parsed [`Expression`].
///
/// # Errors
/// - `UnexpectedToken` if an operand or operator position holds the wrong
///   kind of token.
/// - `UnexpectedEndOfInput` if the line ends before the expression is
///   complete.
/// - `UnexpectedTrailingTokens` if tokens remain after the second operand.
pub fn parse_expression<'a, I>(tokens: &mut I) -> ParseResult<Expression>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_operand(tokens)?;
    let op = parse_operator(tokens)?;
    let right = parse_operand(tokens)?;

    if let Some(token) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}") });
    }

    Ok(Expression { left, op, right })
}

/// Parses a single numeral operand.
///
/// The next token must be a `Token::Numeral`; its raw text is returned.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an operand.
///
/// # Returns
/// The operand text as written.
///
/// # Errors
/// - `UnexpectedToken` if the next token is not a numeral.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
fn parse_operand<'a, I>(tokens: &mut I) -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Numeral(text)) => Ok(text.clone()),
        Some(token) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a numeral, found {token:?}") })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the binary operator between the two operands.
///
/// The next token must be one of `+`, `-`, `*` or `/`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operator.
///
/// # Returns
/// The corresponding [`BinaryOperator`].
///
/// # Errors
/// - `UnexpectedToken` if the next token is not an operator.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
fn parse_operator<'a, I>(tokens: &mut I) -> ParseResult<BinaryOperator>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Plus) => Ok(BinaryOperator::Add),
        Some(Token::Minus) => Ok(BinaryOperator::Sub),
        Some(Token::Star) => Ok(BinaryOperator::Mul),
        Some(Token::Slash) => Ok(BinaryOperator::Div),
        Some(token) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected an operator, found {token:?}") })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
