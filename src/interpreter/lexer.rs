use logos::Logos;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeral literal tokens: a run of decimal digits such as `7`, or a
    /// run of the letters `I`, `V` and `X` such as `VII`. Both lexical
    /// classes share one token kind; which numeral system an operand
    /// belongs to is decided later, by the evaluator's classifier.
    ///
    /// The letter class is deliberately narrower than the full Roman
    /// alphabet: operands containing `L`, `C`, `D` or `M` fail lexing as
    /// unrecognized input and never reach structural Roman validation.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    #[regex(r"[IVX]+", |lex| lex.slice().to_string())]
    Numeral(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Spaces, tabs and feeds between tokens.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}
