//! The errors the reducer can report. Each one derives [`ErrorKind`] and is wrapped in an
//! [`Error`] together with the spans it points at.

use algebra_attrs::ErrorKind;
use algebra_error::{ErrorKind, EXPR};
use ariadne::Fmt;
use crate::tokenizer::TokenKind;

pub use algebra_error::Error;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "term".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that is not part of any algebraic notation was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown symbol `{}`", symbol),
    labels = ["this symbol"],
    help = format!(
        "polynomials are written with {}, {}, and the operators {}",
        "numbers".fg(EXPR),
        "letters".fg(EXPR),
        "+ - * / ^ ( )".fg(EXPR),
    ),
)]
pub struct UnknownSymbol {
    /// The offending lexeme.
    pub symbol: String,
}

/// The exponent of a power was not a non-negative integer literal.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid exponent",
    labels = ["this exponent"],
    help = format!("exponents must be {} that fit in 32 bits", "non-negative integer literals".fg(EXPR)),
)]
pub struct InvalidExponent;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;
