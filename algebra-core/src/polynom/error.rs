//! Errors reported while building a polynomial from its postfix stream.

use algebra_attrs::ErrorKind;
use algebra_error::{ErrorKind, EXPR};
use ariadne::Fmt;

pub use algebra_error::Error;

/// An operand literal could not be read as a term.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid literal `{}`", literal),
    labels = ["this literal"],
)]
pub struct InvalidLiteral {
    /// The offending literal.
    pub literal: String,
}

/// A division by a constant that is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this division", "this divisor is zero"],
)]
pub struct DivisionByZero;

/// A division by something that is not a constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by a polynomial here",
    labels = ["this division", "this divisor is not a constant"],
    help = format!("use {} to divide two polynomials", "euclidian division".fg(EXPR)),
)]
pub struct NonScalarDivisor;

/// The postfix stream did not reduce to a single polynomial.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed expression",
    labels = ["this operator is missing an operand"],
)]
pub struct MissingOperand;
