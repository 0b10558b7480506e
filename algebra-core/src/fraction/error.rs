use std::fmt;

/// The reason a rational computation has no finite result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalError {
    /// The computation divided by zero.
    DivisionByZero,

    /// An operand was invalid for the operation, such as a non-integer exponent, or the result
    /// could not be represented.
    InvalidOperand,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidOperand => write!(f, "invalid operand"),
        }
    }
}

impl std::error::Error for RationalError {}
