//! Operators understood by the reducer, with their precedence and associativity.

/// The associativity of an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// `a op b op c` is evaluated as `a op (b op c)`. For prefix operators, `op op a` is
    /// evaluated as `op (op a)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`, explicit or implicit) and division (`/`), which separate
    /// factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Returns the precedence of the operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
        }
    }

    /// Returns the symbol of the operation, as it appears in the postfix stream.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// An operator waiting on the reducer's stack.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PendingOp {
    /// The operation that will be emitted.
    pub op: Operator,

    /// The precedence the operator was pushed with. A negation is pushed as a multiplication
    /// with [`Precedence::Neg`].
    pub precedence: Precedence,

    /// The associativity the operator was pushed with.
    pub associativity: Associativity,

    /// The region of the source code that this operator was parsed from.
    pub span: std::ops::Range<usize>,
}

impl PendingOp {
    /// Returns true if this operator, already on the stack, must be emitted before `incoming` is
    /// pushed.
    pub fn binds_before(&self, incoming: &PendingOp) -> bool {
        match incoming.associativity {
            Associativity::Left => self.precedence >= incoming.precedence,
            Associativity::Right => self.precedence > incoming.precedence,
        }
    }
}
