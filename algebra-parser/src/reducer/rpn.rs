use super::op::Operator;
use std::ops::Range;

/// What a postfix token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RpnKind {
    /// A literal (number or letter) that becomes a single-term polynomial.
    Operand,

    /// A binary operator, applied to the two topmost operands.
    Operator(Operator),

    /// A power with a literal integer exponent, applied to the topmost operand.
    Power(u32),
}

/// A token of the postfix stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpnToken {
    /// What the token stands for.
    pub kind: RpnKind,

    /// The textual form of the token: the literal for operands, the operator symbol for
    /// operators, and `^k` for powers.
    pub lexeme: String,

    /// The region of the source code that this token originated from. Implicit multiplications
    /// point at the operand they precede.
    pub span: Range<usize>,
}

impl RpnToken {
    /// Creates an operand token.
    pub fn operand(lexeme: impl Into<String>, span: Range<usize>) -> Self {
        Self { kind: RpnKind::Operand, lexeme: lexeme.into(), span }
    }

    /// Creates an operator token.
    pub fn operator(op: Operator, span: Range<usize>) -> Self {
        Self { kind: RpnKind::Operator(op), lexeme: op.symbol().to_string(), span }
    }

    /// Creates a power token.
    pub fn power(exponent: u32, span: Range<usize>) -> Self {
        Self { kind: RpnKind::Power(exponent), lexeme: format!("^{}", exponent), span }
    }

    /// Returns true if the token is an operator or a power, i.e. anything that is not an
    /// operand.
    pub fn is_operation(&self) -> bool {
        !matches!(self.kind, RpnKind::Operand)
    }
}

/// A complete postfix token stream.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rpn {
    /// The tokens, in evaluation order.
    pub tokens: Vec<RpnToken>,
}

impl Rpn {
    /// Returns the lexemes of the stream, in evaluation order.
    pub fn lexemes(&self) -> Vec<&str> {
        self.tokens.iter().map(|token| token.lexeme.as_str()).collect()
    }

    /// Returns an iterator over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, RpnToken> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a Rpn {
    type Item = &'a RpnToken;
    type IntoIter = std::slice::Iter<'a, RpnToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
