//! The shunting-yard reducer.
//!
//! [`ShuntingYard`] walks the tokens of an expression once, moving operands straight to the
//! output and holding operators on a stack until an operator of lower precedence (or the end of
//! the input) releases them. The result is an [`Rpn`] stream where operators follow their
//! operands, so evaluating it needs nothing more than a stack.
//!
//! Algebraic notation needs a few rewrites on top of the textbook algorithm:
//!
//! - Juxtaposed operands are multiplied: `2x`, `xy` and `(x+1)(x-1)` get an implicit `*`.
//! - `^` must be followed by an integer literal; the pair becomes a single postfix power token
//!   such as `^2`. Chained powers are folded right to left, so `x^2^3` is `x^8`.
//! - A leading `-` becomes the operand `-1` multiplied into what follows, binding tighter than
//!   `*` but looser than `^`, so `-x^2` is `-(x^2)`. A leading `+` is dropped.

pub mod op;
pub mod rpn;

use crate::error::{self, Error};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use op::{Associativity, Operator, PendingOp, Precedence};
use std::ops::Range;

pub use rpn::{Rpn, RpnKind, RpnToken};

/// Something waiting on the operator stack.
#[derive(Debug, Clone, PartialEq)]
enum StackEntry {
    /// An operator.
    Op(PendingOp),

    /// An opening parenthesis, with its span.
    Paren(Range<usize>),
}

/// Reduces a token stream into postfix order.
#[derive(Debug, Clone)]
pub struct ShuntingYard<'source> {
    /// The tokens being reduced.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be read.
    cursor: usize,

    /// The postfix stream built so far.
    output: Vec<RpnToken>,

    /// Operators and parentheses not yet released.
    stack: Vec<StackEntry>,

    /// Whether the next token must start an operand (a literal, `(` or a sign).
    expect_operand: bool,
}

impl<'source> ShuntingYard<'source> {
    /// Creates a new reducer for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            output: Vec::new(),
            stack: Vec::new(),
            expect_operand: true,
        }
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the next non-whitespace token and advances the cursor past it.
    fn next_token(&mut self) -> Option<Token<'source>> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if !token.is_whitespace() {
                return Some(token.clone());
            }
        }
        None
    }

    /// Returns the next non-whitespace token without advancing the cursor.
    fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..].iter().find(|token| !token.is_whitespace())
    }

    /// Returns the kind of the non-whitespace token read just before the last one.
    fn previous_kind(&self) -> Option<TokenKind> {
        self.tokens[..self.cursor]
            .iter()
            .rev()
            .filter(|token| !token.is_whitespace())
            .nth(1)
            .map(|token| token.kind)
    }

    /// Pushes an operator, first releasing the stacked operators that bind before it.
    fn push_operator(&mut self, pending: PendingOp) {
        while let Some(StackEntry::Op(top)) = self.stack.last() {
            if !top.binds_before(&pending) {
                break;
            }
            if let Some(StackEntry::Op(top)) = self.stack.pop() {
                self.output.push(RpnToken::operator(top.op, top.span));
            }
        }
        self.stack.push(StackEntry::Op(pending));
    }

    /// Pushes the implicit multiplication between two juxtaposed operands.
    fn push_implicit_mul(&mut self, span: Range<usize>) {
        self.push_operator(PendingOp {
            op: Operator::Mul,
            precedence: Precedence::Factor,
            associativity: Associativity::Left,
            span,
        });
    }

    /// Reads the integer exponent following a `^`, including any chained `^k` after it, and
    /// returns the folded exponent and the span it covers.
    fn read_exponent(&mut self, caret: Range<usize>) -> Result<(u32, Range<usize>), Error> {
        let mut exponents = Vec::new();
        let mut end = caret.end;

        loop {
            let token = self.next_token()
                .ok_or_else(|| Error::new(vec![self.eof_span()], error::UnexpectedEof))?;
            if token.kind != TokenKind::Int {
                return Err(Error::new(vec![token.span], error::InvalidExponent));
            }
            let exponent = token.lexeme.parse::<u32>()
                .map_err(|_| Error::new(vec![token.span.clone()], error::InvalidExponent))?;
            exponents.push(exponent);
            end = token.span.end;

            match self.peek_token() {
                Some(next) if next.kind == TokenKind::Exp => {
                    self.next_token();
                },
                _ => break,
            }
        }

        let span = caret.start..end;
        let folded = exponents
            .into_iter()
            .rev()
            .try_fold(1u32, |acc, base| base.checked_pow(acc))
            .ok_or_else(|| Error::new(vec![span.clone()], error::InvalidExponent))?;
        Ok((folded, span))
    }

    /// Handles a token that starts an operand.
    fn operand(&mut self, token: Token<'source>) {
        if !self.expect_operand {
            self.push_implicit_mul(token.span.clone());
        }
        self.output.push(RpnToken::operand(token.lexeme, token.span));
        self.expect_operand = false;
    }

    /// Handles `+` and `-`, which can be binary or unary depending on their position.
    fn sign(&mut self, token: Token<'source>) {
        let op = if token.kind == TokenKind::Add { Operator::Add } else { Operator::Sub };
        if !self.expect_operand {
            self.push_operator(PendingOp {
                op,
                precedence: Precedence::Term,
                associativity: Associativity::Left,
                span: token.span,
            });
            self.expect_operand = true;
        } else if op == Operator::Sub {
            self.output.push(RpnToken::operand("-1", token.span.clone()));
            self.push_operator(PendingOp {
                op: Operator::Mul,
                precedence: Precedence::Neg,
                associativity: Associativity::Right,
                span: token.span,
            });
        }
    }

    /// Releases every operator up to the matching opening parenthesis.
    fn close_paren(&mut self, token: Token<'source>) -> Result<(), Error> {
        if self.expect_operand {
            return Err(if self.previous_kind() == Some(TokenKind::OpenParen) {
                Error::new(vec![token.span], error::EmptyParenthesis)
            } else {
                Error::new(vec![token.span], error::UnexpectedToken {
                    expected: &[TokenKind::Letter, TokenKind::Int, TokenKind::OpenParen],
                    found: token.kind,
                })
            });
        }

        loop {
            match self.stack.pop() {
                Some(StackEntry::Op(pending)) => {
                    self.output.push(RpnToken::operator(pending.op, pending.span));
                },
                Some(StackEntry::Paren(_)) => return Ok(()),
                None => {
                    return Err(Error::new(vec![token.span], error::UnclosedParenthesis {
                        opening: false,
                    }));
                },
            }
        }
    }

    /// Reduces the whole input, returning the postfix stream or the first error found.
    pub fn reduce(mut self) -> Result<Rpn, Vec<Error>> {
        self.reduce_tokens().map_err(|err| vec![err])?;
        Ok(Rpn { tokens: self.output })
    }

    fn reduce_tokens(&mut self) -> Result<(), Error> {
        while let Some(token) = self.next_token() {
            match token.kind {
                kind if kind.is_operand() => self.operand(token),
                TokenKind::OpenParen => {
                    if !self.expect_operand {
                        self.push_implicit_mul(token.span.clone());
                    }
                    self.stack.push(StackEntry::Paren(token.span));
                    self.expect_operand = true;
                },
                TokenKind::CloseParen => self.close_paren(token)?,
                TokenKind::Add | TokenKind::Sub => self.sign(token),
                TokenKind::Mul | TokenKind::Div | TokenKind::Exp if self.expect_operand => {
                    return Err(Error::new(vec![token.span], error::UnexpectedToken {
                        expected: &[TokenKind::Letter, TokenKind::Int, TokenKind::OpenParen],
                        found: token.kind,
                    }));
                },
                TokenKind::Mul | TokenKind::Div => {
                    let op = if token.kind == TokenKind::Mul { Operator::Mul } else { Operator::Div };
                    self.push_operator(PendingOp {
                        op,
                        precedence: Precedence::Factor,
                        associativity: Associativity::Left,
                        span: token.span,
                    });
                    self.expect_operand = true;
                },
                TokenKind::Exp => {
                    let (exponent, span) = self.read_exponent(token.span)?;
                    self.output.push(RpnToken::power(exponent, span));
                },
                _ => {
                    return Err(Error::new(vec![token.span], error::UnknownSymbol {
                        symbol: token.lexeme.to_string(),
                    }));
                },
            }
        }

        if self.expect_operand {
            return Err(Error::new(vec![self.eof_span()], error::UnexpectedEof));
        }

        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Op(pending) => self.output.push(RpnToken::operator(pending.op, pending.span)),
                StackEntry::Paren(span) => {
                    return Err(Error::new(vec![span], error::UnclosedParenthesis { opening: true }));
                },
            }
        }

        Ok(())
    }
}

/// Reduces the given expression into a postfix token stream.
pub fn parse(input: &str) -> Result<Rpn, Vec<Error>> {
    ShuntingYard::new(input).reduce()
}
