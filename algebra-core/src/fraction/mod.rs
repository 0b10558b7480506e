//! Exact rational numbers.
//!
//! A [`Fraction`] is a ratio of two `i64`s. It is **not** kept in lowest terms after every
//! operation: constructors store what they are given, and [`Fraction::reduce`] brings a value to
//! canonical form (lowest terms, positive denominator) on demand. The arithmetic operators reduce
//! their result.
//!
//! # Special values
//!
//! Algebraic edge cases are encoded in the value instead of being reported as errors. A zero
//! denominator marks a special value:
//!
//! - `±1/0` is infinite; dividing by a zero fraction produces [`Fraction::INFINITY`].
//! - `0/0` is invalid (NaN); it is produced by malformed input such as `"3/0"`, by non-integer
//!   exponents and by results that overflow the `i64` range.
//!
//! Special values propagate through arithmetic like their floating-point counterparts. Code that
//! prefers an explicit error can use [`Fraction::classify`] or the `checked_*` methods, which
//! return a [`RationalError`].
//!
//! ```
//! use algebra_core::fraction::Fraction;
//!
//! let f = Fraction::parse("6/8");
//! assert_eq!((f.numerator(), f.denominator()), (6, 8));
//! assert_eq!(f.reduce().display(), "3/4");
//!
//! assert!((Fraction::from(1) / Fraction::ZERO).is_infinity());
//! assert!(Fraction::parse("1/0").is_nan());
//! ```

mod error;
mod fmt;
mod ops;
mod parse;

use crate::numeric::gcd_i128;
use std::cmp::Ordering;
use tracing::warn;

pub use error::RationalError;

/// An exact ratio of two machine integers. See the [module-level documentation](self).
///
/// Equality and ordering compare the **values** of the fractions, so `1/2 == 2/4`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// A comparison operator accepted by [`Fraction::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl std::str::FromStr for CompareOp {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Self::Eq),
            "<>" | "!=" => Ok(Self::NotEq),
            "<" => Ok(Self::Less),
            "<=" | "=<" | "leq" => Ok(Self::LessEq),
            ">" => Ok(Self::Greater),
            ">=" | "=>" | "geq" => Ok(Self::GreaterEq),
            _ => Err(RationalError::InvalidOperand),
        }
    }
}

impl Default for Fraction {
    /// The default fraction is `1/1`.
    fn default() -> Self {
        Self::ONE
    }
}

impl Fraction {
    /// The fraction `0/1`.
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };

    /// The fraction `1/1`.
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };

    /// Positive infinity, the result of dividing by zero.
    pub const INFINITY: Self = Self { numerator: 1, denominator: 0 };

    /// The invalid value.
    pub const NAN: Self = Self { numerator: 0, denominator: 0 };

    /// Creates the fraction `numerator / denominator` without reducing it. A zero denominator
    /// yields [`Fraction::NAN`].
    pub fn new(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::NAN;
        }
        Self { numerator, denominator }
    }

    /// Returns `0/1`.
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns `1/1`.
    pub fn one() -> Self {
        Self::ONE
    }

    /// Returns [`Fraction::INFINITY`].
    pub fn infinite() -> Self {
        Self::INFINITY
    }

    /// Returns [`Fraction::NAN`].
    pub fn invalid() -> Self {
        Self::NAN
    }

    /// Builds a fraction from a wide intermediate result, reducing it first. Results that do not
    /// fit in an `i64` become [`Fraction::NAN`].
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Self {
        if denominator == 0 {
            return match numerator.signum() {
                0 => Self::NAN,
                1 => Self::INFINITY,
                _ => -Self::INFINITY,
            };
        }

        let g = gcd_i128(numerator, denominator).max(1);
        let (mut numerator, mut denominator) = (numerator / g, denominator / g);
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        match (i64::try_from(numerator), i64::try_from(denominator)) {
            (Ok(numerator), Ok(denominator)) => Self { numerator, denominator },
            _ => {
                warn!(%numerator, %denominator, "fraction overflows the i64 range");
                Self::NAN
            },
        }
    }

    /// The numerator, as stored.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// The denominator, as stored.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Replaces the numerator. The value is not reduced.
    pub fn set_numerator(&mut self, numerator: i64) {
        self.numerator = numerator;
    }

    /// Replaces the denominator. The value is not reduced.
    pub fn set_denominator(&mut self, denominator: i64) {
        self.denominator = denominator;
    }

    /// The floating-point value of the fraction. Infinite and invalid fractions map to the
    /// corresponding `f64` special values.
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Returns the fraction in lowest terms with a positive denominator. Special values are
    /// returned unchanged.
    pub fn reduce(self) -> Self {
        if self.denominator == 0 {
            return self;
        }
        Self::from_wide(self.numerator as i128, self.denominator as i128)
    }

    /// Returns the fraction in the tagged form: [`Ok`] for finite values,
    /// [`RationalError::DivisionByZero`] for infinite ones and [`RationalError::InvalidOperand`]
    /// for invalid ones.
    pub fn classify(self) -> Result<Self, RationalError> {
        if self.is_nan() {
            Err(RationalError::InvalidOperand)
        } else if self.is_infinity() {
            Err(RationalError::DivisionByZero)
        } else {
            Ok(self)
        }
    }

    /// Divides by `rhs`, reporting a zero divisor instead of producing infinity.
    pub fn checked_div(self, rhs: impl Into<Self>) -> Result<Self, RationalError> {
        let rhs = rhs.into();
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        (self / rhs).classify()
    }

    /// Returns the opposite of the fraction.
    pub fn opposed(self) -> Self {
        -self
    }

    /// Returns the inverse of the fraction by swapping numerator and denominator. The inverse of
    /// zero is [`Fraction::INFINITY`].
    pub fn invert(self) -> Self {
        if self.is_nan() {
            return self;
        }
        if self.numerator == 0 {
            return Self::INFINITY;
        }
        Self { numerator: self.denominator, denominator: self.numerator }
    }

    /// Returns the absolute value of the fraction.
    pub fn abs(self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.abs() }
    }

    /// Multiplies both parts of the fraction by `k`, leaving its value unchanged. A zero factor
    /// is ignored.
    pub fn amplify(self, k: i64) -> Self {
        if k == 0 || self.denominator == 0 {
            return self;
        }
        match (self.numerator.checked_mul(k), self.denominator.checked_mul(k)) {
            (Some(numerator), Some(denominator)) => Self { numerator, denominator },
            _ => self,
        }
    }

    /// Raises the fraction to an integer power. A negative exponent inverts the fraction first.
    pub fn pow(self, p: i64) -> Self {
        let base = self.reduce();
        if base.denominator == 0 {
            return base;
        }
        let base = if p < 0 { base.invert() } else { base };
        if base.denominator == 0 {
            return base;
        }

        let Ok(exp) = u32::try_from(p.unsigned_abs()) else {
            warn!(p, "exponent out of range");
            return Self::NAN;
        };
        match ((base.numerator as i128).checked_pow(exp), (base.denominator as i128).checked_pow(exp)) {
            (Some(numerator), Some(denominator)) => Self::from_wide(numerator, denominator),
            _ => {
                warn!(p, "power overflows the i64 range");
                Self::NAN
            },
        }
    }

    /// Raises the fraction to a rational power, which must be an integer.
    ///
    /// Returns [`RationalError::InvalidOperand`] for non-integer exponents. Use [`Fraction::pow`]
    /// when the exponent is known to be an integer.
    pub fn checked_pow(self, p: Self) -> Result<Self, RationalError> {
        let p = p.classify()?.reduce();
        if p.denominator != 1 {
            return Err(RationalError::InvalidOperand);
        }
        self.pow(p.numerator).classify()
    }

    /// Takes the `p`-th root of the fraction.
    ///
    /// Perfect powers give an exact result. Otherwise the root is computed in floating point and
    /// converted back with [`Fraction::from_f64`], so the result is only an approximation of the
    /// (usually irrational) root. `root(0)` returns the fraction unchanged, a negative `p` inverts
    /// first, and an even root of a negative fraction is invalid.
    pub fn root(self, p: i64) -> Self {
        if p == 0 || self.denominator == 0 {
            return self;
        }
        let base = if p < 0 { self.reduce().invert() } else { self.reduce() };
        if base.denominator == 0 {
            return base;
        }
        let p = p.unsigned_abs();
        if base.numerator < 0 && p % 2 == 0 {
            return Self::NAN;
        }

        match (exact_root(base.numerator, p), exact_root(base.denominator, p)) {
            (Some(numerator), Some(denominator)) => Self { numerator, denominator },
            _ => {
                let value = base.value();
                let root = value.abs().powf(1.0 / p as f64).copysign(value);
                Self::from_f64(root)
            },
        }
    }

    /// Takes the square root of the fraction. See [`Fraction::root`].
    pub fn sqrt(self) -> Self {
        self.root(2)
    }

    /// Compares the values of two fractions with the given operator.
    ///
    /// Finite fractions are compared exactly, regardless of whether they are reduced. Special
    /// values compare like their floating-point counterparts, so an invalid fraction is only ever
    /// "different".
    pub fn compare(&self, other: &Self, op: CompareOp) -> bool {
        let Some(ordering) = self.partial_cmp(other) else {
            return op == CompareOp::NotEq;
        };
        match op {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::NotEq => ordering != Ordering::Equal,
            CompareOp::Less => ordering == Ordering::Less,
            CompareOp::LessEq => ordering != Ordering::Greater,
            CompareOp::Greater => ordering == Ordering::Greater,
            CompareOp::GreaterEq => ordering != Ordering::Less,
        }
    }

    pub fn lesser(&self, than: &Self) -> bool {
        self.compare(than, CompareOp::Less)
    }

    pub fn leq(&self, than: &Self) -> bool {
        self.compare(than, CompareOp::LessEq)
    }

    pub fn greater(&self, than: &Self) -> bool {
        self.compare(than, CompareOp::Greater)
    }

    pub fn geq(&self, than: &Self) -> bool {
        self.compare(than, CompareOp::GreaterEq)
    }

    pub fn is_equal(&self, than: &Self) -> bool {
        self.compare(than, CompareOp::Eq)
    }

    pub fn is_different(&self, than: &Self) -> bool {
        self.compare(than, CompareOp::NotEq)
    }

    /// Returns true if `other` is the opposite of this fraction.
    pub fn is_opposed(&self, other: &Self) -> bool {
        self.is_equal(&-*other)
    }

    /// Returns true if `other` is the inverse of this fraction.
    pub fn is_inverted(&self, other: &Self) -> bool {
        self.is_equal(&(Self::ONE / *other))
    }

    /// Returns true if every given fraction is equal to this one.
    pub fn are_equals(&self, others: &[Self]) -> bool {
        others.iter().all(|other| self.is_equal(other))
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0 && self.denominator != 0
    }

    /// Returns true if the fraction reduces to `1/1`.
    pub fn is_one(&self) -> bool {
        self.denominator != 0 && self.numerator == self.denominator
    }

    pub fn is_nan(&self) -> bool {
        self.numerator == 0 && self.denominator == 0
    }

    pub fn is_infinity(&self) -> bool {
        self.numerator != 0 && self.denominator == 0
    }

    /// Returns true for fractions that are neither infinite nor invalid.
    pub fn is_finite(&self) -> bool {
        self.denominator != 0
    }

    /// Returns true if the fraction is an integer.
    pub fn is_integer(&self) -> bool {
        self.denominator != 0 && self.numerator % self.denominator == 0
    }

    /// Returns `1` if the fraction is positive or zero, `-1` otherwise. The sign of both parts is
    /// taken into account, so `-1/-2` is positive.
    ///
    /// [`Fraction::NAN`] has no sign and returns `0`, so it is neither positive nor negative.
    pub fn sign(&self) -> i64 {
        if self.is_nan() {
            return 0;
        }
        if self.denominator == 0 {
            return if self.numerator < 0 { -1 } else { 1 };
        }
        if (self.numerator as i128) * (self.denominator as i128) >= 0 { 1 } else { -1 }
    }

    pub fn is_positive(&self) -> bool {
        self.sign() == 1
    }

    pub fn is_negative(&self) -> bool {
        self.sign() == -1
    }

    /// Returns true if both the numerator and denominator of the reduced fraction are perfect
    /// squares.
    pub fn is_square(&self) -> bool {
        let reduced = self.reduce();
        reduced.is_finite()
            && exact_root(reduced.numerator, 2).is_some()
            && exact_root(reduced.denominator, 2).is_some()
    }
}

/// Returns the exact `p`-th root of `value`, if it is an integer.
fn exact_root(value: i64, p: u64) -> Option<i64> {
    let Ok(exp) = u32::try_from(p) else {
        return (value == 0 || value == 1).then_some(value);
    };
    if value < 0 {
        return value.checked_neg()
            .and_then(|value| exact_root(value, p))
            .filter(|_| p % 2 == 1)
            .map(|root| -root);
    }

    let guess = (value as f64).powf(1.0 / p as f64).round() as i64;
    (guess.saturating_sub(1)..=guess.saturating_add(1))
        .filter(|candidate| *candidate >= 0)
        .find(|candidate| (*candidate as i128).checked_pow(exp) == Some(value as i128))
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        if !self.is_finite() || !other.is_finite() {
            return self.value().partial_cmp(&other.value());
        }

        // normalize the denominators to be positive, then cross-multiply
        let (a, b) = (self.numerator as i128 * self.denominator.signum() as i128, self.denominator.unsigned_abs() as i128);
        let (c, d) = (other.numerator as i128 * other.denominator.signum() as i128, other.denominator.unsigned_abs() as i128);
        Some((a * d).cmp(&(c * b)))
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn reduce_canonical() {
        let f = Fraction::new(-6, -8).reduce();
        assert_eq!((f.numerator(), f.denominator()), (3, 4));

        let f = Fraction::new(6, -8).reduce();
        assert_eq!((f.numerator(), f.denominator()), (-3, 4));

        let f = Fraction::new(0, 5).reduce();
        assert_eq!((f.numerator(), f.denominator()), (0, 1));
    }

    #[test]
    fn compare_unreduced() {
        let a = Fraction::new(1, 2);
        let b = Fraction::new(-2, -4);
        assert!(a.is_equal(&b));
        assert!(a.compare(&b, "<=".parse().unwrap()));
        assert!(!a.compare(&b, "<>".parse().unwrap()));
        assert!(Fraction::new(1, 3).lesser(&a));
        assert!(Fraction::new(-1, 3).lesser(&Fraction::new(-1, 4)));
    }

    #[test]
    fn special_values() {
        assert!((Fraction::from(3) / Fraction::ZERO).is_infinity());
        assert!(Fraction::new(3, 0).is_nan());
        assert!(Fraction::NAN.is_different(&Fraction::NAN));
        assert!(!Fraction::NAN.is_equal(&Fraction::NAN));
        assert!(Fraction::INFINITY.greater(&Fraction::from(i64::MAX)));
        assert_eq!(Fraction::NAN.classify(), Err(RationalError::InvalidOperand));
        assert_eq!(Fraction::INFINITY.classify(), Err(RationalError::DivisionByZero));
        assert_eq!(Fraction::from(2).checked_div(0), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn predicates() {
        assert!(Fraction::new(2, 2).is_one());
        assert!(Fraction::new(0, 3).is_zero());
        assert!(Fraction::new(-1, -2).is_positive());
        assert!(Fraction::new(1, -2).is_negative());
        assert!(Fraction::ZERO.is_positive());
        assert!(Fraction::INFINITY.is_positive());
        assert!((-Fraction::INFINITY).is_negative());
        assert_eq!(Fraction::NAN.sign(), 0);
        assert!(!Fraction::NAN.is_positive());
        assert!(!Fraction::NAN.is_negative());
        assert!(Fraction::new(8, 18).is_square());
        assert!(!Fraction::new(2, 1).is_square());
        assert!(Fraction::new(1, 2).is_opposed(&Fraction::new(-2, 4)));
        assert!(Fraction::new(2, 3).is_inverted(&Fraction::new(3, 2)));
        assert!(Fraction::new(1, 2).are_equals(&[Fraction::new(2, 4), Fraction::new(3, 6)]));
    }

    #[test]
    fn powers() {
        let f = Fraction::new(2, 3).pow(3);
        assert_eq!((f.numerator(), f.denominator()), (8, 27));

        let f = Fraction::new(2, 3).pow(-2);
        assert_eq!((f.numerator(), f.denominator()), (9, 4));

        assert!(Fraction::new(5, 7).pow(0).is_one());
        assert_eq!(Fraction::from(2).checked_pow(Fraction::new(1, 2)), Err(RationalError::InvalidOperand));
        assert_eq!(Fraction::from(2).checked_pow(Fraction::new(6, 2)), Ok(Fraction::from(8)));
        assert!(Fraction::from(10).pow(40).is_nan());
    }

    #[test]
    fn roots() {
        let f = Fraction::new(9, 4).sqrt();
        assert_eq!((f.numerator(), f.denominator()), (3, 2));

        let f = Fraction::new(-8, 27).root(3);
        assert_eq!((f.numerator(), f.denominator()), (-2, 3));

        assert_float_absolute_eq!(Fraction::from(2).sqrt().value(), std::f64::consts::SQRT_2, 1e-12);
        assert!(Fraction::from(-4).sqrt().is_nan());
        assert_eq!(Fraction::new(4, 9).root(-2), Fraction::new(3, 2));
    }

    #[test]
    fn amplify_keeps_value() {
        let f = Fraction::new(1, 3).amplify(4);
        assert_eq!((f.numerator(), f.denominator()), (4, 12));
        assert_eq!(f, Fraction::new(1, 3));
    }

    #[test]
    fn invert() {
        assert_eq!(Fraction::new(-2, 5).invert(), Fraction::new(-5, 2));
        assert!(Fraction::ZERO.invert().is_infinity());
    }
}
