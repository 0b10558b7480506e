//! Algebraic terms.
//!
//! A [`Monom`] is a single term of a polynomial: an exact [`Fraction`] coefficient times a
//! product of single-letter variables raised to positive integer powers, such as `-3/4x^2y`.
//! Exponents of zero are never stored, so two terms have the same literal part exactly when their
//! exponent maps are equal.

mod fmt;
mod parse;

use crate::fraction::Fraction;
use crate::numeric::{gcd_all, lcm_all};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::warn;

/// Values substituted for variables when evaluating a term or polynomial.
pub type Bindings = BTreeMap<char, Fraction>;

/// The letter used when an operation needs a variable and none is given.
pub const DEFAULT_LETTER: char = 'x';

/// A single algebraic term. See the [module-level documentation](self) for more information.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monom {
    /// The coefficient of the term.
    pub coefficient: Fraction,

    /// Maps each variable to its exponent. Exponents are always positive.
    literal: BTreeMap<char, u32>,
}

impl Default for Monom {
    fn default() -> Self {
        Self::one()
    }
}

impl From<Fraction> for Monom {
    fn from(coefficient: Fraction) -> Self {
        Self::constant(coefficient)
    }
}

impl From<i64> for Monom {
    fn from(value: i64) -> Self {
        Self::constant(Fraction::from(value))
    }
}

impl Monom {
    /// Creates a term from a coefficient and its variables. Zero exponents are dropped and
    /// repeated letters are multiplied together.
    pub fn new(coefficient: impl Into<Fraction>, literal: impl IntoIterator<Item = (char, u32)>) -> Self {
        let mut out = Self::constant(coefficient.into());
        for (letter, exponent) in literal {
            out.raise(letter, exponent);
        }
        out
    }

    /// Creates a term with no variables.
    pub fn constant(coefficient: Fraction) -> Self {
        Self { coefficient, literal: BTreeMap::new() }
    }

    /// The zero term.
    pub fn zero() -> Self {
        Self::constant(Fraction::ZERO)
    }

    /// The unit term, `1`.
    pub fn one() -> Self {
        Self::constant(Fraction::ONE)
    }

    /// Multiplies the term by `letter^exponent`.
    ///
    /// An exponent past `u32::MAX` is clamped to it and makes the coefficient [`Fraction::NAN`].
    fn raise(&mut self, letter: char, exponent: u32) {
        if exponent == 0 {
            return;
        }
        let own = self.literal.entry(letter).or_insert(0);
        match own.checked_add(exponent) {
            Some(sum) => *own = sum,
            None => {
                *own = u32::MAX;
                warn!(%letter, exponent, term = %self, "exponent overflows the u32 range");
                self.coefficient = Fraction::NAN;
            },
        }
    }

    /// The degree of the term in the given letter, or its total degree (the sum of all exponents)
    /// if no letter is given.
    pub fn degree(&self, letter: Option<char>) -> u32 {
        match letter {
            Some(letter) => self.literal.get(&letter).copied().unwrap_or(0),
            None => self.literal.values().fold(0, |total, &exponent| total.saturating_add(exponent)),
        }
    }

    /// The variables of the term, in alphabetical order.
    pub fn variables(&self) -> Vec<char> {
        self.literal.keys().copied().collect()
    }

    /// The literal part of the term, mapping each variable to its exponent.
    pub fn literal(&self) -> &BTreeMap<char, u32> {
        &self.literal
    }

    pub fn has_letter(&self, letter: char) -> bool {
        self.literal.contains_key(&letter)
    }

    /// Sets the exponent of a variable. An exponent of zero removes the variable.
    pub fn set_letter(&mut self, letter: char, exponent: u32) -> &mut Self {
        if exponent == 0 {
            self.literal.remove(&letter);
        } else {
            self.literal.insert(letter, exponent);
        }
        self
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Returns true if the term is the constant `1`.
    pub fn is_one(&self) -> bool {
        self.coefficient.is_one() && self.literal.is_empty()
    }

    /// Returns true if both terms have the same literal part, regardless of their coefficients.
    pub fn is_same_as(&self, other: &Self) -> bool {
        self.literal == other.literal
    }

    /// Returns true if both terms have the same literal part and equal coefficients.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_same_as(other) && self.coefficient.is_equal(&other.coefficient)
    }

    /// Adds a like term to this one. Terms with a different literal part cannot be added and are
    /// ignored.
    pub fn add(&mut self, other: &Self) -> &mut Self {
        if self.is_same_as(other) {
            self.coefficient += other.coefficient;
        } else {
            warn!(lhs = %self, rhs = %other, "cannot add terms with different literal parts");
        }
        self
    }

    /// Subtracts a like term from this one. See [`Monom::add`].
    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        let mut other = other.clone();
        other.opposed();
        self.add(&other)
    }

    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        self.coefficient *= other.coefficient;
        for (&letter, &exponent) in &other.literal {
            self.raise(letter, exponent);
        }
        self
    }

    /// Divides this term by another.
    ///
    /// The result is the zero term if the divisor is zero, or if a variable of the divisor has a
    /// higher exponent than in this term (the quotient would not be a term).
    pub fn divide(&mut self, other: &Self) -> &mut Self {
        if other.is_zero() {
            *self = Self::zero();
            return self;
        }

        for (&letter, &exponent) in &other.literal {
            let own = self.degree(Some(letter));
            if own < exponent {
                *self = Self::zero();
                return self;
            }
            self.set_letter(letter, own - exponent);
        }
        self.coefficient /= other.coefficient;
        self
    }

    /// Raises the term to a non-negative integer power.
    ///
    /// An exponent past `u32::MAX` is clamped to it and makes the coefficient [`Fraction::NAN`].
    pub fn pow(&mut self, exponent: u32) -> &mut Self {
        self.coefficient = self.coefficient.pow(exponent as i64);
        let mut overflow = false;
        for value in self.literal.values_mut() {
            *value = value.checked_mul(exponent).unwrap_or_else(|| {
                overflow = true;
                u32::MAX
            });
        }
        self.literal.retain(|_, exponent| *exponent > 0);
        if overflow {
            warn!(exponent, term = %self, "exponent overflows the u32 range");
            self.coefficient = Fraction::NAN;
        }
        self
    }

    pub fn opposed(&mut self) -> &mut Self {
        self.coefficient = -self.coefficient;
        self
    }

    /// Returns the product of two terms, leaving both untouched.
    pub fn xmultiply(a: &Self, b: &Self) -> Self {
        let mut out = a.clone();
        out.multiply(b);
        out
    }

    /// Returns the largest term dividing every given term.
    ///
    /// Its coefficient is the GCD of the numerators over the LCM of the denominators, and each
    /// variable appears with the smallest exponent it has across all terms (variables missing from
    /// any term are dropped). The coefficient is [`Fraction::NAN`] if the LCM does not fit in an
    /// `i64`.
    pub fn lcm(terms: &[Self]) -> Self {
        let Some(first) = terms.first() else {
            return Self::one();
        };

        let coefficients = terms.iter().map(|m| m.coefficient.reduce()).collect::<Vec<_>>();
        let numerator = gcd_all(coefficients.iter().map(Fraction::numerator));
        let coefficient = match lcm_all(coefficients.iter().map(Fraction::denominator)) {
            Some(denominator) => Fraction::new(numerator, denominator).reduce(),
            None => {
                warn!(numerator, "common denominator overflows the i64 range");
                Fraction::NAN
            },
        };

        let mut out = Self::constant(coefficient);
        for &letter in first.literal.keys() {
            let exponent = terms.iter().map(|m| m.degree(Some(letter))).min().unwrap_or(0);
            out.set_letter(letter, exponent);
        }
        out
    }

    /// Evaluates the term with the given variable bindings.
    ///
    /// A variable without a binding makes the result [`Fraction::NAN`].
    pub fn evaluate(&self, bindings: &Bindings) -> Fraction {
        let mut out = self.coefficient;
        for (letter, &exponent) in &self.literal {
            let Some(value) = bindings.get(letter) else {
                warn!(%letter, term = %self, "no value bound to variable");
                return Fraction::NAN;
            };
            out *= value.pow(exponent as i64);
        }
        out
    }

    /// The derivative of the term with respect to the given letter (`x` if none is given).
    pub fn derivative(&self, letter: Option<char>) -> Self {
        let letter = letter.unwrap_or(DEFAULT_LETTER);
        let exponent = self.degree(Some(letter));
        if exponent == 0 {
            return Self::zero();
        }

        let mut out = self.clone();
        out.coefficient *= exponent as i64;
        out.set_letter(letter, exponent - 1);
        out
    }

    /// Generates a random term of the given total degree over the given letters.
    ///
    /// The coefficient is a random integer in `[-10, 10]`, or a fraction with a denominator up to
    /// `10` if `fractions` is set. It is never zero unless `allow_zero` is set. When several
    /// letters are given, the degree is spread randomly among them.
    pub fn random<R: Rng>(
        rng: &mut R,
        letters: &str,
        degree: u32,
        fractions: bool,
        allow_zero: bool,
    ) -> Self {
        let numerator = loop {
            let n = rng.gen_range(-10..=10);
            if n != 0 || allow_zero {
                break n;
            }
        };
        let denominator = if fractions { rng.gen_range(1..=10) } else { 1 };
        let mut out = Self::constant(Fraction::new(numerator, denominator).reduce());

        let letters = letters.chars().filter(char::is_ascii_alphabetic).collect::<Vec<_>>();
        match letters[..] {
            [] => {},
            [letter] => {
                out.set_letter(letter, degree);
            },
            _ => {
                for _ in 0..degree {
                    let letter = letters[rng.gen_range(0..letters.len())];
                    out.raise(letter, 1);
                }
            },
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;

    fn term(s: &str) -> Monom {
        Monom::parse(s)
    }

    #[test]
    fn degrees() {
        let m = term("3x^2y");
        assert_eq!(m.degree(None), 3);
        assert_eq!(m.degree(Some('x')), 2);
        assert_eq!(m.degree(Some('z')), 0);
        assert_eq!(m.variables(), vec!['x', 'y']);
    }

    #[test]
    fn add_like_terms() {
        let mut m = term("3x");
        m.add(&term("-5x"));
        assert_eq!(m, term("-2x"));

        // unlike terms are left alone
        m.add(&term("x^2"));
        assert_eq!(m, term("-2x"));
    }

    #[test]
    fn multiply_and_divide() {
        let mut m = term("2x^2y");
        m.multiply(&term("-3xz"));
        assert_eq!(m, term("-6x^3yz"));

        m.divide(&term("2xy"));
        assert_eq!(m, term("-3x^2z"));

        let mut m = term("4x");
        m.divide(&term("x^2"));
        assert!(m.is_zero());

        let mut m = term("4x");
        m.divide(&Monom::zero());
        assert!(m.is_zero());
    }

    #[test]
    fn lcm_of_terms() {
        let m = Monom::lcm(&[term("6x^2y"), term("4xy^3"), term("10x^3y")]);
        assert_eq!(m, term("2xy"));

        let m = Monom::lcm(&[term("1/2x"), term("3/4x^2")]);
        assert_eq!(m, term("1/4x"));
    }

    #[test]
    fn lcm_with_huge_denominators() {
        let m = Monom::lcm(&[term("1/4000000007x"), term("1/4000000009x")]);
        assert!(m.coefficient.is_nan());
        assert_eq!(m.degree(Some('x')), 1);
    }

    #[test]
    fn exponent_overflow() {
        let m = Monom::new(1, [('x', u32::MAX), ('x', 1)]);
        assert!(m.coefficient.is_nan());
        assert_eq!(m.degree(Some('x')), u32::MAX);

        let mut m = Monom::new(2, [('x', 65536), ('y', 1)]);
        m.pow(65536);
        assert!(m.coefficient.is_nan());
        assert_eq!(m.degree(Some('x')), u32::MAX);
        assert_eq!(m.degree(Some('y')), 65536);
        assert_eq!(m.degree(None), u32::MAX);

        let mut m = Monom::new(1, [('x', 3)]);
        m.multiply(&Monom::new(1, [('x', u32::MAX - 3)]));
        assert_eq!(m.coefficient, Fraction::ONE);
        assert_eq!(m.degree(Some('x')), u32::MAX);
    }

    #[test]
    fn evaluate() {
        let bindings = Bindings::from([('x', Fraction::from(2)), ('y', Fraction::new(1, 2))]);
        assert_eq!(term("3x^2y").evaluate(&bindings), Fraction::from(6));
        assert!(term("z").evaluate(&bindings).is_nan());
    }

    #[test]
    fn derivative() {
        assert_eq!(term("3x^2y").derivative(None), term("6xy"));
        assert_eq!(term("3x^2y").derivative(Some('y')), term("3x^2"));
        assert!(term("5y").derivative(None).is_zero());
    }

    #[test]
    fn power() {
        let mut m = term("-2xy^2");
        m.pow(3);
        assert_eq!(m, term("-8x^3y^6"));

        m.pow(0);
        assert!(m.is_one());
    }

    #[test]
    fn random_term() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let m = Monom::random(&mut rng, "x", 3, false, false);
            assert_eq!(m.degree(Some('x')), 3);
            assert!(!m.is_zero());

            let m = Monom::random(&mut rng, "xy", 4, true, false);
            assert_eq!(m.degree(None), 4);
        }
    }
}
