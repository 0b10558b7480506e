//! Polynomials over the rationals.
//!
//! A [`Polynom`] is an ordered list of [`Monom`] terms. The list is **not** kept in canonical
//! form after every operation: intermediate results may hold several terms with the same literal
//! part, or terms with a zero coefficient, until [`Polynom::reduce`] runs. After a reduction, the
//! polynomial holds at most one term per literal part, no zero terms and reduced coefficients; the
//! zero polynomial is a single zero term.
//!
//! # Mutation
//!
//! Arithmetic and canonicalization methods such as [`Polynom::add`], [`Polynom::multiply`] or
//! [`Polynom::reorder`] mutate the polynomial **in place** and return `&mut Self` so that calls
//! can be chained. Methods that produce a new value ([`Polynom::euclidian`],
//! [`Polynom::derivative`], [`Polynom::evaluate`]) take `&self`. Clone a polynomial before
//! mutating it if the original is still needed:
//!
//! ```
//! use algebra_core::polynom::Polynom;
//!
//! let p: Polynom = "x+x+1".parse().unwrap();
//! assert_eq!(p.display(), "2x+1");
//!
//! let mut q = p.clone();
//! q.multiply(&p).subtract(1);
//! assert_eq!(q.display(), "4x^2+4x");
//! assert_eq!(p.display(), "2x+1");
//! ```
//!
//! # Parsing
//!
//! [`Polynom::parse`] runs the expression through the `algebra_parser` reducer and evaluates the
//! resulting postfix stream on a stack of partial polynomials. Errors are returned as
//! [`algebra_error::Error`]s that can be rendered against the input with `ariadne`.

mod arith;
pub mod error;
mod euclid;
mod factor;
mod fmt;
mod parse;
mod random;
mod zeroes;

use crate::fraction::Fraction;
use crate::monom::{Bindings, Monom, DEFAULT_LETTER};
use crate::numeric::{gcd_all, lcm_all};
use std::collections::BTreeSet;
use tracing::warn;

pub use arith::Operand;
pub use euclid::EuclideanDivision;
pub use factor::DEFAULT_FACTORIZE_BOUND;
pub use fmt::{DisplayOptions, DisplayOptionsBuilder, Format, PolynomFormatter};
pub use random::{RandomOptions, RandomOptionsBuilder};
pub use zeroes::Zero;

/// How [`Polynom::compare`] matches the terms of two polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    /// The terms must be equal, coefficient and literal part.
    Equal,

    /// The terms must have the same literal parts; coefficients are ignored.
    Same,
}

/// A polynomial. See the [module-level documentation](self) for more information.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynom {
    /// The terms of the polynomial, in insertion order.
    terms: Vec<Monom>,

    /// The source the polynomial was parsed from, if any.
    raw: String,

    /// The factors found by the last call to [`Polynom::factorize`].
    factors: Vec<Polynom>,

    /// The LaTeX built by [`Polynom::factorize_partial`] or [`Polynom::make_it_complicate`].
    tex_string: String,
}

impl Default for Polynom {
    /// The default polynomial is the zero polynomial.
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Polynom {
    /// Two polynomials are equal if they have the same canonical form.
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl From<Monom> for Polynom {
    fn from(term: Monom) -> Self {
        Self::from_terms(vec![term])
    }
}

impl From<Fraction> for Polynom {
    fn from(value: Fraction) -> Self {
        Self::from(Monom::constant(value))
    }
}

impl From<i64> for Polynom {
    fn from(value: i64) -> Self {
        Self::from(Fraction::from(value))
    }
}

impl Polynom {
    /// Creates a polynomial from a list of terms, without reducing it.
    pub fn from_terms(terms: Vec<Monom>) -> Self {
        Self {
            terms,
            raw: String::new(),
            factors: Vec::new(),
            tex_string: String::new(),
        }
    }

    /// The zero polynomial, holding a single zero term.
    pub fn zero() -> Self {
        let mut out = Self::from_terms(vec![Monom::zero()]);
        out.raw = "0".to_string();
        out
    }

    /// The unit polynomial, `1`.
    pub fn one() -> Self {
        let mut out = Self::from_terms(vec![Monom::one()]);
        out.raw = "1".to_string();
        out
    }

    /// A polynomial with no terms at all.
    pub fn empty() -> Self {
        Self::from_terms(Vec::new())
    }

    /// Builds a polynomial from explicit coefficients.
    ///
    /// With several letters, each value becomes the coefficient of the corresponding bare letter:
    /// `from_values("xyz", [1, 2, 3])` is `x+2y+3z` (extra values are constants). With a single
    /// letter, the values are the coefficients of descending powers of that letter:
    /// `from_values("x", [2, 0, -1])` is `2x^2-1`. Letters that are not ASCII letters give the zero
    /// polynomial.
    pub fn from_values<T: Into<Fraction>>(letters: &str, values: impl IntoIterator<Item = T>) -> Self {
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Self::zero();
        }

        let values = values.into_iter().map(Into::into).collect::<Vec<Fraction>>();
        let mut out = Self::empty();
        let letters = letters.chars().collect::<Vec<_>>();
        if let [letter] = letters[..] {
            let top = values.len().saturating_sub(1);
            for (i, value) in values.into_iter().enumerate() {
                out.terms.push(Monom::new(value, [(letter, (top - i) as u32)]));
            }
        } else {
            for (i, value) in values.into_iter().enumerate() {
                let literal = letters.get(i).map(|&letter| (letter, 1));
                out.terms.push(Monom::new(value, literal));
            }
        }
        out.reduce();
        out
    }

    /// The terms of the polynomial, in their current order.
    pub fn terms(&self) -> &[Monom] {
        &self.terms
    }

    /// Mutable access to the terms. The polynomial is not reduced afterwards.
    pub fn terms_mut(&mut self) -> &mut Vec<Monom> {
        &mut self.terms
    }

    /// The number of terms, including duplicates and zero terms if the polynomial is not reduced.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the polynomial has no terms at all. The zero polynomial is not empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The source the polynomial was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The factors found by the last call to [`Polynom::factorize`].
    pub fn factors(&self) -> &[Polynom] {
        &self.factors
    }

    /// The LaTeX built by [`Polynom::factorize_partial`] or [`Polynom::make_it_complicate`].
    pub fn tex_string(&self) -> &str {
        &self.tex_string
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty() || (self.terms.len() == 1 && self.terms[0].is_zero())
    }

    /// Returns true if the polynomial is the constant `1`.
    pub fn is_one(&self) -> bool {
        self.terms.len() == 1 && self.terms[0].is_one()
    }

    /// Returns true if any term has more than one variable.
    pub fn is_multi_variable(&self) -> bool {
        self.terms.iter().any(|m| m.variables().len() > 1)
    }

    /// The variables used by the polynomial, in alphabetical order.
    pub fn variables(&self) -> Vec<char> {
        self.terms
            .iter()
            .flat_map(|m| m.literal().keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Same as [`Polynom::variables`].
    pub fn letters(&self) -> Vec<char> {
        self.variables()
    }

    pub fn number_of_vars(&self) -> usize {
        self.variables().len()
    }

    /// The highest degree of the terms in the given letter, or the highest total degree if no
    /// letter is given.
    pub fn degree(&self, letter: Option<char>) -> u32 {
        self.terms.iter().map(|m| m.degree(letter)).max().unwrap_or(0)
    }

    /// Returns the first term of the reduced polynomial with the given degree, or the zero term if
    /// there is none. If no degree is given, the term with the highest degree is returned.
    pub fn monom_by_degree(&self, degree: Option<u32>, letter: Option<char>) -> Monom {
        let degree = degree.unwrap_or_else(|| self.degree(letter));
        let mut reduced = self.clone();
        reduced.reduce();
        reduced.terms
            .into_iter()
            .find(|m| m.degree(letter) == degree)
            .unwrap_or_else(Monom::zero)
    }

    /// Returns the first term of the reduced polynomial containing the given letter, or the zero
    /// term if there is none.
    pub fn monom_by_letter(&self, letter: char) -> Monom {
        let mut reduced = self.clone();
        reduced.reduce();
        reduced.terms
            .into_iter()
            .find(|m| m.has_letter(letter))
            .unwrap_or_else(Monom::zero)
    }

    /// The numerators of the coefficients, as stored.
    pub fn numerators(&self) -> Vec<i64> {
        self.terms.iter().map(|m| m.coefficient.numerator()).collect()
    }

    /// The denominators of the coefficients, as stored.
    pub fn denominators(&self) -> Vec<i64> {
        self.terms.iter().map(|m| m.coefficient.denominator()).collect()
    }

    pub fn gcd_numerator(&self) -> i64 {
        gcd_all(self.numerators())
    }

    pub fn gcd_denominator(&self) -> i64 {
        gcd_all(self.denominators())
    }

    /// The LCM of the numerators, or `None` if it does not fit in an `i64`.
    pub fn lcm_numerator(&self) -> Option<i64> {
        lcm_all(self.numerators())
    }

    /// The LCM of the denominators, or `None` if it does not fit in an `i64`.
    pub fn lcm_denominator(&self) -> Option<i64> {
        lcm_all(self.denominators())
    }

    /// The greatest term dividing every term of the polynomial: the GCD of the numerators over the
    /// GCD of the denominators, with each variable at the smallest exponent found across all
    /// terms.
    pub fn common_monom(&self) -> Monom {
        let coefficient = Fraction::new(self.gcd_numerator(), self.gcd_denominator());
        let mut out = Monom::constant(coefficient);
        for letter in self.variables() {
            let exponent = self.terms.iter().map(|m| m.degree(Some(letter))).min().unwrap_or(0);
            out.set_letter(letter, exponent);
        }
        out
    }

    /// Brings the polynomial to canonical form: like terms are merged, zero terms are removed and
    /// every coefficient is reduced. A polynomial left without terms becomes the zero polynomial.
    ///
    /// The order of the remaining terms is preserved; merged terms take the position of their
    /// first occurrence.
    pub fn reduce(&mut self) -> &mut Self {
        let mut merged: Vec<Monom> = Vec::with_capacity(self.terms.len());
        for term in self.terms.drain(..) {
            match merged.iter_mut().find(|m| m.is_same_as(&term)) {
                Some(existing) => {
                    existing.add(&term);
                },
                None => merged.push(term),
            }
        }

        merged.retain(|m| !m.is_zero());
        for m in &mut merged {
            m.coefficient = m.coefficient.reduce();
        }

        if merged.is_empty() {
            merged.push(Monom::zero());
        }
        self.terms = merged;
        self
    }

    /// Sorts the terms by descending degree in the given letter (`x` if none is given), then
    /// reduces the polynomial.
    ///
    /// Only the given letter is really ordered: ties are broken by descending total degree, then by
    /// literal part, which makes the order deterministic but not meaningful for other letters.
    pub fn reorder(&mut self, letter: Option<char>) -> &mut Self {
        let letter = Some(letter.unwrap_or(DEFAULT_LETTER));
        self.terms.sort_by(|a, b| {
            b.degree(letter).cmp(&a.degree(letter))
                .then_with(|| b.degree(None).cmp(&a.degree(None)))
                .then_with(|| a.literal().cmp(b.literal()))
        });
        self.reduce()
    }

    /// Compares two polynomials after reducing and reordering copies of both.
    ///
    /// Both must have the same number of terms and the same degree, and their terms must match
    /// pairwise according to `mode`.
    pub fn compare(&self, other: &Self, mode: CompareMode) -> bool {
        let mut lhs = self.clone();
        lhs.reduce().reorder(None);
        let mut rhs = other.clone();
        rhs.reduce().reorder(None);

        if lhs.len() != rhs.len() || lhs.degree(None) != rhs.degree(None) {
            return false;
        }

        lhs.terms.iter().zip(&rhs.terms).all(|(a, b)| match mode {
            CompareMode::Equal => a.is_equal(b),
            CompareMode::Same => a.is_same_as(b),
        })
    }

    pub fn is_equal(&self, other: &Self) -> bool {
        self.compare(other, CompareMode::Equal)
    }

    pub fn is_same_as(&self, other: &Self) -> bool {
        self.compare(other, CompareMode::Same)
    }

    /// Returns true if `other` is the opposite of this polynomial.
    pub fn is_opposed_at(&self, other: &Self) -> bool {
        let mut opposed = other.clone();
        opposed.opposed();
        self.is_equal(&opposed)
    }

    /// Evaluates the polynomial with the given variable bindings. The result is exact.
    pub fn evaluate(&self, bindings: &Bindings) -> Fraction {
        self.terms.iter().map(|m| m.evaluate(bindings)).sum()
    }

    /// The derivative of the polynomial with respect to the given letter (`x` if none is given).
    pub fn derivative(&self, letter: Option<char>) -> Self {
        let mut out = Self::from_terms(self.terms.iter().map(|m| m.derivative(letter)).collect());
        out.reduce();
        out
    }

    /// Substitutes the given polynomial for every occurrence of `letter`.
    pub fn replace_by(&mut self, letter: char, value: &Self) -> &mut Self {
        let mut out = Self::zero();
        for term in &self.terms {
            let exponent = term.degree(Some(letter));
            if exponent == 0 {
                out.add(term.clone());
                continue;
            }

            let mut rest = term.clone();
            rest.set_letter(letter, 0);
            let mut replaced = value.clone();
            replaced.pow(exponent as i64).multiply(rest);
            out.add(replaced);
        }

        out.reorder(None);
        self.terms = out.terms;
        self
    }

    /// Scales the polynomial so that its coefficients are integers with no common factor, as if
    /// it was one side of an equation equal to zero.
    ///
    /// The polynomial is only reduced if its common denominator does not fit in an `i64`.
    pub fn minify(&mut self) -> &mut Self {
        self.reduce();
        let Some(lcm) = self.lcm_denominator() else {
            warn!(polynom = %self, "common denominator overflows the i64 range");
            return self;
        };
        self.multiply(lcm);

        let gcd = self.gcd_numerator();
        if gcd > 1 {
            self.multiply(Fraction::new(1, gcd));
        }
        self.reduce()
    }

    /// Returns true if `divisor` divides this polynomial without remainder.
    ///
    /// Only divisors of degree 0 and 1 in the given letter (`x` if none is given) are supported:
    /// a constant divides unless it is zero, and a linear divisor divides if its zero is a zero of
    /// this polynomial.
    pub fn can_divide(&self, divisor: &Self, letter: Option<char>) -> bool {
        let letter = letter.unwrap_or(DEFAULT_LETTER);
        match divisor.degree(None) {
            0 => !divisor.is_zero(),
            1 => {
                let mut divisor = divisor.clone();
                match divisor.get_zeroes().first() {
                    Some(Zero::At(zero)) => {
                        let bindings = Bindings::from([(letter, *zero)]);
                        self.evaluate(&bindings).is_zero()
                    },
                    _ => false,
                }
            },
            degree => {
                warn!(degree, "only divisors of degree 0 and 1 can be tested");
                false
            },
        }
    }
}
