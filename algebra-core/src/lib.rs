//! Exact algebra over the rationals, for building and checking algebra exercises.
//!
//! - [`fraction`] holds [`Fraction`](fraction::Fraction), an exact rational number that also
//!   carries the infinite and invalid (NaN) states instead of panicking.
//! - [`monom`] holds [`Monom`](monom::Monom), a single term such as `-3/4x^2y`.
//! - [`polynom`] holds [`Polynom`](polynom::Polynom), a sum of terms, with arithmetic, Euclidean
//!   division, a bounded rational-root factorization, zero-finding, and plain / LaTeX rendering.
//!
//! Polynomials are usually read from text. The expression is reduced to postfix form by
//! [`algebra_parser`] and evaluated term by term:
//!
//! ```
//! use algebra_core::polynom::{Polynom, Zero};
//! use algebra_core::fraction::Fraction;
//!
//! let mut p: Polynom = "(x-2)(x+3)".parse().unwrap();
//! assert_eq!(p.display(), "x^2+x-6");
//!
//! p.factorize();
//! assert_eq!(p.factors().len(), 2);
//!
//! let mut zeroes = p.get_zeroes();
//! zeroes.sort_by(|a, b| match (a, b) {
//!     (Zero::At(a), Zero::At(b)) => a.partial_cmp(b).unwrap(),
//!     _ => std::cmp::Ordering::Equal,
//! });
//! assert_eq!(zeroes, [Zero::At(Fraction::from(-3)), Zero::At(Fraction::from(2))]);
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`Fraction`](fraction::Fraction),
//!   [`Monom`](monom::Monom) and [`Polynom`](polynom::Polynom).

pub mod fraction;
pub mod monom;
pub mod numeric;
pub mod polynom;

#[cfg(test)]
mod proptests;
