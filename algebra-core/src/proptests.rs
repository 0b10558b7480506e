//! Property-based tests for the rational and polynomial engines.

use proptest::prelude::*;

use crate::fraction::Fraction;
use crate::monom::{Bindings, Monom, DEFAULT_LETTER};
use crate::polynom::Polynom;

// Small ranges keep every intermediate product well inside `i64`
fn fraction() -> impl Strategy<Value = Fraction> {
    (-100i64..=100, 1i64..=50).prop_map(|(n, d)| Fraction::new(n, d))
}

fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
    (prop_oneof![(-100i64..=-1), (1i64..=100)], 1i64..=50).prop_map(|(n, d)| Fraction::new(n, d))
}

/// Polynomials in `x` of degree at most 4 with integer coefficients, left unreduced.
fn int_polynom() -> impl Strategy<Value = Polynom> {
    prop::collection::vec((-9i64..=9, 0u32..=4), 1..=5).prop_map(|terms| {
        Polynom::from_terms(
            terms
                .into_iter()
                .map(|(c, e)| Monom::new(c, [(DEFAULT_LETTER, e)]))
                .collect(),
        )
    })
}

/// Like [`int_polynom`], with small fractional coefficients.
fn polynom() -> impl Strategy<Value = Polynom> {
    prop::collection::vec((-9i64..=9, 1i64..=4, 0u32..=4), 1..=5).prop_map(|terms| {
        Polynom::from_terms(
            terms
                .into_iter()
                .map(|(n, d, e)| Monom::new(Fraction::new(n, d), [(DEFAULT_LETTER, e)]))
                .collect(),
        )
    })
}

/// Reduced, non-zero polynomials.
fn non_zero_polynom() -> impl Strategy<Value = Polynom> {
    polynom()
        .prop_map(|mut p| {
            p.reduce();
            p
        })
        .prop_filter("non-zero", |p| !p.is_zero())
}

fn at(value: Fraction) -> Bindings {
    Bindings::from([(DEFAULT_LETTER, value)])
}

proptest! {
    // Fraction

    #[test]
    fn reduce_is_canonical(n in -10_000i64..10_000, d in prop_oneof![(-500i64..=-1), (1i64..=500)]) {
        let f = Fraction::new(n, d).reduce();
        prop_assert!(f.denominator() > 0);
        prop_assert_eq!(crate::numeric::gcd(f.numerator(), f.denominator()), 1);
        prop_assert_eq!(f, Fraction::new(n, d));
    }

    #[test]
    fn add_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn add_associative(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn mul_commutative(a in fraction(), b in fraction()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn mul_associative(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn distributive(a in fraction(), b in fraction(), c in fraction()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn sub_is_add_opposed(a in fraction(), b in fraction()) {
        prop_assert_eq!(a - b, a + b.opposed());
        prop_assert!((a - a).is_zero());
    }

    #[test]
    fn div_then_mul(a in fraction(), b in non_zero_fraction()) {
        prop_assert_eq!((a / b) * b, a);
        prop_assert!((b * b.invert()).is_one());
    }

    #[test]
    fn arithmetic_results_are_reduced(a in fraction(), b in non_zero_fraction()) {
        for f in [a + b, a - b, a * b, a / b] {
            prop_assert!(f.denominator() > 0);
            prop_assert_eq!(crate::numeric::gcd(f.numerator(), f.denominator()), 1);
        }
    }

    #[test]
    fn comparison_matches_value(a in fraction(), b in fraction()) {
        prop_assert_eq!(a.lesser(&b), a.value() < b.value());
        prop_assert_eq!(a.is_equal(&b), a.value() == b.value());
    }

    // Polynom

    #[test]
    fn reduce_is_idempotent(p in polynom()) {
        let before = p.len();
        let mut once = p.clone();
        once.reduce();
        prop_assert!(once.len() <= before);

        let mut twice = once.clone();
        twice.reduce();
        prop_assert_eq!(twice.terms(), once.terms());
    }

    #[test]
    fn reduced_terms_are_distinct(p in polynom()) {
        let mut p = p;
        p.reduce();
        let terms = p.terms();
        for (i, a) in terms.iter().enumerate() {
            for b in &terms[i + 1..] {
                prop_assert!(!a.is_same_as(b));
            }
        }
    }

    #[test]
    fn evaluation_is_a_homomorphism(p in polynom(), q in polynom(), v in fraction()) {
        let bindings = at(v);

        let mut sum = p.clone();
        sum.add(&q);
        prop_assert_eq!(sum.evaluate(&bindings), p.evaluate(&bindings) + q.evaluate(&bindings));

        let mut product = p.clone();
        product.multiply(&q);
        prop_assert_eq!(product.evaluate(&bindings), p.evaluate(&bindings) * q.evaluate(&bindings));
    }

    #[test]
    fn degree_is_additive(p in non_zero_polynom(), q in non_zero_polynom()) {
        let mut product = p.clone();
        product.multiply(&q);
        prop_assert_eq!(product.degree(None), p.degree(None) + q.degree(None));
    }

    #[test]
    fn euclidean_identity(p in polynom(), d in non_zero_polynom()) {
        let division = p.euclidian(&d);
        let r = &division.remainder;
        prop_assert!(r.is_zero() || r.degree(None) < d.degree(None));

        let mut rebuilt = d.clone();
        rebuilt.multiply(&division.quotient).add(r);
        prop_assert_eq!(rebuilt, p);
    }

    #[test]
    fn factors_multiply_back(p in int_polynom()) {
        let mut factored = p.clone();
        factored.factorize();

        let mut product = Polynom::one();
        for factor in factored.factors() {
            product.multiply(factor);
        }
        prop_assert_eq!(product, p);
    }

    #[test]
    fn display_parses_back(p in polynom()) {
        let text = p.display();
        let parsed: Polynom = text.parse().map_err(|_| TestCaseError::fail(text.clone()))?;
        prop_assert_eq!(parsed, p);
    }
}
