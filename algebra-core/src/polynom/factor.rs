use crate::fraction::Fraction;
use crate::monom::{Bindings, Monom, DEFAULT_LETTER};
use super::Polynom;
use tracing::debug;

/// The default bound of the rational root search done by [`Polynom::factorize`].
pub const DEFAULT_FACTORIZE_BOUND: i64 = 20;

impl Polynom {
    /// Factorizes the polynomial with the [default search bound](DEFAULT_FACTORIZE_BOUND). See
    /// [`Polynom::factorize_with`].
    pub fn factorize(&mut self) -> &mut Self {
        self.factorize_with(DEFAULT_FACTORIZE_BOUND)
    }

    /// Factorizes the polynomial in `x` and stores the factors found, readable with
    /// [`Polynom::factors`].
    ///
    /// This is a bounded search, not a complete algorithm:
    ///
    /// 1. A negative leading coefficient is factored out as `-1`.
    /// 2. The [common monomial](Polynom::common_monom) is factored out. If `-1` was already
    ///    recorded, it is merged into the common monomial instead.
    /// 3. A remainder of degree 0 or 1 is recorded as is.
    /// 4. Otherwise, every linear factor `ax+b` with `1 <= a <= bound` and `|b| <= bound` is tried
    ///    by evaluating the remainder at `-b/a`, and divided out as many times as it is a root. The
    ///    search stops as soon as more factors than the degree were found.
    ///
    /// Whatever is left after the search is recorded as a final factor, so the product of the
    /// factors is always the polynomial. Irreducible factors of degree 2 or more are left as they
    /// are.
    pub fn factorize_with(&mut self, bound: i64) -> &mut Self {
        self.factors.clear();

        let mut rest = self.clone();
        rest.reduce();
        if rest.is_zero() {
            self.factors.push(Polynom::zero());
            return self;
        }

        let mut found = 0;
        if rest.monom_by_degree(None, None).coefficient.is_negative() {
            self.factors.push(Polynom::from(-1));
            rest.opposed();
        }

        let common = rest.common_monom();
        if !common.is_one() {
            let mut common = Polynom::from(common);
            debug!(%common, "common monomial");
            rest = rest.euclidian(&common).quotient;
            found = common.degree(None);
            if !self.factors.is_empty() {
                self.factors.clear();
                common.opposed();
            }
            self.factors.push(common);
        }

        if rest.degree(None) <= 1 {
            if !rest.is_one() || self.factors.is_empty() {
                self.factors.push(rest);
            }
            return self;
        }

        let degree = rest.degree(None);
        'search: for a in 1..=bound {
            for b in -bound..=bound {
                let root = Fraction::new(-b, a);
                let bindings = Bindings::from([(DEFAULT_LETTER, root)]);

                while rest.degree(None) > 0 && rest.evaluate(&bindings).is_zero() {
                    let mut factor = Polynom::from_terms(vec![
                        Monom::new(a, [(DEFAULT_LETTER, 1)]),
                        Monom::from(b),
                    ]);
                    factor.reduce();
                    debug!(%factor, "linear factor");
                    rest = rest.euclidian(&factor).quotient;
                    self.factors.push(factor);
                    found += 1;
                }

                if found > degree {
                    break 'search;
                }
            }
        }

        if !rest.is_one() {
            self.factors.push(rest);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn poly(s: &str) -> Polynom {
        s.parse().unwrap()
    }

    fn factors(s: &str) -> Vec<String> {
        let mut p = poly(s);
        p.factorize();
        let mut out = p.factors().iter().map(Polynom::display).collect::<Vec<_>>();
        out.sort();
        out
    }

    /// Multiplies the factors back together.
    fn product(p: &Polynom) -> Polynom {
        let mut out = Polynom::one();
        for factor in p.factors() {
            out.multiply(factor);
        }
        out
    }

    #[test]
    fn quadratic() {
        assert_eq!(factors("x^2-5x+6"), ["x-2", "x-3"]);
        assert_eq!(factors("x^2-4"), ["x+2", "x-2"]);
        assert_eq!(factors("4x^2-1"), ["2x+1", "2x-1"]);
    }

    #[test]
    fn repeated_root() {
        assert_eq!(factors("x^2-4x+4"), ["x-2", "x-2"]);
    }

    #[test]
    fn negative_leading_coefficient() {
        assert_eq!(factors("-x^2+4"), ["-1", "x+2", "x-2"]);
        assert_eq!(factors("-2x^2+8"), ["-2", "x+2", "x-2"]);
        assert_eq!(factors("-x"), ["-x"]);
    }

    #[test]
    fn common_monomial() {
        assert_eq!(factors("3x^3-3x"), ["3x", "x+1", "x-1"]);
        assert_eq!(factors("2x+4"), ["2", "x+2"]);
    }

    #[test]
    fn irreducible_remainder() {
        assert_eq!(factors("x^2+1"), ["x^2+1"]);
        assert_eq!(factors("x^3-x^2+x-1"), ["x-1", "x^2+1"]);
    }

    #[test]
    fn product_is_preserved() {
        for input in ["x^2-5x+6", "-2x^3+2x", "1/2x^2-2", "6x^3-x^2-x", "x^4-1", "5", "1/2x^3-2x"] {
            let mut p = poly(input);
            p.factorize();
            assert_eq!(product(&p), poly(input), "{}", input);
        }
    }

    #[test]
    fn bound_limits_search() {
        let mut p = poly("x^2-25x+100");
        p.factorize_with(3);
        assert_eq!(p.factors().len(), 1);

        p.factorize_with(20);
        assert_eq!(p.factors().len(), 2);
    }
}
