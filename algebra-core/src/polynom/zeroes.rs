use crate::fraction::Fraction;
use super::Polynom;
use tracing::warn;

/// A solution of `P = 0`, as found by [`Polynom::get_zeroes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zero {
    /// Every value is a solution: the polynomial is the zero polynomial.
    Everywhere,

    /// No value is a solution: the polynomial is a non-zero constant.
    Nowhere,

    /// The polynomial is zero at this value.
    At(Fraction),
}

impl Polynom {
    /// Finds the zeroes of the polynomial.
    ///
    /// - A constant gives [`Zero::Everywhere`] if it is zero and [`Zero::Nowhere`] otherwise.
    /// - A polynomial of degree 1 gives its single root exactly.
    /// - Higher degrees are [factorized](Polynom::factorize) first, unless factors are already
    ///   known. Linear factors give exact roots, listed once each. Quadratic factors are solved
    ///   with the discriminant in floating point, and their roots are rounded to three decimals.
    ///   Factors of degree 3 or more are skipped.
    pub fn get_zeroes(&mut self) -> Vec<Zero> {
        let mut reduced = self.clone();
        reduced.reduce().reorder(None);

        match reduced.degree(None) {
            0 if reduced.is_zero() => vec![Zero::Everywhere],
            0 => vec![Zero::Nowhere],
            1 => match reduced.terms.as_slice() {
                [_] => vec![Zero::At(Fraction::ZERO)],
                [a, b, ..] => vec![Zero::At((-b.coefficient / a.coefficient).reduce())],
                [] => vec![Zero::Everywhere],
            },
            _ => {
                if self.factors.is_empty() {
                    self.factorize();
                }
                let mut zeroes = Vec::new();
                for factor in self.factors.clone() {
                    zeroes.extend(factor.factor_zeroes());
                }
                dedup_by_tex(zeroes)
            },
        }
    }

    /// The zeroes contributed by one factor of a factorized polynomial.
    fn factor_zeroes(mut self) -> Vec<Zero> {
        match self.degree(None) {
            0 | 1 => self.get_zeroes()
                .into_iter()
                .filter(|zero| matches!(zero, Zero::At(_)))
                .collect(),
            2 => {
                let a = self.monom_by_degree(Some(2), None).coefficient;
                let b = self.monom_by_degree(Some(1), None).coefficient;
                let c = self.monom_by_degree(Some(0), None).coefficient;
                let delta = b * b - a * c * 4;

                if delta.is_nan() {
                    warn!(factor = %self, "discriminant overflows the i64 range");
                    Vec::new()
                } else if delta.is_zero() {
                    vec![Zero::At((-b / (a * 2)).reduce())]
                } else if delta.is_positive() {
                    let sqrt = delta.value().sqrt();
                    let (a, b) = (a.value(), b.value());
                    [(-b + sqrt) / (2.0 * a), (-b - sqrt) / (2.0 * a)]
                        .into_iter()
                        .map(|root| Zero::At(Fraction::parse(&format!("{:.3}", root)).reduce()))
                        .collect()
                } else {
                    warn!(factor = %self, "no real zero");
                    Vec::new()
                }
            },
            degree => {
                warn!(factor = %self, degree, "zeroes of factors of degree 3 or more are not searched");
                Vec::new()
            },
        }
    }
}

/// Removes zeroes that render to the same LaTeX as an earlier one.
fn dedup_by_tex(zeroes: Vec<Zero>) -> Vec<Zero> {
    let mut seen = Vec::new();
    zeroes
        .into_iter()
        .filter(|zero| match zero {
            Zero::At(value) => {
                let tex = value.tex();
                if seen.contains(&tex) {
                    false
                } else {
                    seen.push(tex);
                    true
                }
            },
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn zeroes(s: &str) -> Vec<Zero> {
        s.parse::<Polynom>().unwrap().get_zeroes()
    }

    fn sorted_values(s: &str) -> Vec<Fraction> {
        let mut values = zeroes(s)
            .into_iter()
            .filter_map(|zero| match zero {
                Zero::At(value) => Some(value),
                _ => None,
            })
            .collect::<Vec<_>>();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        values
    }

    #[test]
    fn constants() {
        assert_eq!(zeroes("0"), vec![Zero::Everywhere]);
        assert_eq!(zeroes("5"), vec![Zero::Nowhere]);
    }

    #[test]
    fn linear() {
        assert_eq!(zeroes("2x-4"), vec![Zero::At(Fraction::from(2))]);
        assert_eq!(zeroes("3x"), vec![Zero::At(Fraction::ZERO)]);
        assert_eq!(zeroes("-4+6x"), vec![Zero::At(Fraction::new(2, 3))]);
    }

    #[test]
    fn factorable() {
        assert_eq!(sorted_values("x^2-4"), [Fraction::from(-2), Fraction::from(2)]);
        assert_eq!(sorted_values("x^3-x"), [Fraction::from(-1), Fraction::ZERO, Fraction::from(1)]);
        assert_eq!(sorted_values("x^2-4x+4"), [Fraction::from(2)]);
        assert_eq!(sorted_values("-x^2+4"), [Fraction::from(-2), Fraction::from(2)]);
    }

    #[test]
    fn quadratic_factor() {
        // x^2-2 has no rational root, so it is solved numerically
        assert_eq!(sorted_values("x^2-2"), [Fraction::new(-1414, 1000), Fraction::new(1414, 1000)]);
        assert!(zeroes("x^2+1").is_empty());
    }

    #[test]
    fn overflowing_discriminant() {
        // b^2 does not fit in an i64
        let factor: Polynom = "x^2+4000000000x+1".parse().unwrap();
        assert!(factor.factor_zeroes().is_empty());
    }

    #[test]
    fn higher_degree_factor_is_skipped() {
        assert!(zeroes("x^3+x+1").is_empty());
        assert_eq!(sorted_values("x^4+x^2-2x^3-2x"), [Fraction::ZERO, Fraction::from(2)]);
    }
}
