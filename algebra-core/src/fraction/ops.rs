use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use super::Fraction;

impl Fraction {
    /// The parts of the fraction with the sign carried by the numerator, widened for
    /// intermediate arithmetic.
    fn wide_parts(self) -> (i128, i128) {
        let (n, d) = (self.numerator() as i128, self.denominator() as i128);
        if d < 0 { (-n, -d) } else { (n, d) }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::new(value, 1)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Self::new(value as i64, 1)
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.numerator().checked_neg() {
            Some(numerator) => {
                let mut out = self;
                out.set_numerator(numerator);
                out
            },
            None => Self::from_wide(-(self.numerator() as i128), self.denominator() as i128),
        }
    }
}

impl<T: Into<Fraction>> Add<T> for Fraction {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        let (a, b) = self.wide_parts();
        let (c, d) = rhs.into().wide_parts();
        Self::from_wide(a * d + c * b, b * d)
    }
}

impl<T: Into<Fraction>> Sub<T> for Fraction {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        self + -rhs.into()
    }
}

impl<T: Into<Fraction>> Mul<T> for Fraction {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        let (a, b) = self.wide_parts();
        let (c, d) = rhs.into().wide_parts();
        Self::from_wide(a * c, b * d)
    }
}

/// Dividing by a zero fraction gives [`Fraction::INFINITY`]. Use [`Fraction::checked_div`] to
/// treat it as an error instead.
impl<T: Into<Fraction>> Div<T> for Fraction {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        let rhs = rhs.into();
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        if rhs.is_zero() {
            return Self::INFINITY;
        }

        let (a, b) = self.wide_parts();
        let (c, d) = rhs.wide_parts();
        Self::from_wide(a * d, b * c)
    }
}

impl<T: Into<Fraction>> AddAssign<T> for Fraction {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Into<Fraction>> SubAssign<T> for Fraction {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: Into<Fraction>> MulAssign<T> for Fraction {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Into<Fraction>> DivAssign<T> for Fraction {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, f| acc + f)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, f| acc * f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parts(f: Fraction) -> (i64, i64) {
        (f.numerator(), f.denominator())
    }

    #[test]
    fn arithmetic_reduces() {
        assert_eq!(parts(Fraction::new(1, 2) + Fraction::new(1, 3)), (5, 6));
        assert_eq!(parts(Fraction::new(1, 2) - Fraction::new(1, 2)), (0, 1));
        assert_eq!(parts(Fraction::new(2, 3) * Fraction::new(3, 4)), (1, 2));
        assert_eq!(parts(Fraction::new(2, 3) / Fraction::new(4, -3)), (-1, 2));
        assert_eq!(parts(Fraction::new(1, 4) + 2), (9, 4));
    }

    #[test]
    fn negative_denominators() {
        assert_eq!(parts(Fraction::new(1, -2) + Fraction::new(1, 2)), (0, 1));
        assert_eq!(parts(Fraction::INFINITY + Fraction::new(1, -2)), (1, 0));
    }

    #[test]
    fn special_propagation() {
        assert!((Fraction::INFINITY - Fraction::INFINITY).is_nan());
        assert!((Fraction::INFINITY * 0).is_nan());
        assert!((Fraction::NAN + 1).is_nan());
        assert!((Fraction::from(-3) * Fraction::INFINITY).is_infinity());
        assert!((Fraction::from(-3) * Fraction::INFINITY).is_negative());
        assert!((Fraction::ZERO / Fraction::ZERO).is_infinity());
    }

    #[test]
    fn overflow_is_invalid() {
        assert!((Fraction::from(i64::MAX) + 1).is_nan());
        assert!((Fraction::new(1, i64::MAX) * Fraction::new(1, 2)).is_nan());
    }

    #[test]
    fn assign_and_fold() {
        let mut f = Fraction::new(1, 2);
        f += Fraction::new(1, 4);
        f *= 4;
        f -= 1;
        f /= Fraction::new(1, 2);
        assert_eq!(parts(f), (4, 1));

        let sum: Fraction = (1..=3).map(|n| Fraction::new(1, n)).sum();
        assert_eq!(parts(sum), (11, 6));
        let product: Fraction = (1..=3).map(|n| Fraction::new(n, n + 1)).product();
        assert_eq!(parts(product), (1, 4));
    }
}
