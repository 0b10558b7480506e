use crate::fraction::{Fraction, RationalError};
use crate::monom::Monom;
use super::Polynom;

/// Anything a polynomial can be combined with.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i64),
    Rational(Fraction),
    Term(Monom),
    Polynomial(Polynom),
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<Fraction> for Operand {
    fn from(value: Fraction) -> Self {
        Self::Rational(value)
    }
}

impl From<Monom> for Operand {
    fn from(value: Monom) -> Self {
        Self::Term(value)
    }
}

impl From<&Monom> for Operand {
    fn from(value: &Monom) -> Self {
        Self::Term(value.clone())
    }
}

impl From<Polynom> for Operand {
    fn from(value: Polynom) -> Self {
        Self::Polynomial(value)
    }
}

impl From<&Polynom> for Operand {
    fn from(value: &Polynom) -> Self {
        Self::Polynomial(value.clone())
    }
}

impl Operand {
    /// The terms of the operand.
    fn into_terms(self) -> Vec<Monom> {
        match self {
            Self::Integer(n) => vec![Monom::from(n)],
            Self::Rational(f) => vec![Monom::constant(f)],
            Self::Term(m) => vec![m],
            Self::Polynomial(p) => p.terms,
        }
    }
}

impl Polynom {
    /// Negates every term.
    pub fn opposed(&mut self) -> &mut Self {
        for term in &mut self.terms {
            term.opposed();
        }
        self
    }

    /// Adds a value to the polynomial, then reduces it.
    pub fn add(&mut self, value: impl Into<Operand>) -> &mut Self {
        self.terms.extend(value.into().into_terms());
        self.reduce()
    }

    /// Adds every value to the polynomial, then reduces it.
    pub fn add_many<T: Into<Operand>>(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
        for value in values {
            self.terms.extend(value.into().into_terms());
        }
        self.reduce()
    }

    /// Subtracts a value from the polynomial, then reduces it.
    pub fn subtract(&mut self, value: impl Into<Operand>) -> &mut Self {
        self.subtract_many([value])
    }

    /// Subtracts every value from the polynomial, then reduces it.
    pub fn subtract_many<T: Into<Operand>>(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
        for value in values {
            self.terms.extend(value.into().into_terms().into_iter().map(|mut term| {
                term.opposed();
                term
            }));
        }
        self.reduce()
    }

    /// Multiplies the polynomial by a value, then reduces it.
    ///
    /// Multiplying by another polynomial takes the product of every pair of terms. Multiplying
    /// by a term multiplies each term by it, and multiplying by a number scales the coefficients.
    pub fn multiply(&mut self, value: impl Into<Operand>) -> &mut Self {
        match value.into() {
            Operand::Integer(n) => self.scale(Fraction::from(n)),
            Operand::Rational(f) => self.scale(f),
            Operand::Term(m) => {
                for term in &mut self.terms {
                    term.multiply(&m);
                }
            },
            Operand::Polynomial(p) => {
                self.terms = self.terms
                    .iter()
                    .flat_map(|a| p.terms.iter().map(move |b| Monom::xmultiply(a, b)))
                    .collect();
            },
        }
        self.reduce()
    }

    fn scale(&mut self, factor: Fraction) {
        for term in &mut self.terms {
            term.coefficient *= factor;
        }
    }

    /// Divides every coefficient by a number.
    ///
    /// Only numbers are accepted: dividing by a term or a polynomial returns
    /// [`RationalError::InvalidOperand`] (use [`Polynom::euclidian`] for polynomial division), and
    /// dividing by zero returns [`RationalError::DivisionByZero`]. The polynomial is left untouched
    /// on error.
    pub fn divide(&mut self, value: impl Into<Operand>) -> Result<&mut Self, RationalError> {
        let divisor = match value.into() {
            Operand::Integer(n) => Fraction::from(n),
            Operand::Rational(f) => f.classify()?,
            Operand::Term(_) | Operand::Polynomial(_) => return Err(RationalError::InvalidOperand),
        };
        if divisor.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        for term in &mut self.terms {
            term.coefficient /= divisor;
        }
        Ok(self)
    }

    /// Raises the polynomial to an integer power.
    ///
    /// A power of zero gives the unit polynomial, and a negative power collapses the polynomial to
    /// zero.
    pub fn pow(&mut self, exponent: i64) -> &mut Self {
        if exponent < 0 {
            self.terms = vec![Monom::zero()];
            return self;
        }
        if exponent == 0 {
            self.terms = vec![Monom::one()];
            return self;
        }

        let base = self.clone();
        for _ in 1..exponent {
            self.multiply(&base);
        }
        self.reduce()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn poly(s: &str) -> Polynom {
        s.parse().unwrap()
    }

    #[test]
    fn add_mixed_operands() {
        let mut p = poly("x^2");
        p.add(3).add(Monom::parse("2x")).add(Fraction::new(1, 2));
        assert_eq!(p.display(), "x^2+7/2+2x");

        let mut p = poly("x");
        p.add_many([poly("y"), poly("-x")]);
        assert_eq!(p.display(), "y");
    }

    #[test]
    fn subtract_mixed_operands() {
        let mut p = poly("x^2+x");
        p.subtract(&poly("x")).subtract(1);
        assert_eq!(p.display(), "x^2-1");

        let mut p = poly("5x");
        p.subtract_many([Monom::parse("x"), Monom::parse("4x")]);
        assert!(p.is_zero());
    }

    #[test]
    fn multiply_by_kind() {
        let mut p = poly("x+1");
        p.multiply(&poly("x-1"));
        assert_eq!(p, poly("x^2-1"));

        p.multiply(Fraction::new(1, 2));
        assert_eq!(p, poly("1/2x^2-1/2"));

        p.multiply(Monom::parse("2y"));
        assert_eq!(p, poly("x^2y-y"));

        p.multiply(0);
        assert!(p.is_zero());
    }

    #[test]
    fn divide_by_scalar() {
        let mut p = poly("4x^2+2");
        p.divide(4).unwrap();
        assert_eq!(p, poly("x^2+1/2"));

        assert_eq!(p.divide(0).err(), Some(RationalError::DivisionByZero));
        assert_eq!(p.divide(&poly("x")).err(), Some(RationalError::InvalidOperand));
        assert_eq!(p, poly("x^2+1/2"));
    }

    #[test]
    fn powers() {
        let mut p = poly("x+1");
        p.pow(3);
        assert_eq!(p, poly("x^3+3x^2+3x+1"));

        let mut p = poly("x+1");
        p.pow(0);
        assert!(p.is_one());

        let mut p = poly("x+1");
        p.pow(-2);
        assert!(p.is_zero());
    }
}
