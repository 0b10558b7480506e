use crate::fraction::{Fraction, RationalError};
use std::str::FromStr;
use super::Monom;

impl Monom {
    /// Parses a term literal such as `"-3/4x^2y"`, `"x"`, `"-y^3"` or `"0.5"`.
    ///
    /// The coefficient comes first and defaults to `1` (or `-1` after a lone minus sign); it is
    /// followed by letters, each with an optional `^n` exponent. Repeated letters are multiplied
    /// together. Malformed input gives a term with an invalid coefficient; use [`str::parse`] to
    /// get an error instead.
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| Self::constant(Fraction::NAN))
    }
}

impl FromStr for Monom {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (coefficient, literal) = s.split_at(split);

        let coefficient = match coefficient.trim() {
            "" | "+" => Fraction::ONE,
            "-" => -Fraction::ONE,
            text => text.parse::<Fraction>()?,
        };
        let mut out = Self::constant(coefficient);

        let mut chars = literal.chars().peekable();
        while let Some(letter) = chars.next() {
            if !letter.is_ascii_alphabetic() {
                return Err(RationalError::InvalidOperand);
            }

            let mut exponent = 1;
            if chars.next_if_eq(&'^').is_some() {
                let mut digits = String::new();
                while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                    digits.push(digit);
                }
                exponent = digits.parse::<u32>().map_err(|_| RationalError::InvalidOperand)?;
            }
            out.raise(letter, exponent);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parse_terms() {
        let m = Monom::parse("-3/4x^2y");
        assert_eq!(m.coefficient, Fraction::new(-3, 4));
        assert_eq!(m.variables(), vec!['x', 'y']);
        assert_eq!(m.degree(Some('x')), 2);

        assert_eq!(Monom::parse("x"), Monom::new(1, [('x', 1)]));
        assert_eq!(Monom::parse("-y^3"), Monom::new(-1, [('y', 3)]));
        assert_eq!(Monom::parse("0.5"), Monom::constant(Fraction::new(1, 2)));
        assert_eq!(Monom::parse("2xx"), Monom::new(2, [('x', 2)]));
        assert_eq!(Monom::parse("7x^0"), Monom::from(7));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("3x^".parse::<Monom>(), Err(RationalError::InvalidOperand));
        assert_eq!("3x+".parse::<Monom>(), Err(RationalError::InvalidOperand));
        assert_eq!("3/0x".parse::<Monom>(), Err(RationalError::InvalidOperand));
        assert!(Monom::parse("x$").coefficient.is_nan());
    }
}
