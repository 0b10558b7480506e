use std::str::FromStr;
use super::{Fraction, RationalError};
use tracing::debug;

/// The largest number of decimals kept when converting a float.
const MAX_DECIMALS: usize = 15;

/// Splits a plain decimal literal (`-12`, `0.75`, `.5`) into its integer digits and the number of
/// digits after the decimal point.
fn parse_decimal(s: &str) -> Option<(i128, u32)> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value: i128 = 0;
    for b in int.bytes().chain(frac.bytes()) {
        value = value.checked_mul(10)?.checked_add((b - b'0') as i128)?;
    }
    let scale = u32::try_from(frac.len()).ok()?;
    Some((if negative { -value } else { value }, scale))
}

/// Parses a single number into an unreduced fraction: `0.75` gives `75/100`.
fn parse_number(s: &str) -> Fraction {
    let Some((digits, scale)) = parse_decimal(s) else {
        return Fraction::NAN;
    };
    let Some(denominator) = 10i128.checked_pow(scale) else {
        return Fraction::NAN;
    };
    match (i64::try_from(digits), i64::try_from(denominator)) {
        (Ok(numerator), Ok(denominator)) => Fraction::new(numerator, denominator),
        _ => Fraction::from_wide(digits, denominator),
    }
}

impl Fraction {
    /// Parses a fraction from text.
    ///
    /// Accepts an integer (`"5"`), a decimal (`"0.75"`, kept exact as `75/100`) or a quotient
    /// (`"3/4"`). The result is not reduced. Malformed input gives [`Fraction::NAN`], in
    /// particular a literal zero denominator (`"3/0"`) and more than one `/`.
    pub fn parse(s: &str) -> Self {
        let parts = s.split('/').collect::<Vec<_>>();
        match parts[..] {
            [value] => parse_number(value),
            [numerator, denominator] => {
                if denominator.trim() == "0" {
                    return Self::NAN;
                }
                let (n, d) = (parse_number(numerator), parse_number(denominator));
                if n.is_nan() || d.is_nan() || d.is_zero() {
                    return Self::NAN;
                }
                if n.denominator() == 1 && d.denominator() == 1 {
                    return Self::new(n.numerator(), d.numerator());
                }
                n / d
            },
            _ => Self::NAN,
        }
    }

    /// Converts a float into the fraction with the same decimal expansion, keeping at most 15
    /// decimals. The result is reduced.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::NAN;
        }
        if value.is_infinite() {
            return if value > 0.0 { Self::INFINITY } else { -Self::INFINITY };
        }

        let mut text = value.to_string();
        if text.split_once('.').is_some_and(|(_, frac)| frac.len() > MAX_DECIMALS) {
            text = format!("{:.*}", MAX_DECIMALS, value);
            text = text.trim_end_matches('0').to_string();
        }
        debug!(value, %text, "converting float to fraction");
        parse_number(&text).reduce()
    }

    /// Converts a decimal with a repeating tail into the exact fraction it denotes, where `period`
    /// is the number of trailing digits that repeat.
    ///
    /// ```
    /// use algebra_core::fraction::Fraction;
    ///
    /// assert_eq!(Fraction::from_periodic("2.333333", 1), Fraction::new(7, 3));
    /// assert_eq!(Fraction::from_periodic("0.121212", 2), Fraction::new(4, 33));
    /// ```
    ///
    /// A period of zero, or one longer than the decimals, gives [`Fraction::parse`] of the value.
    pub fn from_periodic(value: &str, period: u32) -> Self {
        let Some((digits, scale)) = parse_decimal(value) else {
            return Self::NAN;
        };
        if period == 0 || period > scale {
            return parse_number(value).reduce();
        }

        let (Some(full), Some(shift)) = (10i128.checked_pow(scale), 10i128.checked_pow(period)) else {
            return Self::NAN;
        };
        let head = digits / shift;
        Self::from_wide(digits - head, full - full / shift)
    }
}

impl FromStr for Fraction {
    type Err = RationalError;

    /// Parses a fraction like [`Fraction::parse`], rejecting malformed input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).classify()
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
    fn parse_plain() {
        assert_eq!(parts(Fraction::parse("5")), (5, 1));
        assert_eq!(parts(Fraction::parse("-3/4")), (-3, 4));
        assert_eq!(parts(Fraction::parse("6/8")), (6, 8));
        assert_eq!(parts(Fraction::parse("0.75")), (75, 100));
        assert_eq!(parts(Fraction::parse(" 12 ")), (12, 1));
    }

    #[test]
    fn parse_mixed_decimal_quotient() {
        assert_eq!(parts(Fraction::parse("1.5/3")), (1, 2));
    }

    #[test]
    fn parse_invalid() {
        assert!(Fraction::parse("3/0").is_nan());
        assert!(Fraction::parse("1/2/3").is_nan());
        assert!(Fraction::parse("").is_nan());
        assert!(Fraction::parse("abc").is_nan());
        assert!(Fraction::parse("1.2.3").is_nan());
        assert_eq!("3/0".parse::<Fraction>(), Err(RationalError::InvalidOperand));
        assert_eq!("4/6".parse::<Fraction>().map(parts), Ok((4, 6)));
    }

    #[test]
    fn floats() {
        assert_eq!(parts(Fraction::from_f64(0.25)), (1, 4));
        assert_eq!(parts(Fraction::from_f64(-2.5)), (-5, 2));
        assert_eq!(parts(Fraction::from_f64(3.0)), (3, 1));
        assert!(Fraction::from_f64(f64::NAN).is_nan());
        assert!(Fraction::from_f64(f64::NEG_INFINITY).is_negative());
    }

    #[test]
    fn periodic() {
        assert_eq!(parts(Fraction::from_periodic("2.333333", 1)), (7, 3));
        assert_eq!(parts(Fraction::from_periodic("0.121212", 2)), (4, 33));
        assert_eq!(parts(Fraction::from_periodic("0.5", 0)), (1, 2));
        assert_eq!(parts(Fraction::from_periodic("-2.333333", 1)), (-7, 3));
    }
}
