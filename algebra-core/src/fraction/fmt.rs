use std::fmt;
use super::Fraction;

impl Fraction {
    /// The numerator and denominator with the sign moved to the numerator.
    fn signed_parts(&self) -> (i64, i64) {
        if self.denominator() < 0 {
            (self.numerator().saturating_neg(), self.denominator().saturating_neg())
        } else {
            (self.numerator(), self.denominator())
        }
    }

    /// Renders the special values, if the fraction is one.
    fn special(&self, infinity: &str) -> Option<String> {
        if self.is_nan() {
            Some("NaN".to_string())
        } else if self.is_infinity() {
            Some(if self.is_negative() { format!("-{}", infinity) } else { infinity.to_string() })
        } else {
            None
        }
    }

    /// Renders the fraction as plain text, `n` for integers and `n/d` otherwise. The fraction is
    /// rendered as stored, without reducing it.
    pub fn display(&self) -> String {
        if let Some(special) = self.special("inf") {
            return special;
        }
        match self.signed_parts() {
            (n, 1) => n.to_string(),
            (n, d) => format!("{}/{}", n, d),
        }
    }

    /// Renders the fraction as LaTeX, using `\frac{ n }{ d }` with the sign in front.
    pub fn tex(&self) -> String {
        if let Some(special) = self.special("\\infty") {
            return special;
        }
        match self.signed_parts() {
            (n, 1) => n.to_string(),
            (n, d) if n < 0 => format!("-\\frac{{ {} }}{{ {} }}", n.unsigned_abs(), d),
            (n, d) => format!("\\frac{{ {} }}{{ {} }}", n, d),
        }
    }

    /// Renders the fraction as LaTeX in display style, using `\dfrac`.
    pub fn dfrac(&self) -> String {
        self.tex().replacen("\\frac", "\\dfrac", 1)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn plain() {
        assert_eq!(Fraction::new(3, 4).display(), "3/4");
        assert_eq!(Fraction::new(6, 8).display(), "6/8");
        assert_eq!(Fraction::new(1, -2).display(), "-1/2");
        assert_eq!(Fraction::from(-5).to_string(), "-5");
        assert_eq!(Fraction::NAN.display(), "NaN");
        assert_eq!((-Fraction::INFINITY).display(), "-inf");
    }

    #[test]
    fn latex() {
        assert_eq!(Fraction::new(3, 4).tex(), "\\frac{ 3 }{ 4 }");
        assert_eq!(Fraction::new(-3, 4).tex(), "-\\frac{ 3 }{ 4 }");
        assert_eq!(Fraction::new(-3, 4).dfrac(), "-\\dfrac{ 3 }{ 4 }");
        assert_eq!(Fraction::from(7).tex(), "7");
        assert_eq!(Fraction::INFINITY.tex(), "\\infty");
    }
}
