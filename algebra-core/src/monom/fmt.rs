use std::fmt;
use super::Monom;

impl Monom {
    /// Renders the coefficient in front of the literal part, hiding a unit coefficient.
    fn render(&self, coefficient: String, letter: impl Fn(char, u32) -> String) -> String {
        let literal = self.literal
            .iter()
            .map(|(&l, &exponent)| letter(l, exponent))
            .collect::<String>();

        if literal.is_empty() || self.is_zero() {
            return coefficient;
        }
        match coefficient.as_str() {
            "1" => literal,
            "-1" => format!("-{}", literal),
            _ => format!("{}{}", coefficient, literal),
        }
    }

    /// Renders the term as plain text, such as `-3/4x^2y`.
    pub fn display(&self) -> String {
        self.render(self.coefficient.display(), |letter, exponent| match exponent {
            1 => letter.to_string(),
            _ => format!("{}^{}", letter, exponent),
        })
    }

    /// Renders the term as LaTeX, such as `-\frac{ 3 }{ 4 }x^{2}y`.
    pub fn tex(&self) -> String {
        self.render(self.coefficient.tex(), |letter, exponent| match exponent {
            1 => letter.to_string(),
            _ => format!("{}^{{{}}}", letter, exponent),
        })
    }
}

impl fmt::Display for Monom {
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
        assert_eq!(Monom::parse("-3/4x^2y").display(), "-3/4x^2y");
        assert_eq!(Monom::parse("x").display(), "x");
        assert_eq!(Monom::parse("-x^3").display(), "-x^3");
        assert_eq!(Monom::parse("5").display(), "5");
        assert_eq!(Monom::parse("0x").display(), "0");
    }

    #[test]
    fn latex() {
        assert_eq!(Monom::parse("-3/4x^2y").tex(), "-\\frac{ 3 }{ 4 }x^{2}y");
        assert_eq!(Monom::parse("2x^10").tex(), "2x^{10}");
        assert_eq!(Monom::parse("-1").tex(), "-1");
    }
}
