use std::fmt::{self, Display, Formatter};
use super::Polynom;

/// The output language of a [`PolynomFormatter`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain text, such as `-3/4x^2+1`.
    ///
    /// This is the default option.
    #[default]
    Plain,

    /// LaTeX, such as `-\frac{ 3 }{ 4 }x^{2}+1`.
    Tex,
}

/// Formatting options for polynomials.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// The output language.
    pub format: Format,

    /// Whether to write a `+` in front of the first term when its coefficient is positive. This is
    /// useful when the polynomial is appended to another expression.
    pub force_sign: bool,

    /// Whether to wrap the polynomial in parentheses when it has more than one term.
    pub wrap_parentheses: bool,
}

impl DisplayOptions {
    /// Wraps the given [`DisplayOptions`] into a builder for further customization.
    pub fn into_builder(self) -> DisplayOptionsBuilder {
        DisplayOptionsBuilder(self)
    }
}

/// Helper struct to build a [`DisplayOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptionsBuilder(DisplayOptions);

impl DisplayOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output language. See [`Format`] for more information.
    pub fn format(mut self, format: Format) -> Self {
        self.0.format = format;
        self
    }

    /// Sets whether to force a leading `+`. See [`DisplayOptions::force_sign`].
    pub fn force_sign(mut self, force_sign: bool) -> Self {
        self.0.force_sign = force_sign;
        self
    }

    /// Sets whether to wrap the polynomial in parentheses. See
    /// [`DisplayOptions::wrap_parentheses`].
    pub fn wrap_parentheses(mut self, wrap_parentheses: bool) -> Self {
        self.0.wrap_parentheses = wrap_parentheses;
        self
    }

    /// Builds the [`DisplayOptions`] struct.
    pub fn build(self) -> DisplayOptions {
        self.0
    }
}

/// Formatter for a [`Polynom`].
#[derive(Debug, Clone, Copy)]
pub struct PolynomFormatter<'a> {
    /// The polynomial to format.
    pub polynom: &'a Polynom,

    /// The options to use when formatting.
    pub options: DisplayOptions,
}

impl Display for PolynomFormatter<'_> {
    /// Writes the terms in their current order. Zero terms are skipped, and the zero polynomial is
    /// written as `0`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for term in self.polynom.terms.iter().filter(|m| !m.is_zero()) {
            if !term.coefficient.is_negative() && (!out.is_empty() || self.options.force_sign) {
                out.push('+');
            }
            match self.options.format {
                Format::Plain => out.push_str(&term.display()),
                Format::Tex => out.push_str(&term.tex()),
            }
        }

        if out.is_empty() {
            return write!(f, "0");
        }
        if self.options.wrap_parentheses && self.polynom.len() > 1 {
            return match self.options.format {
                Format::Plain => write!(f, "({})", out),
                Format::Tex => write!(f, "\\left( {} \\right)", out),
            };
        }
        write!(f, "{}", out)
    }
}

impl Polynom {
    /// Returns a formatter for the polynomial with the given options.
    pub fn fmt(&self, options: DisplayOptions) -> PolynomFormatter {
        PolynomFormatter { polynom: self, options }
    }

    /// Renders the polynomial as plain text.
    pub fn display(&self) -> String {
        self.fmt(DisplayOptions::default()).to_string()
    }

    /// Renders the polynomial as LaTeX.
    pub fn tex(&self) -> String {
        self.fmt(DisplayOptionsBuilder::new().format(Format::Tex).build()).to_string()
    }
}

impl Display for Polynom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
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
    fn plain() {
        assert_eq!(poly("2x^2-3/4x+1").display(), "2x^2-3/4x+1");
        assert_eq!(poly("-x+y").display(), "-x+y");
        assert_eq!(poly("x-x").display(), "0");
        assert_eq!(poly("x^2y^3").to_string(), "x^2y^3");
    }

    #[test]
    fn latex() {
        assert_eq!(poly("2x^2-3/4x+1").tex(), "2x^{2}-\\frac{ 3 }{ 4 }x+1");
    }

    #[test]
    fn options() {
        let p = poly("x-1");
        let opts = DisplayOptionsBuilder::new()
            .force_sign(true)
            .wrap_parentheses(true)
            .build();
        assert_eq!(p.fmt(opts).to_string(), "(+x-1)");

        let opts = opts.into_builder().format(Format::Tex).force_sign(false).build();
        assert_eq!(p.fmt(opts).to_string(), "\\left( x-1 \\right)");

        // a single term is never wrapped
        assert_eq!(poly("3x").fmt(opts).to_string(), "3x");
    }

    #[test]
    fn zero_terms_are_skipped() {
        let p = Polynom::from_terms(vec![
            crate::monom::Monom::parse("0x^2"),
            crate::monom::Monom::parse("-x"),
        ]);
        assert_eq!(p.display(), "-x");
    }
}
