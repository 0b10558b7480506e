//! Polynomial generators and the non-reduced renderings used to build exercises.

use crate::fraction::Fraction;
use crate::monom::{Monom, DEFAULT_LETTER};
use crate::numeric::gcd;
use rand::Rng;
use super::{DisplayOptionsBuilder, Format, Polynom};

/// Options for [`Polynom::randomize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomOptions {
    /// The degree of the polynomial.
    pub degree: u32,

    /// Whether the leading coefficient is `1`. For factorable polynomials, whether every linear
    /// factor has a leading coefficient of `1`.
    pub unit: bool,

    /// Whether coefficients may be fractions.
    pub fractions: bool,

    /// Whether to build the polynomial as a product of linear factors, which are then available
    /// through [`Polynom::factors`].
    pub factorable: bool,

    /// The letters to use.
    pub letters: String,

    /// Whether terms other than the leading one may be zero.
    pub allow_null_monom: bool,

    /// The number of terms to keep. The leading term is always kept; other terms are removed at
    /// random. [`None`] keeps every term.
    pub number_of_monoms: Option<usize>,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            degree: 2,
            unit: true,
            fractions: false,
            factorable: false,
            letters: DEFAULT_LETTER.to_string(),
            allow_null_monom: false,
            number_of_monoms: None,
        }
    }
}

impl RandomOptions {
    /// Wraps the given [`RandomOptions`] into a builder for further customization.
    pub fn into_builder(self) -> RandomOptionsBuilder {
        RandomOptionsBuilder(self)
    }
}

/// Helper struct to build a [`RandomOptions`] struct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RandomOptionsBuilder(RandomOptions);

impl RandomOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn degree(mut self, degree: u32) -> Self {
        self.0.degree = degree;
        self
    }

    pub fn unit(mut self, unit: bool) -> Self {
        self.0.unit = unit;
        self
    }

    pub fn fractions(mut self, fractions: bool) -> Self {
        self.0.fractions = fractions;
        self
    }

    pub fn factorable(mut self, factorable: bool) -> Self {
        self.0.factorable = factorable;
        self
    }

    pub fn letters(mut self, letters: impl Into<String>) -> Self {
        self.0.letters = letters.into();
        self
    }

    pub fn allow_null_monom(mut self, allow_null_monom: bool) -> Self {
        self.0.allow_null_monom = allow_null_monom;
        self
    }

    pub fn number_of_monoms(mut self, number_of_monoms: Option<usize>) -> Self {
        self.0.number_of_monoms = number_of_monoms;
        self
    }

    /// Builds the [`RandomOptions`] struct.
    pub fn build(self) -> RandomOptions {
        self.0
    }
}

impl Polynom {
    /// Generates a random polynomial, either with [`Polynom::rnd_factorable`] or with
    /// [`Polynom::rnd_simple`] depending on [`RandomOptions::factorable`].
    pub fn randomize<R: Rng>(rng: &mut R, options: &RandomOptions) -> Self {
        if options.factorable {
            Self::rnd_factorable(rng, options.degree, options.unit, &options.letters)
        } else {
            Self::rnd_simple(rng, options)
        }
    }

    /// Generates a polynomial with one random term of each degree from `options.degree` down to
    /// `0`.
    pub fn rnd_simple<R: Rng>(rng: &mut R, options: &RandomOptions) -> Self {
        let mut out = Self::empty();
        for degree in (0..=options.degree).rev() {
            let leading = degree == options.degree;
            let mut term = Monom::random(
                rng,
                &options.letters,
                degree,
                options.fractions,
                !leading && options.allow_null_monom,
            );
            if leading && options.unit {
                term.coefficient = Fraction::ONE;
            }
            out.add(term);
        }

        if let Some(count) = options.number_of_monoms.filter(|&count| count > 0) {
            out.reorder(None);
            while out.len() > count {
                let index = rng.gen_range(1..out.len());
                out.terms.remove(index);
            }
        }
        out
    }

    /// Generates the product of `degree` random linear factors, and keeps the factors.
    pub fn rnd_factorable<R: Rng>(rng: &mut R, degree: u32, unit: bool, letters: &str) -> Self {
        let options = RandomOptionsBuilder::new()
            .degree(1)
            .unit(unit)
            .letters(letters)
            .allow_null_monom(true)
            .build();
        let factors = (0..degree)
            .map(|_| Self::rnd_simple(rng, &options))
            .collect::<Vec<_>>();

        let mut out = Self::one();
        for factor in &factors {
            out.multiply(factor);
        }
        out.factors = factors;
        out
    }

    /// Builds a LaTeX rendering where two terms sharing a common factor are grouped, such as
    /// `2x\left( x+2 \right)+1` for `2x^2+4x+1`, and stores it as [`Polynom::tex_string`].
    ///
    /// The first pair of terms whose numerators have a common divisor other than `1` is grouped.
    /// If no pair qualifies, the plain LaTeX rendering is stored. `force_sign` writes a leading
    /// `+` for a positive first term.
    pub fn factorize_partial(&mut self, force_sign: bool) -> &mut Self {
        self.tex_string.clear();
        if self.len() <= 1 {
            return self;
        }

        for (i, main) in self.terms.iter().enumerate() {
            for check in &self.terms[i + 1..] {
                let g = gcd(main.coefficient.numerator(), check.coefficient.numerator());
                if g == 1 {
                    continue;
                }

                let mut factor = Monom::lcm(&[main.clone(), check.clone()]);
                if factor.coefficient.is_nan() {
                    continue;
                }
                if main.coefficient.is_negative() {
                    factor.opposed();
                }

                let mut grouped = Polynom::from_terms(vec![main.clone(), check.clone()]);
                for term in &mut grouped.terms {
                    term.divide(&factor);
                }
                grouped.reduce();

                let mut rest = self.clone();
                let mut expanded = grouped.clone();
                expanded.multiply(&factor);
                rest.subtract(expanded);

                let sign = if force_sign && !factor.coefficient.is_negative() { "+" } else { "" };
                let wrapped = DisplayOptionsBuilder::new()
                    .format(Format::Tex)
                    .wrap_parentheses(true)
                    .build();
                let mut tex = format!("{}{}{}", sign, factor.tex(), grouped.fmt(wrapped));
                if !rest.is_zero() {
                    let signed = DisplayOptionsBuilder::new()
                        .format(Format::Tex)
                        .force_sign(true)
                        .build();
                    tex.push_str(&rest.fmt(signed).to_string());
                }
                self.tex_string = tex;
                return self;
            }
        }

        let options = DisplayOptionsBuilder::new()
            .format(Format::Tex)
            .force_sign(force_sign)
            .build();
        self.tex_string = self.fmt(options).to_string();
        self
    }

    /// Builds a non-reduced LaTeX rendering `A \cdot B C` of the polynomial, where `A` and `B` are
    /// random polynomials and `C` is what remains of the polynomial minus `A*B` (partially
    /// factorized), and stores it as [`Polynom::tex_string`]. A `complexity` above `1` allows
    /// fractions and more terms in `A` and `B`.
    ///
    /// Polynomials of degree 0 get an empty rendering.
    pub fn make_it_complicate<R: Rng>(&mut self, rng: &mut R, complexity: u32) -> &mut Self {
        self.tex_string.clear();
        let degree = self.degree(None);
        if degree < 1 {
            return self;
        }

        let complex = complexity > 1;
        let a_degree = rng.gen_range(0..degree);
        let a = Self::rnd_simple(rng, &RandomOptionsBuilder::new()
            .degree(a_degree)
            .unit(false)
            .fractions(complex)
            .allow_null_monom(false)
            .number_of_monoms(if complex { None } else { Some(1) })
            .build());
        let b = Self::rnd_simple(rng, &RandomOptionsBuilder::new()
            .degree(1)
            .unit(false)
            .fractions(complex)
            .allow_null_monom(true)
            .build());

        let mut c = self.clone();
        let mut product = a.clone();
        product.multiply(&b);
        c.subtract(product);
        c.factorize_partial(true);

        let wrapped = DisplayOptionsBuilder::new()
            .format(Format::Tex)
            .wrap_parentheses(true)
            .build();
        self.tex_string = format!("{} \\cdot {} {}", a.fmt(wrapped), b.fmt(wrapped), c.tex_string);
        self
    }
}
