use algebra_parser::{reducer::op::Operator, Rpn, RpnKind};
use crate::monom::Monom;
use std::ops::Range;
use std::str::FromStr;
use super::{error::{self, Error}, Polynom};

/// A partial result on the evaluation stack, with the region of the source it covers.
struct Partial {
    value: Polynom,
    span: Range<usize>,
}

impl Partial {
    fn zero_at(at: usize) -> Self {
        Self { value: Polynom::zero(), span: at..at }
    }
}

/// Evaluates a postfix stream into a polynomial.
///
/// Operands become single-term polynomials. Binary operators pop two partial results (a missing
/// operand counts as zero) and powers pop one. Division is only defined when the divisor is a
/// non-zero constant.
fn evaluate(rpn: &Rpn) -> Result<Polynom, Vec<Error>> {
    let mut stack: Vec<Partial> = Vec::new();

    for token in rpn {
        match token.kind {
            RpnKind::Operand => {
                let term = token.lexeme.parse::<Monom>()
                    .map_err(|_| vec![Error::new(vec![token.span.clone()], error::InvalidLiteral {
                        literal: token.lexeme.clone(),
                    })])?;
                stack.push(Partial { value: Polynom::from(term), span: token.span.clone() });
            },
            RpnKind::Power(exponent) => {
                let mut base = stack.pop().unwrap_or_else(|| Partial::zero_at(token.span.start));
                base.value.pow(exponent as i64);
                base.span = base.span.start.min(token.span.start)..base.span.end.max(token.span.end);
                stack.push(base);
            },
            RpnKind::Operator(op) => {
                let rhs = stack.pop().unwrap_or_else(|| Partial::zero_at(token.span.end));
                let mut lhs = stack.pop().unwrap_or_else(|| Partial::zero_at(token.span.start));

                match op {
                    Operator::Add => {
                        lhs.value.add(rhs.value);
                    },
                    Operator::Sub => {
                        lhs.value.subtract(rhs.value);
                    },
                    Operator::Mul => {
                        lhs.value.multiply(rhs.value);
                    },
                    Operator::Div => divide(&mut lhs.value, rhs.value, token.span.clone(), rhs.span.clone())?,
                }

                let start = lhs.span.start.min(rhs.span.start).min(token.span.start);
                let end = lhs.span.end.max(rhs.span.end).max(token.span.end);
                lhs.span = start..end;
                stack.push(lhs);
            },
        }
    }

    let mut results = stack.into_iter();
    let result = results.next().map(|partial| partial.value).unwrap_or_else(Polynom::zero);
    if let Some(extra) = results.next() {
        return Err(vec![Error::new(vec![extra.span], error::MissingOperand)]);
    }
    Ok(result)
}

/// Divides `lhs` by the constant `rhs`.
fn divide(lhs: &mut Polynom, mut rhs: Polynom, op: Range<usize>, divisor: Range<usize>) -> Result<(), Vec<Error>> {
    rhs.reduce();
    if rhs.degree(None) > 0 {
        return Err(vec![Error::new(vec![op, divisor], error::NonScalarDivisor)]);
    }

    let constant = rhs.terms[0].coefficient;
    lhs.divide(constant)
        .map_err(|_| vec![Error::new(vec![op, divisor], error::DivisionByZero)])?;
    Ok(())
}

impl Polynom {
    /// Parses a polynomial from an algebraic expression such as `"3x^2-(x+1)(2x-1)/2"`, then
    /// reduces it.
    ///
    /// The expression may use numbers (integers and decimals), single letters, `+`, `-`, `*`,
    /// `^` with an integer exponent, parentheses, implicit multiplication, and `/` when the divisor
    /// is a non-zero constant. The input is kept as [`Polynom::raw`].
    pub fn parse(input: &str) -> Result<Self, Vec<Error>> {
        let rpn = algebra_parser::parse(input)?;
        let mut out = evaluate(&rpn)?;
        out.reduce();
        out.raw = input.to_string();
        Ok(out)
    }
}

impl FromStr for Polynom {
    type Err = Vec<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::fraction::Fraction;
    use pretty_assertions::assert_eq;
    use super::*;

    fn poly(s: &str) -> Polynom {
        Polynom::parse(s).unwrap()
    }

    #[test]
    fn parse_and_reduce() {
        let p = poly("x+x+1");
        assert_eq!(p.terms(), &[Monom::parse("2x"), Monom::parse("1")]);
        assert_eq!(p.display(), "2x+1");
        assert_eq!(p.raw(), "x+x+1");
    }

    #[test]
    fn products_and_powers() {
        assert_eq!(poly("(x+1)^2").display(), "x^2+2x+1");
        assert_eq!(poly("(x+1)(x-1)").display(), "x^2-1");
        assert_eq!(poly("-x^2+3").display(), "-x^2+3");
        assert_eq!(poly("2(x-3)").display(), "2x-6");
        assert_eq!(poly("x^2y*3y").display(), "3x^2y^2");
    }

    #[test]
    fn exponent_past_u32() {
        let p = poly("(x^65536)^65536");
        assert_eq!(p.len(), 1);
        assert!(p.terms()[0].coefficient.is_nan());
        assert_eq!(p.degree(Some('x')), u32::MAX);
    }

    #[test]
    fn scalar_division() {
        assert_eq!(poly("(4x^2+2)/4").display(), "x^2+1/2");
        assert_eq!(poly("3/4x").terms()[0].coefficient, Fraction::new(3, 4));
        assert_eq!(poly("0.5x").display(), "1/2x");
    }

    #[test]
    fn division_errors() {
        let errs = Polynom::parse("x/(x+1)").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].spans, vec![1..2, 3..6]);

        let errs = Polynom::parse("x/(2-2)").unwrap_err();
        assert_eq!(errs[0].spans, vec![1..2, 3..6]);
    }

    #[test]
    fn reducer_errors_pass_through() {
        assert!(Polynom::parse("2x+").is_err());
        assert!(Polynom::parse("x$").is_err());
        assert!(Polynom::parse("(x+1").is_err());
    }

    #[test]
    fn round_trip() {
        for input in ["2x^2+3x-5", "1/2x^3-x", "x^2y-3xy+7", "-4"] {
            let p = poly(input);
            assert_eq!(poly(&p.display()), p, "{}", input);
        }
    }
}
