use super::Polynom;
use tracing::{debug, warn};

/// Upper bound on the steps of a long division of `dividend`: one step per term a quotient over
/// its variables could have, plus one per term of the dividend.
fn max_steps(dividend: &Polynom) -> usize {
    let degree = dividend.degree(None) as usize;
    let variables = dividend.variables().len() as u32;
    degree.saturating_add(1).saturating_pow(variables).saturating_add(dividend.len())
}

/// The result of [`Polynom::euclidian`].
#[derive(Debug, Clone, PartialEq)]
pub struct EuclideanDivision {
    pub quotient: Polynom,
    pub remainder: Polynom,
}

impl Polynom {
    /// Divides this polynomial by `divisor` using long division.
    ///
    /// While the degree of the remainder is at least the degree of the divisor, the leading term
    /// of the remainder is divided by the leading term of the divisor; the resulting term is added
    /// to the quotient and `divisor * term` is subtracted from the remainder. The division stops
    /// early if that term is zero, which happens when the leading terms do not divide each other.
    ///
    /// ```
    /// use algebra_core::polynom::Polynom;
    ///
    /// let p: Polynom = "x^2-1".parse().unwrap();
    /// let division = p.euclidian(&"x-1".parse().unwrap());
    /// assert_eq!(division.quotient.display(), "x+1");
    /// assert_eq!(division.remainder.display(), "0");
    /// ```
    pub fn euclidian(&self, divisor: &Polynom) -> EuclideanDivision {
        let mut quotient = Vec::new();
        let mut remainder = self.clone();
        remainder.reduce();
        let max_steps = max_steps(&remainder);

        let mut divisor = divisor.clone();
        divisor.reduce();
        let leading = divisor.monom_by_degree(None, None);
        let divisor_degree = divisor.degree(None);

        for step in 0.. {
            if remainder.degree(None) < divisor_degree {
                break;
            }
            if step == max_steps {
                warn!(dividend = %self, %divisor, "long division did not terminate");
                break;
            }

            let mut term = remainder.monom_by_degree(None, None);
            term.divide(&leading);
            if term.is_zero() {
                break;
            }

            debug!(%term, remainder = %remainder, "long division step");
            let mut product = divisor.clone();
            product.multiply(&term);
            remainder.subtract(product);
            quotient.push(term);
        }

        let mut quotient = Polynom::from_terms(quotient);
        quotient.reduce();
        EuclideanDivision { quotient, remainder }
    }
}
