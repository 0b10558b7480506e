//! Integer helpers shared by the rational and polynomial engines.

/// Greatest common divisor of two integers. The result is never negative, and `gcd(0, n)` is
/// `|n|`.
pub fn gcd(a: i64, b: i64) -> i64 {
    gcd_i128(a as i128, b as i128) as i64
}

/// [`gcd`] over `i128`, used on intermediate results before they are narrowed back to `i64`.
pub(crate) fn gcd_i128(mut a: i128, mut b: i128) -> i128 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Greatest common divisor of all the given integers. Returns `1` for an empty input.
pub fn gcd_all(values: impl IntoIterator<Item = i64>) -> i64 {
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return 1;
    }
    values.fold(0, gcd)
}

/// Least common multiple of two integers. Returns `0` if either is `0`, and `None` if the result
/// does not fit in an `i64`.
pub fn lcm(a: i64, b: i64) -> Option<i64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let (a, b) = (a as i128, b as i128);
    i64::try_from((a / gcd_i128(a, b) * b).abs()).ok()
}

/// Least common multiple of all the given integers. Returns `1` for an empty input, and `None` as
/// soon as an intermediate result overflows.
pub fn lcm_all(values: impl IntoIterator<Item = i64>) -> Option<i64> {
    values.into_iter().try_fold(1, lcm)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn gcd_conventions() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd_all([4, -6, 10]), 2);
        assert_eq!(gcd_all([]), 1);
    }

    #[test]
    fn lcm_values() {
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(-4, 6), Some(12));
        assert_eq!(lcm_all([2, 3, 4]), Some(12));
        assert_eq!(lcm_all([]), Some(1));
        assert_eq!(lcm(0, 3), Some(0));
    }

    #[test]
    fn lcm_overflow() {
        assert_eq!(lcm(4_000_000_007, 4_000_000_009), None);
        assert_eq!(lcm_all([2, 4_000_000_007, 4_000_000_009]), None);
        assert_eq!(lcm(i64::MIN, 1), None);
        assert_eq!(lcm(i64::MAX, i64::MAX), Some(i64::MAX));
    }
}
