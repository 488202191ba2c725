//! Integer helpers for combining periods.

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple, or `None` on overflow.
///
/// `lcm(0, n)` is 0.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Least common multiple of all values (1 for an empty input).
pub fn lcm_all<I>(values: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().try_fold(1, lcm)
}

/// Product of all values (1 for an empty input), or `None` on overflow.
pub fn product_all<I>(values: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().try_fold(1u64, |acc, v| acc.checked_mul(v))
}
