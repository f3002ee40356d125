//! Number theory helpers used by the move rules and the heuristic

/// Check whether the smaller of `a` and `b` evenly divides the larger.
///
/// Symmetric in its arguments. Zero is never a token, so any zero argument
/// yields `false`.
#[inline]
#[must_use]
pub fn is_factor_or_multiple(a: u32, b: u32) -> bool {
    let (small, large) = if a <= b { (a, b) } else { (b, a) };
    small != 0 && large % small == 0
}

/// Trial-division primality test.
///
/// Token pools are small, so no attempt is made to be clever here.
#[inline]
#[must_use]
pub fn is_prime(n: u32) -> bool {
    n > 1 && (2..n).all(|d| n % d != 0)
}

/// Largest candidate that is both a prime and a divisor of `n`.
#[must_use]
pub fn largest_prime_factor_in(n: u32, candidates: &[u32]) -> Option<u32> {
    candidates
        .iter()
        .copied()
        .filter(|&c| c != 0 && n % c == 0 && is_prime(c))
        .max()
}
