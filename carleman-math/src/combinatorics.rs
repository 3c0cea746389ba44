//! Exact counting helpers.
//!
//! Multiplicities of monomials inside Kronecker powers grow factorially,
//! so the counts are computed over [`BigUint`] and never rounded.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `n!` as an arbitrary-precision integer.
pub fn factorial(n: u32) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
pub fn binomial(n: u32, k: u32) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    factorial(n) / (factorial(k) * factorial(n - k))
}

/// Multinomial coefficient `s! / (parts[0]! · parts[1]! · …)` where `s`
/// is the sum of `parts`.
///
/// The empty slice yields 1.
pub fn multinomial(parts: &[u32]) -> BigUint {
    let total: u32 = parts.iter().sum();
    let denom = parts
        .iter()
        .fold(BigUint::one(), |acc, &p| acc * factorial(p));
    factorial(total) / denom
}
