//! Monomial positions inside Kronecker powers.
//!
//! The degree-`j` Kronecker power of an `n`-vector enumerates, in its
//! `n^j` slots, every length-`j` digit string over `{0, …, n−1}`: slot
//! `s` holds the product `x_{d_1} x_{d_2} ⋯ x_{d_j}` where `d_1 ⋯ d_j`
//! is `s` written in base `n`, most significant digit first. Distinct
//! slots repeat a monomial whenever their digit strings are
//! permutations of one another. This module maps an exponent vector to
//! the canonical slot of its monomial, meaning the first slot in
//! enumeration order that realizes it, and back, without materializing
//! the power.

use crate::combinatorics::multinomial;
use crate::error::{MathError, MathResult};
use num_bigint::BigUint;
use smallvec::{smallvec, SmallVec};

/// Exponent vector of a monomial: `key[v]` is the exponent of state
/// variable `v`. Inline capacity covers typical small state dimensions.
pub type MultiIndex = SmallVec<[u32; 4]>;

/// Length `n^j` of the degree-`degree` Kronecker power of a
/// `dim`-vector.
///
/// # Errors
///
/// [`MathError::SizeOverflow`] when the product exceeds `usize`, and
/// [`MathError::InvalidArgument`] when `dim == 0`.
pub fn power_len(dim: usize, degree: u32) -> MathResult<usize> {
    if dim == 0 {
        return Err(MathError::InvalidArgument(
            "power_len: dimension must be positive".into(),
        ));
    }
    let mut len: usize = 1;
    for _ in 0..degree {
        len = len
            .checked_mul(dim)
            .ok_or(MathError::SizeOverflow { lhs: len, rhs: dim })?;
    }
    Ok(len)
}

fn check_key(key: &[u32], dim: usize, degree: u32) -> MathResult<()> {
    if dim == 0 {
        return Err(MathError::InvalidArgument(
            "monomial key: dimension must be positive".into(),
        ));
    }
    if degree == 0 {
        return Err(MathError::InvalidArgument(
            "monomial key: degree must be at least 1".into(),
        ));
    }
    if key.len() != dim {
        return Err(MathError::InvalidArgument(format!(
            "monomial key has {} entries for dimension {dim}",
            key.len()
        )));
    }
    let total: u32 = key.iter().sum();
    if total != degree {
        return Err(MathError::UnrealizableKey {
            expected: degree,
            actual: total,
        });
    }
    Ok(())
}

/// Canonical position of the monomial with exponents `key` inside the
/// degree-`degree` Kronecker power of a `dim`-vector.
///
/// The first slot realizing a monomial reads its digits in ascending
/// order, so the position is the base-`dim` value of the ascending
/// digit string. Runs in `O(degree)` after one pass over `key`; the
/// power itself is never enumerated.
///
/// # Errors
///
/// * [`MathError::InvalidArgument`] when `dim == 0`, `degree == 0`, or
///   `key.len() != dim`.
/// * [`MathError::UnrealizableKey`] when the exponents do not sum to
///   `degree`.
/// * [`MathError::SizeOverflow`] when the position exceeds `usize`.
pub fn index_of(key: &[u32], dim: usize, degree: u32) -> MathResult<usize> {
    check_key(key, dim, degree)?;
    // A one-dimensional power has a single slot.
    if dim == 1 {
        return Ok(0);
    }
    let mut index: usize = 0;
    for (var, &count) in key.iter().enumerate() {
        for _ in 0..count {
            index = index
                .checked_mul(dim)
                .and_then(|i| i.checked_add(var))
                .ok_or(MathError::SizeOverflow {
                    lhs: index,
                    rhs: dim,
                })?;
        }
    }
    Ok(index)
}

/// Exponent vector of the monomial stored at `index` in the
/// degree-`degree` Kronecker power of a `dim`-vector.
///
/// Every slot decodes, not only canonical ones; the slots of a repeated
/// monomial all share one key.
///
/// # Errors
///
/// [`MathError::IndexOutOfRange`] when `index ≥ dim^degree`, plus the
/// argument errors of [`power_len`].
pub fn key_of(index: usize, dim: usize, degree: u32) -> MathResult<MultiIndex> {
    if degree == 0 {
        return Err(MathError::InvalidArgument(
            "key_of: degree must be at least 1".into(),
        ));
    }
    let len = power_len(dim, degree)?;
    if index >= len {
        return Err(MathError::IndexOutOfRange { index, len });
    }
    let mut key: MultiIndex = smallvec![0; dim];
    let mut rest = index;
    for _ in 0..degree {
        key[rest % dim] += 1;
        rest /= dim;
    }
    Ok(key)
}

/// Number of slots of the degree-`degree` power that hold the monomial
/// with exponents `key`: the multinomial coefficient
/// `degree! / (key[0]! ⋯ key[dim−1]!)`.
///
/// Accepts the same arguments as [`index_of`] and fails the same way.
pub fn multiplicity(key: &[u32], dim: usize, degree: u32) -> MathResult<BigUint> {
    check_key(key, dim, degree)?;
    Ok(multinomial(key))
}
