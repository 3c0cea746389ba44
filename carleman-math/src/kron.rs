//! Kronecker products and powers of coefficient vectors.

use crate::error::{MathError, MathResult};
use crate::scalar::Coefficient;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Row count below which the parallel fill is not worth spawning.
#[cfg(feature = "rayon")]
const PARALLEL_CUTOFF: usize = 1 << 14;

/// Kronecker product `x ⊗ y`: entry `i · |y| + j` is `x[i] · y[j]`.
///
/// # Errors
///
/// Empty operands are rejected with [`MathError::InvalidArgument`];
/// an output longer than `usize` with [`MathError::SizeOverflow`].
pub fn kron_prod<T: Coefficient>(x: &[T], y: &[T]) -> MathResult<Vec<T>> {
    if x.is_empty() || y.is_empty() {
        return Err(MathError::InvalidArgument(
            "kron_prod: operands must be non-empty".into(),
        ));
    }
    let len = x
        .len()
        .checked_mul(y.len())
        .ok_or(MathError::SizeOverflow {
            lhs: x.len(),
            rhs: y.len(),
        })?;

    #[cfg(feature = "rayon")]
    if len >= PARALLEL_CUTOFF {
        let mut out = vec![T::zero(); len];
        out.par_chunks_mut(y.len())
            .zip(x.par_iter())
            .for_each(|(chunk, &xi)| {
                for (slot, &yj) in chunk.iter_mut().zip(y) {
                    *slot = xi * yj;
                }
            });
        return Ok(out);
    }

    let mut out = Vec::with_capacity(len);
    for &xi in x {
        for &yj in y {
            out.push(xi * yj);
        }
    }
    Ok(out)
}

/// Degree-`degree` Kronecker power `x^[degree]`.
///
/// Degree 1 copies `x`; higher degrees evaluate
/// `x ⊗ x^[degree−1]`. Degree 0 is rejected: the algebra starts at the
/// state vector itself.
pub fn kron_power<T: Coefficient>(x: &[T], degree: u32) -> MathResult<Vec<T>> {
    if degree == 0 {
        return Err(MathError::InvalidArgument(
            "kron_power: degree must be at least 1".into(),
        ));
    }
    if x.is_empty() {
        return Err(MathError::InvalidArgument(
            "kron_power: operand must be non-empty".into(),
        ));
    }
    let mut out = x.to_vec();
    for _ in 1..degree {
        out = kron_prod(x, &out)?;
    }
    Ok(out)
}
