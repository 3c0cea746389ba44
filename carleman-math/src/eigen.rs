//! Eigenvalues of Hermitian matrices.
//!
//! Cyclic Jacobi sweeps on a real symmetric matrix. Complex Hermitian
//! input is first reduced to the real symmetric embedding
//! `[[X, −Y], [Y, X]]` of `A = X + iY`, whose spectrum repeats each
//! eigenvalue of `A` twice.

use crate::dense::DenseMatrix;
use crate::error::{MathError, MathResult};
use crate::scalar::Coefficient;
use num_traits::Float;
use std::cmp::Ordering;

/// Sweep budget; cyclic Jacobi converges quadratically well inside it.
const MAX_SWEEPS: usize = 30;

/// Eigenvalues of a Hermitian matrix, in descending order.
///
/// Only the Hermitian part of the input is consulted: the routine
/// symmetrizes while staging, so tiny asymmetries from upstream
/// arithmetic cannot break the sweep. An empty matrix has an empty
/// spectrum.
///
/// # Errors
///
/// [`MathError::NotSquare`] for rectangular input and
/// [`MathError::NoConvergence`] if the sweep budget runs out.
pub fn hermitian_eigenvalues<T: Coefficient>(a: &DenseMatrix<T>) -> MathResult<Vec<T::Real>> {
    if !a.is_square() {
        return Err(MathError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let n = a.rows();
    if n == 0 {
        return Ok(Vec::new());
    }
    let zero = T::real_from_f64(0.0);
    let half = T::real_from_f64(0.5);

    if T::COMPLEX {
        // Stage the symmetric embedding [[X, -Y], [Y, X]].
        let m = 2 * n;
        let mut s = vec![zero; m * m];
        for i in 0..n {
            for j in 0..n {
                let x = (a.get(i, j).re() + a.get(j, i).re()) * half;
                let y = (a.get(i, j).im() - a.get(j, i).im()) * half;
                s[i * m + j] = x;
                s[(i + n) * m + (j + n)] = x;
                s[i * m + (j + n)] = -y;
                s[(i + n) * m + j] = y;
            }
        }
        let mut values = jacobi_eigenvalues(&mut s, m, T::real_from_f64(m as f64))?;
        values.sort_by(|p, q| q.partial_cmp(p).unwrap_or(Ordering::Equal));
        // The embedding doubles every eigenvalue; averaging each
        // sorted pair recovers one copy even when near-equal values
        // interleave under round-off.
        Ok(values
            .chunks_exact(2)
            .map(|pair| (pair[0] + pair[1]) * half)
            .collect())
    } else {
        let mut s = vec![zero; n * n];
        for i in 0..n {
            for j in 0..n {
                s[i * n + j] = (a.get(i, j).re() + a.get(j, i).re()) * half;
            }
        }
        let mut values = jacobi_eigenvalues(&mut s, n, T::real_from_f64(n as f64))?;
        values.sort_by(|p, q| q.partial_cmp(p).unwrap_or(Ordering::Equal));
        Ok(values)
    }
}

/// Off-diagonal Frobenius weight of a flat symmetric matrix.
fn off_diagonal_weight<R: Float>(a: &[R], n: usize) -> R {
    let mut sum = R::zero();
    for p in 0..n {
        for q in (p + 1)..n {
            sum = sum + a[p * n + q] * a[p * n + q];
        }
    }
    sum.sqrt()
}

/// Cyclic Jacobi on a flat row-major symmetric matrix; returns the
/// diagonal once the off-diagonal weight falls below `n·ε` relative to
/// the input scale. `dim_scale` is `n` as an `R`.
fn jacobi_eigenvalues<R: Float>(a: &mut [R], n: usize, dim_scale: R) -> MathResult<Vec<R>> {
    let zero = R::zero();
    let one = R::one();
    let two = one + one;

    let scale = a.iter().fold(zero, |acc, &v| acc + v * v).sqrt();
    let tol = dim_scale * R::epsilon() * scale;

    for _ in 0..MAX_SWEEPS {
        if off_diagonal_weight(a, n) <= tol {
            return Ok((0..n).map(|i| a[i * n + i]).collect());
        }
        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[p * n + q];
                if apq == zero {
                    continue;
                }
                // Stable rotation: t = sign(τ) / (|τ| + √(1 + τ²)).
                let tau = (a[q * n + q] - a[p * n + p]) / (two * apq);
                let t = if tau >= zero {
                    one / (tau + (one + tau * tau).sqrt())
                } else {
                    -one / (-tau + (one + tau * tau).sqrt())
                };
                let c = one / (one + t * t).sqrt();
                let s = t * c;
                for k in 0..n {
                    let akp = a[k * n + p];
                    let akq = a[k * n + q];
                    a[k * n + p] = c * akp - s * akq;
                    a[k * n + q] = s * akp + c * akq;
                }
                for k in 0..n {
                    let apk = a[p * n + k];
                    let aqk = a[q * n + k];
                    a[p * n + k] = c * apk - s * aqk;
                    a[q * n + k] = s * apk + c * aqk;
                }
            }
        }
    }
    if off_diagonal_weight(a, n) <= tol {
        Ok((0..n).map(|i| a[i * n + i]).collect())
    } else {
        Err(MathError::NoConvergence { sweeps: MAX_SWEEPS })
    }
}
