//! Operator and logarithmic norms.
//!
//! The logarithmic norm `μ_p(A) = lim_{h→0⁺} (‖I + hA‖_p − 1) / h`
//! bounds the growth of `‖exp(tA)‖_p` and, unlike the operator norm,
//! can be negative. Closed forms exist for the three supported
//! selectors:
//!
//! * `p = ∞`: `max_i [ Re(a_ii) + Σ_{j≠i} |a_ij| ]`
//! * `p = 1`: the same scan over columns
//! * `p = 2`: the largest eigenvalue of the Hermitian part

use crate::dense::DenseMatrix;
use crate::eigen::hermitian_eigenvalues;
use crate::error::{MathError, MathResult};
use crate::scalar::Coefficient;
use crate::sparse::CooMatrix;
use num_traits::Float;

/// Norm selector for operator and logarithmic norms.
///
/// Only these three selectors have closed forms; anything else is
/// unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorNorm {
    /// Maximum absolute column sum.
    One,
    /// Spectral norm.
    Two,
    /// Maximum absolute row sum.
    Inf,
}

/// `‖A‖_p` of a dense matrix.
///
/// The `p = 2` case goes through the eigenvalues of `AᴴA` and can
/// report [`MathError::NoConvergence`]; the scans for `p ∈ {1, ∞}`
/// cannot fail. An empty matrix has norm zero.
pub fn operator_norm<T: Coefficient>(a: &DenseMatrix<T>, p: OperatorNorm) -> MathResult<T::Real> {
    let zero = T::real_from_f64(0.0);
    match p {
        OperatorNorm::Inf => {
            let mut best = zero;
            for i in 0..a.rows() {
                let mut sum = zero;
                for &v in a.row(i) {
                    sum = sum + v.modulus();
                }
                best = best.max(sum);
            }
            Ok(best)
        }
        OperatorNorm::One => {
            let mut sums = vec![zero; a.cols()];
            for i in 0..a.rows() {
                for (j, &v) in a.row(i).iter().enumerate() {
                    sums[j] = sums[j] + v.modulus();
                }
            }
            Ok(sums.into_iter().fold(zero, |m, s| m.max(s)))
        }
        OperatorNorm::Two => {
            // σ_max(A) = √λ_max(AᴴA); the Gram matrix is Hermitian by
            // construction.
            let n = a.cols();
            let mut gram = DenseMatrix::<T>::zeros(n, n);
            for i in 0..n {
                for j in 0..n {
                    let mut s = T::zero();
                    for k in 0..a.rows() {
                        s += a.get(k, i).conj() * a.get(k, j);
                    }
                    gram.set(i, j, s);
                }
            }
            let top = hermitian_eigenvalues(&gram)?
                .into_iter()
                .fold(zero, |m, v| m.max(v));
            Ok(top.sqrt())
        }
    }
}

/// Maximum absolute row sum `‖A‖∞` of a sparse matrix.
pub fn inf_norm<T: Coefficient>(a: &CooMatrix<T>) -> T::Real {
    let zero = T::real_from_f64(0.0);
    let mut sums = vec![zero; a.rows()];
    for (r, _, v) in a.iter() {
        sums[r] = sums[r] + v.modulus();
    }
    sums.into_iter().fold(zero, |m, s| m.max(s))
}

/// Maximum absolute column sum `‖A‖₁` of a sparse matrix.
pub fn one_norm<T: Coefficient>(a: &CooMatrix<T>) -> T::Real {
    let zero = T::real_from_f64(0.0);
    let mut sums = vec![zero; a.cols()];
    for (_, c, v) in a.iter() {
        sums[c] = sums[c] + v.modulus();
    }
    sums.into_iter().fold(zero, |m, s| m.max(s))
}

/// Logarithmic norm `μ_p(A)` of a square dense matrix.
///
/// # Errors
///
/// Rectangular input fails with [`MathError::NotSquare`]; an empty
/// matrix with [`MathError::InvalidArgument`] (there is no sensible
/// value for a system with no states). `p = 2` inherits the
/// eigensolver's [`MathError::NoConvergence`].
pub fn log_norm<T: Coefficient>(a: &DenseMatrix<T>, p: OperatorNorm) -> MathResult<T::Real> {
    if !a.is_square() {
        return Err(MathError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let n = a.rows();
    if n == 0 {
        return Err(MathError::InvalidArgument(
            "log_norm: matrix must be non-empty".into(),
        ));
    }
    let neg_inf = T::real_from_f64(f64::NEG_INFINITY);
    match p {
        OperatorNorm::Inf => {
            let mut best = neg_inf;
            for i in 0..n {
                let mut acc = a.get(i, i).re();
                for (j, &v) in a.row(i).iter().enumerate() {
                    if j != i {
                        acc = acc + v.modulus();
                    }
                }
                best = best.max(acc);
            }
            Ok(best)
        }
        OperatorNorm::One => {
            let mut best = neg_inf;
            for j in 0..n {
                let mut acc = a.get(j, j).re();
                for i in 0..n {
                    if i != j {
                        acc = acc + a.get(i, j).modulus();
                    }
                }
                best = best.max(acc);
            }
            Ok(best)
        }
        OperatorNorm::Two => {
            let values = hermitian_eigenvalues(&a.hermitian_part()?)?;
            Ok(values.into_iter().fold(neg_inf, |m, v| m.max(v)))
        }
    }
}

/// Logarithmic norm of a square sparse matrix.
///
/// The `p ∈ {1, ∞}` scans run directly on the triplets; `p = 2`
/// densifies for the eigensolver, which is fine at state-matrix sizes.
pub fn log_norm_sparse<T: Coefficient>(a: &CooMatrix<T>, p: OperatorNorm) -> MathResult<T::Real> {
    if a.rows() != a.cols() {
        return Err(MathError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    let n = a.rows();
    if n == 0 {
        return Err(MathError::InvalidArgument(
            "log_norm: matrix must be non-empty".into(),
        ));
    }
    let zero = T::real_from_f64(0.0);
    match p {
        OperatorNorm::Inf => {
            // Rows without stored entries contribute Re(0) + 0 = 0.
            let mut sums = vec![zero; n];
            for (r, c, v) in a.iter() {
                sums[r] = sums[r] + if r == c { v.re() } else { v.modulus() };
            }
            let neg_inf = T::real_from_f64(f64::NEG_INFINITY);
            Ok(sums.into_iter().fold(neg_inf, |m, s| m.max(s)))
        }
        OperatorNorm::One => {
            let mut sums = vec![zero; n];
            for (r, c, v) in a.iter() {
                sums[c] = sums[c] + if r == c { v.re() } else { v.modulus() };
            }
            let neg_inf = T::real_from_f64(f64::NEG_INFINITY);
            Ok(sums.into_iter().fold(neg_inf, |m, s| m.max(s)))
        }
        OperatorNorm::Two => log_norm(&a.to_dense(), p),
    }
}
