//! Convergence characteristics of a canonical system.
//!
//! The truncation error of a Carleman embedding is governed by a few
//! scalar quantities of the transfer matrices: the `‖F_j‖∞`, the
//! logarithmic ∞-norm of the linear part, and for quadratic analyses
//! the ratio `β₀ = ‖F₂‖∞ / ‖F₁‖∞`.

use crate::error::{ModelError, ModelResult};
use crate::transfer::TransferMatrices;
use carleman_math::{inf_norm, log_norm_sparse, Coefficient, OperatorNorm};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scalar summary of a canonical system's transfer matrices.
///
/// `R` is the magnitude type of the coefficients (`f64` for both `f64`
/// and `Complex64` systems).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Characteristics<R> {
    /// `‖F_j‖∞` for `j = 1..=k`, in degree order.
    pub transfer_norms: Vec<R>,
    /// Logarithmic ∞-norm `μ∞(F₁)` of the linear part.
    pub log_norm_first: R,
    /// `β₀ = ‖F₂‖∞ / ‖F₁‖∞`; `None` when the model is linear or the
    /// linear part has no weight, which leaves the ratio undefined.
    pub quadratic_ratio: Option<R>,
}

/// Compute the convergence characteristics of assembled transfer
/// matrices.
pub fn characteristics<T: Coefficient>(
    transfer: &TransferMatrices<T>,
) -> ModelResult<Characteristics<T::Real>> {
    let norms: Vec<T::Real> = transfer.matrices().iter().map(inf_norm).collect();
    let f1 = transfer.matrix(1).ok_or(ModelError::ZeroDegree)?;
    let mu = log_norm_sparse(f1, OperatorNorm::Inf)?;
    let zero = T::real_from_f64(0.0);
    let ratio = match (norms.first(), norms.get(1)) {
        (Some(&first), Some(&second)) if first != zero => Some(second / first),
        _ => None,
    };
    debug!(
        degrees = norms.len(),
        defined_ratio = ratio.is_some(),
        "computed convergence characteristics"
    );
    Ok(Characteristics {
        transfer_norms: norms,
        log_norm_first: mu,
        quadratic_ratio: ratio,
    })
}
