//! Exact quadratic reduction.
//!
//! A degree-`k` canonical system becomes quadratic on the lifted state
//! `y = [x^[1]; …; x^[k−1]]`: the product rule sends block `i` to
//! degrees up to `i + k − 1 ≤ 2(k−1)`, and every degree `m` in that
//! range factors as `x^[m−L] ⊗ x^[L]` with `L = k − 1`, which is a
//! sub-block of `y ⊗ y`. No truncation is involved; the reduction is
//! exact.

use crate::embedding::{lifted_dim, transfer_sum};
use crate::error::{ModelError, ModelResult};
use crate::transfer::TransferMatrices;
use carleman_math::{kron_prod, power_len, Coefficient, CooMatrix, MathError};
use tracing::debug;

/// A quadratic system `y' = Ã₁ y + Ã₂ (y ⊗ y)` on the lifted state.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticSystem<T> {
    state_dim: usize,
    lift_order: u32,
    f1: CooMatrix<T>,
    f2: CooMatrix<T>,
}

impl<T: Coefficient> QuadraticSystem<T> {
    /// Dimension of the lifted state `y`.
    pub fn dim(&self) -> usize {
        self.f1.rows()
    }

    /// Dimension `n` of the original state.
    pub fn state_dim(&self) -> usize {
        self.state_dim
    }

    /// Highest power stacked into `y`.
    pub fn lift_order(&self) -> u32 {
        self.lift_order
    }

    /// Linear part `Ã₁`, square on the lifted state.
    pub fn f1(&self) -> &CooMatrix<T> {
        &self.f1
    }

    /// Quadratic part `Ã₂` acting on `y ⊗ y`.
    pub fn f2(&self) -> &CooMatrix<T> {
        &self.f2
    }

    /// Evaluate `Ã₁ y + Ã₂ (y ⊗ y)`.
    pub fn rhs(&self, y: &[T]) -> ModelResult<Vec<T>> {
        if y.len() != self.dim() {
            return Err(ModelError::StateLength {
                found: y.len(),
                dim: self.dim(),
            });
        }
        let mut out = self.f1.mul_vec(y)?;
        let square = kron_prod(y, y)?;
        for (slot, v) in out.iter_mut().zip(self.f2.mul_vec(&square)?) {
            *slot += v;
        }
        Ok(out)
    }
}

/// Reduce a degree-`k` canonical system to an exact quadratic one.
///
/// The lifted state stacks `x^[1] .. x^[max(k−1, 1)]`; for `k ≤ 2` the
/// reduction is the system itself (with an empty quadratic part when
/// `k = 1`).
pub fn quadratic_reduction<T: Coefficient>(
    transfer: &TransferMatrices<T>,
) -> ModelResult<QuadraticSystem<T>> {
    let n = transfer.dim();
    let k = transfer.max_degree();
    let lift = k.saturating_sub(1).max(1);
    let dim = lifted_dim(n, lift)?;
    let square = dim.checked_mul(dim).ok_or(MathError::SizeOverflow {
        lhs: dim,
        rhs: dim,
    })?;

    // 1-based offsets of the power blocks inside y.
    let mut offsets = vec![0usize; lift as usize + 1];
    for i in 2..=lift as usize {
        offsets[i] = offsets[i - 1] + power_len(n, i as u32 - 1)?;
    }
    // Width of the top block x^[lift]; every overflowing degree m
    // splits as x^[m−lift] ⊗ x^[lift].
    let top_len = power_len(n, lift)?;

    let mut linear = Vec::new();
    let mut quadratic = Vec::new();
    for i in 1..=lift {
        for j in 1..=k {
            let fj = match transfer.matrix(j) {
                Some(fj) if fj.nnz() > 0 => fj,
                _ => continue,
            };
            let block = transfer_sum(fj, i)?;
            let row_base = offsets[i as usize];
            let target = i + j - 1;
            if target <= lift {
                let col_base = offsets[target as usize];
                for (r, c, v) in block.iter() {
                    linear.push((row_base + r, col_base + c, v));
                }
            } else {
                let head = target - lift;
                let head_base = offsets[head as usize];
                let top_base = offsets[lift as usize];
                for (r, c, v) in block.iter() {
                    let s = c / top_len;
                    let t = c % top_len;
                    let col = (head_base + s) * dim + (top_base + t);
                    quadratic.push((row_base + r, col, v));
                }
            }
        }
    }

    let f1 = CooMatrix::from_triplets(dim, dim, &linear)?;
    let f2 = CooMatrix::from_triplets(dim, square, &quadratic)?;
    debug!(
        state_dim = n,
        lift_order = lift,
        dim,
        linear_nnz = f1.nnz(),
        quadratic_nnz = f2.nnz(),
        "reduced to a quadratic system"
    );
    Ok(QuadraticSystem {
        state_dim: n,
        lift_order: lift,
        f1,
        f2,
    })
}
