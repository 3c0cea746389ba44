//! Truncated Carleman embedding.
//!
//! The derivative of a Kronecker power follows the product rule: with
//! `f(x) = Σ_j F_j x^[j]`,
//!
//! ```text
//! d/dt x^[i] = Σ_j ( Σ_{l=1}^{i} I_{n^{l−1}} ⊗ F_j ⊗ I_{n^{i−l}} ) x^[i+j−1]
//! ```
//!
//! Stacking the powers `x^[1] .. x^[N]` and dropping every block that
//! reaches past degree `N` yields the truncated Carleman matrix, a
//! square operator on the lifted state.

use crate::error::{ModelError, ModelResult};
use crate::transfer::TransferMatrices;
use carleman_math::{kron_prod, power_len, Coefficient, CooMatrix};
use tracing::debug;

/// `Σ_{l=1}^{i} I_{n^{l−1}} ⊗ F_j ⊗ I_{n^{i−l}}`: how `F_j` acts on
/// the degree-`i` power. The factor dimension `n` is read off the row
/// count of `fj`.
///
/// For `i = 1` this is `F_j` itself.
pub fn transfer_sum<T: Coefficient>(fj: &CooMatrix<T>, i: u32) -> ModelResult<CooMatrix<T>> {
    if i == 0 {
        return Err(ModelError::ZeroOrder);
    }
    let n = fj.rows();
    let mut acc: Option<CooMatrix<T>> = None;
    for l in 1..=i {
        let left = CooMatrix::<T>::identity(power_len(n, l - 1)?);
        let right = CooMatrix::<T>::identity(power_len(n, i - l)?);
        let term = left.kron(fj)?.kron(&right)?;
        acc = Some(match acc {
            None => term,
            Some(sum) => sum.add(&term)?,
        });
    }
    // The loop ran at least once.
    acc.ok_or(ModelError::ZeroOrder)
}

/// Dimension `Σ_{i=1}^{order} n^i` of the lifted state.
pub fn lifted_dim(dim: usize, order: u32) -> ModelResult<usize> {
    if order == 0 {
        return Err(ModelError::ZeroOrder);
    }
    let mut total: usize = 0;
    for i in 1..=order {
        let len = power_len(dim, i)?;
        total = total
            .checked_add(len)
            .ok_or(carleman_math::MathError::SizeOverflow {
                lhs: total,
                rhs: len,
            })?;
    }
    Ok(total)
}

/// Stack `x^[1] .. x^[order]` into the lifted state vector.
pub fn lift_point<T: Coefficient>(x: &[T], order: u32) -> ModelResult<Vec<T>> {
    if order == 0 {
        return Err(ModelError::ZeroOrder);
    }
    let mut lifted = Vec::with_capacity(lifted_dim(x.len(), order)?);
    let mut power = x.to_vec();
    lifted.extend_from_slice(&power);
    for _ in 2..=order {
        power = kron_prod(x, &power)?;
        lifted.extend_from_slice(&power);
    }
    Ok(lifted)
}

/// Truncated Carleman matrix of order `order`.
///
/// Block row `i` carries `transfer_sum(F_j, i)` in block column
/// `i + j − 1` for every degree `j` the transfer matrices hold; blocks
/// past column `order` are cut off by the truncation. The result is
/// square on the lifted state.
pub fn truncated_matrix<T: Coefficient>(
    transfer: &TransferMatrices<T>,
    order: u32,
) -> ModelResult<CooMatrix<T>> {
    if order == 0 {
        return Err(ModelError::ZeroOrder);
    }
    let n = transfer.dim();
    let size = lifted_dim(n, order)?;

    // 1-based block offsets into the lifted state.
    let mut offsets = vec![0usize; order as usize + 1];
    for i in 1..=order as usize {
        offsets[i] = if i == 1 {
            0
        } else {
            offsets[i - 1] + power_len(n, i as u32 - 1)?
        };
    }

    let mut triplets = Vec::new();
    for i in 1..=order {
        for j in 1..=transfer.max_degree() {
            let target = i + j - 1;
            if target > order {
                break;
            }
            let fj = match transfer.matrix(j) {
                Some(fj) => fj,
                None => continue,
            };
            if fj.nnz() == 0 {
                continue;
            }
            let block = transfer_sum(fj, i)?;
            let row_base = offsets[i as usize];
            let col_base = offsets[target as usize];
            for (r, c, v) in block.iter() {
                triplets.push((row_base + r, col_base + c, v));
            }
        }
    }
    let matrix = CooMatrix::from_triplets(size, size, &triplets)?;
    debug!(
        dim = n,
        order,
        size,
        nnz = matrix.nnz(),
        "assembled truncated Carleman matrix"
    );
    Ok(matrix)
}
