//! Assembly of the transfer matrices `F_1 .. F_k`.

use crate::error::{ModelError, ModelResult};
use crate::model::PolynomialOde;
use carleman_math::{index_of, kron_prod, power_len, Coefficient, CooMatrix};
use rustc_hash::FxHashMap;
use tracing::debug;

/// The transfer matrices of a model: `F_j` is `n × n^j` and collects
/// the degree-`j` coefficients, each at its monomial's canonical
/// column.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferMatrices<T> {
    dim: usize,
    matrices: Vec<CooMatrix<T>>,
}

impl<T: Coefficient> TransferMatrices<T> {
    /// State dimension `n`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Degree `k` of the canonical form; always at least 1.
    pub fn max_degree(&self) -> u32 {
        self.matrices.len() as u32
    }

    /// `F_degree`, 1-based; `None` outside `1..=k`.
    pub fn matrix(&self, degree: u32) -> Option<&CooMatrix<T>> {
        if degree == 0 {
            return None;
        }
        self.matrices.get((degree - 1) as usize)
    }

    /// All of `F_1 .. F_k` in degree order.
    pub fn matrices(&self) -> &[CooMatrix<T>] {
        &self.matrices
    }

    /// Stored entries across all degrees.
    pub fn nnz(&self) -> usize {
        self.matrices.iter().map(CooMatrix::nnz).sum()
    }
}

/// Assemble `F_1 .. F_k` from the stored terms of `model`.
///
/// Each term `coeff · x^key` of component `i` lands at row `i`, column
/// `index_of(key)` of `F_{|key|}`. Zero coefficients never land at
/// all; the model's term maps already guarantee one coefficient per
/// key, so no column is written twice. Assembly is all-or-nothing: any
/// failure leaves no partial result behind.
pub fn transfer_matrices<T: Coefficient>(
    model: &PolynomialOde<T>,
) -> ModelResult<TransferMatrices<T>> {
    let n = model.dim();
    let k = model.max_degree();
    let mut doks: Vec<FxHashMap<(usize, usize), T>> = vec![FxHashMap::default(); k as usize];
    for (component, key, coeff) in model.terms() {
        if coeff.is_zero() {
            continue;
        }
        let degree: u32 = key.iter().sum();
        let column = index_of(key, n, degree)?;
        doks[(degree - 1) as usize].insert((component, column), coeff);
    }
    let mut matrices = Vec::with_capacity(k as usize);
    for (slot, dok) in doks.iter().enumerate() {
        let columns = power_len(n, slot as u32 + 1)?;
        matrices.push(CooMatrix::from_dok(n, columns, dok)?);
    }
    let transfer = TransferMatrices { dim: n, matrices };
    debug!(
        dim = n,
        max_degree = k,
        nnz = transfer.nnz(),
        "assembled transfer matrices"
    );
    Ok(transfer)
}

/// Evaluate `f(x) = Σ_j F_j x^[j]` from assembled transfer matrices.
///
/// Agrees exactly with [`PolynomialOde::eval`] on the originating
/// model: every monomial sits at its canonical column, and the power
/// holds the monomial's value there.
pub fn eval_transfer<T: Coefficient>(
    transfer: &TransferMatrices<T>,
    x: &[T],
) -> ModelResult<Vec<T>> {
    if x.len() != transfer.dim() {
        return Err(ModelError::StateLength {
            found: x.len(),
            dim: transfer.dim(),
        });
    }
    let mut out = vec![T::zero(); transfer.dim()];
    let mut power = x.to_vec();
    for (j, fj) in transfer.matrices().iter().enumerate() {
        if j > 0 {
            power = kron_prod(x, &power)?;
        }
        for (slot, contribution) in out.iter_mut().zip(fj.mul_vec(&power)?) {
            *slot += contribution;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn quadratic_pair() -> PolynomialOde<f64> {
        // x1' = x1^2, x2' = x1 x2.
        let mut model = PolynomialOde::new(2, 2).unwrap();
        model.add_term(0, smallvec![2, 0], 1.0).unwrap();
        model.add_term(1, smallvec![1, 1], 1.0).unwrap();
        model
    }

    #[test]
    fn shapes_follow_the_declared_degree() {
        let transfer = transfer_matrices(&quadratic_pair()).unwrap();
        assert_eq!(transfer.max_degree(), 2);
        assert_eq!(transfer.matrix(1).unwrap().shape(), (2, 2));
        assert_eq!(transfer.matrix(2).unwrap().shape(), (2, 4));
        assert!(transfer.matrix(0).is_none());
        assert!(transfer.matrix(3).is_none());
    }

    #[test]
    fn entries_land_at_canonical_columns() {
        let transfer = transfer_matrices(&quadratic_pair()).unwrap();
        let f1 = transfer.matrix(1).unwrap();
        let f2 = transfer.matrix(2).unwrap();
        assert_eq!(f1.nnz(), 0);
        // x1^2 is slot 0; x1 x2 is slot 1 of x ⊗ x.
        assert_eq!(f2.get(0, 0), 1.0);
        assert_eq!(f2.get(1, 1), 1.0);
        assert_eq!(f2.nnz(), 2);
    }

    #[test]
    fn declared_degree_pads_with_empty_matrices() {
        // Linear-only terms under a cubic declaration still yield
        // F1, F2, F3.
        let mut model = PolynomialOde::<f64>::new(2, 3).unwrap();
        model.add_term(0, smallvec![0, 1], 2.0).unwrap();
        let transfer = transfer_matrices(&model).unwrap();
        assert_eq!(transfer.max_degree(), 3);
        assert_eq!(transfer.matrix(2).unwrap().nnz(), 0);
        assert_eq!(transfer.matrix(3).unwrap().shape(), (2, 8));
    }

    #[test]
    fn single_state_collapses_to_column_zero() {
        // x' = a x^3 with n = 1: F3 is 1 x 1.
        let mut model = PolynomialOde::<f64>::new(1, 3).unwrap();
        model.add_term(0, smallvec![3], -2.0).unwrap();
        let transfer = transfer_matrices(&model).unwrap();
        assert_eq!(transfer.matrix(3).unwrap().shape(), (1, 1));
        assert_eq!(transfer.matrix(3).unwrap().get(0, 0), -2.0);
    }

    #[test]
    fn evaluation_matches_the_model() {
        let model = quadratic_pair();
        let transfer = transfer_matrices(&model).unwrap();
        for x in [[0.5, -1.0], [2.0, 3.0], [0.0, 0.0], [-1.5, 0.25]] {
            let direct = model.eval(&x).unwrap();
            let lifted = eval_transfer(&transfer, &x).unwrap();
            for (d, l) in direct.iter().zip(&lifted) {
                assert!((d - l).abs() < 1e-12);
            }
        }
        assert_eq!(
            eval_transfer(&transfer, &[1.0]).unwrap_err(),
            ModelError::StateLength { found: 1, dim: 2 }
        );
    }
}
