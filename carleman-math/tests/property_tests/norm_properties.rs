//! Property-based tests for operator and logarithmic norms
//!
//! This module tests:
//! - The diagonal-shift identity of logarithmic norms
//! - The bound μ_p(A) ≤ ‖A‖_p
//! - Agreement between sparse and dense scans

use carleman_math::{
    inf_norm, log_norm, log_norm_sparse, one_norm, operator_norm, CooMatrix, DenseMatrix,
    OperatorNorm,
};
use proptest::prelude::*;

const NORMS: [OperatorNorm; 3] = [OperatorNorm::One, OperatorNorm::Two, OperatorNorm::Inf];

fn square_matrix_strategy() -> impl Strategy<Value = DenseMatrix<f64>> {
    (1usize..=4)
        .prop_flat_map(|n| {
            prop::collection::vec(-3.0f64..3.0, n * n)
                .prop_map(move |data| DenseMatrix::from_vec(n, n, data).unwrap())
        })
}

#[cfg(test)]
mod log_norm_properties {
    use super::*;

    proptest! {
        /// μ_p(A + cI) = μ_p(A) + c.
        #[test]
        fn diagonal_shift(a in square_matrix_strategy(), c in -2.0f64..2.0) {
            let n = a.rows();
            let mut shifted = a.clone();
            for i in 0..n {
                shifted.set(i, i, a.get(i, i) + c);
            }
            for p in NORMS {
                let base = log_norm(&a, p).unwrap();
                let moved = log_norm(&shifted, p).unwrap();
                prop_assert!((moved - (base + c)).abs() < 1e-7,
                    "p = {:?}: {} vs {}", p, moved, base + c);
            }
        }

        /// The logarithmic norm never exceeds the operator norm.
        #[test]
        fn bounded_by_operator_norm(a in square_matrix_strategy()) {
            for p in NORMS {
                let mu = log_norm(&a, p).unwrap();
                let norm = operator_norm(&a, p).unwrap();
                prop_assert!(mu <= norm + 1e-9,
                    "p = {:?}: mu = {}, norm = {}", p, mu, norm);
            }
        }

        /// μ_p(-I) = -1 under every selector after scaling.
        #[test]
        fn negative_identity_scales(s in 0.1f64..4.0) {
            let m = DenseMatrix::from_rows(&[vec![-s, 0.0], vec![0.0, -s]]).unwrap();
            for p in NORMS {
                let mu = log_norm(&m, p).unwrap();
                prop_assert!((mu + s).abs() < 1e-9);
            }
        }
    }
}

#[cfg(test)]
mod sparse_dense_agreement {
    use super::*;

    fn coo_of(a: &DenseMatrix<f64>) -> CooMatrix<f64> {
        let mut triplets = Vec::new();
        for i in 0..a.rows() {
            for (j, &v) in a.row(i).iter().enumerate() {
                triplets.push((i, j, v));
            }
        }
        CooMatrix::from_triplets(a.rows(), a.cols(), &triplets).unwrap()
    }

    proptest! {
        /// Triplet scans agree with dense scans.
        #[test]
        fn norms_agree(a in square_matrix_strategy()) {
            let coo = coo_of(&a);
            let inf = operator_norm(&a, OperatorNorm::Inf).unwrap();
            let one = operator_norm(&a, OperatorNorm::One).unwrap();
            prop_assert!((inf_norm(&coo) - inf).abs() < 1e-12);
            prop_assert!((one_norm(&coo) - one).abs() < 1e-12);
            for p in NORMS {
                let sparse = log_norm_sparse(&coo, p).unwrap();
                let dense = log_norm(&a, p).unwrap();
                prop_assert!((sparse - dense).abs() < 1e-9);
            }
        }
    }
}
