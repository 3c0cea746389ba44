//! Property-based tests for the Carleman pipeline
//!
//! This module tests, over randomly generated polynomial models:
//! - Transfer-matrix evaluation against direct model evaluation
//! - The first block row of the truncated Carleman matrix
//! - Exactness of the quadratic reduction on lifted states

use carleman_core::embedding::{lift_point, lifted_dim, truncated_matrix};
use carleman_core::model::PolynomialOde;
use carleman_core::reduction::quadratic_reduction;
use carleman_core::transfer::{eval_transfer, transfer_matrices};
use carleman_math::MultiIndex;
use proptest::prelude::*;

const TOL: f64 = 1e-9;

/// Strategy for small random polynomial models.
///
/// Terms whose random exponent key lands outside `1..=max_degree` are
/// simply skipped, so every generated model is valid by construction.
fn model_strategy() -> impl Strategy<Value = PolynomialOde<f64>> {
    (1usize..=3, 1u32..=3).prop_flat_map(|(dim, max_degree)| {
        let term = (
            0..dim,
            prop::collection::vec(0u32..=max_degree, dim),
            -2.0f64..2.0,
        );
        prop::collection::vec(term, 1..6).prop_map(move |terms| {
            let mut model = PolynomialOde::new(dim, max_degree).unwrap();
            for (component, key, coeff) in terms {
                let degree: u32 = key.iter().sum();
                if degree == 0 || degree > max_degree {
                    continue;
                }
                model
                    .add_term(component, MultiIndex::from_vec(key), coeff)
                    .unwrap();
            }
            model
        })
    })
}

/// A model together with a state vector of matching dimension.
fn model_and_point() -> impl Strategy<Value = (PolynomialOde<f64>, Vec<f64>)> {
    model_strategy().prop_flat_map(|model| {
        let dim = model.dim();
        (Just(model), prop::collection::vec(-1.5f64..1.5, dim))
    })
}

fn close(actual: &[f64], expected: &[f64]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, e)| (a - e).abs() < TOL)
}

#[cfg(test)]
mod transfer_properties {
    use super::*;

    proptest! {
        /// Summing `F_j x^[j]` over the assembled blocks reproduces the
        /// model's own evaluation.
        #[test]
        fn blocks_reproduce_the_model((model, x) in model_and_point()) {
            let transfer = transfer_matrices(&model).unwrap();
            let direct = model.eval(&x).unwrap();
            let via_blocks = eval_transfer(&transfer, &x).unwrap();
            prop_assert!(close(&via_blocks, &direct));
        }

        /// Every declared degree gets a block of the right shape, even
        /// when no term of that degree exists.
        #[test]
        fn every_degree_has_a_block(model in model_strategy()) {
            let transfer = transfer_matrices(&model).unwrap();
            prop_assert_eq!(transfer.matrices().len() as u32, model.max_degree());
            let mut cols = 1usize;
            for fj in transfer.matrices() {
                cols *= model.dim();
                prop_assert_eq!(fj.shape(), (model.dim(), cols));
            }
        }
    }
}

#[cfg(test)]
mod embedding_properties {
    use super::*;

    proptest! {
        /// The first block row of the Carleman matrix applied to the
        /// lifted state is exactly `f(x)` whenever the truncation order
        /// is at least the model degree.
        #[test]
        fn first_block_row_is_the_rhs((model, x) in model_and_point()) {
            let transfer = transfer_matrices(&model).unwrap();
            let order = model.max_degree();
            let carleman = truncated_matrix(&transfer, order).unwrap();

            let dim = lifted_dim(model.dim(), order).unwrap();
            prop_assert_eq!(carleman.shape(), (dim, dim));

            let lifted = lift_point(&x, order).unwrap();
            let deriv = carleman.mul_vec(&lifted).unwrap();
            let rhs = model.eval(&x).unwrap();
            prop_assert!(close(&deriv[..model.dim()], &rhs));
        }
    }
}

#[cfg(test)]
mod reduction_properties {
    use super::*;

    proptest! {
        /// The reduced quadratic system reproduces `f(x)` in its first
        /// `n` components on the lifted state.
        #[test]
        fn reduction_preserves_the_rhs((model, x) in model_and_point()) {
            let transfer = transfer_matrices(&model).unwrap();
            let quad = quadratic_reduction(&transfer).unwrap();
            let y = lift_point(&x, quad.lift_order()).unwrap();
            let dy = quad.rhs(&y).unwrap();
            let rhs = model.eval(&x).unwrap();
            prop_assert!(close(&dy[..model.dim()], &rhs));
        }

        /// On lifted states the reduction agrees block for block with a
        /// Carleman truncation deep enough to hold every needed block.
        #[test]
        fn reduction_matches_deep_truncation((model, x) in model_and_point()) {
            let transfer = transfer_matrices(&model).unwrap();
            let quad = quadratic_reduction(&transfer).unwrap();
            let lift = quad.lift_order();
            let deep_order = lift + model.max_degree() - 1;

            let y = lift_point(&x, lift).unwrap();
            let dy = quad.rhs(&y).unwrap();

            let deep = truncated_matrix(&transfer, deep_order).unwrap();
            let z = lift_point(&x, deep_order).unwrap();
            let dz = deep.mul_vec(&z).unwrap();
            prop_assert!(close(&dy, &dz[..dy.len()]));
        }
    }
}
