//! Property-based tests for Kronecker products and powers
//!
//! This module tests:
//! - Length and slot-content identities of products
//! - The recursive structure of powers
//! - Consistency between powers and monomial positions

use carleman_math::{index_of, key_of, kron_power, kron_prod};
use proptest::prelude::*;

fn vector_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-3.0f64..3.0, 1..=max_len)
}

#[cfg(test)]
mod product_properties {
    use super::*;

    proptest! {
        /// |x ⊗ y| = |x| · |y|.
        #[test]
        fn product_length(x in vector_strategy(6), y in vector_strategy(6)) {
            let k = kron_prod(&x, &y).unwrap();
            prop_assert_eq!(k.len(), x.len() * y.len());
        }

        /// Entry (i, j) of the product is exactly x[i] · y[j].
        #[test]
        fn product_entries(x in vector_strategy(6), y in vector_strategy(6)) {
            let k = kron_prod(&x, &y).unwrap();
            for (i, &xi) in x.iter().enumerate() {
                for (j, &yj) in y.iter().enumerate() {
                    prop_assert_eq!(k[i * y.len() + j], xi * yj);
                }
            }
        }

        /// Scaling one operand scales the product.
        #[test]
        fn product_is_homogeneous(x in vector_strategy(5), y in vector_strategy(5), a in -2.0f64..2.0) {
            let scaled: Vec<f64> = x.iter().map(|&v| a * v).collect();
            let left = kron_prod(&scaled, &y).unwrap();
            let right = kron_prod(&x, &y).unwrap();
            for (l, r) in left.iter().zip(&right) {
                prop_assert!((l - a * r).abs() < 1e-9);
            }
        }
    }
}

#[cfg(test)]
mod power_properties {
    use super::*;

    proptest! {
        /// x^[j] = x ⊗ x^[j−1] for j ≥ 2.
        #[test]
        fn power_recursion(x in vector_strategy(4), degree in 2u32..=4) {
            let full = kron_power(&x, degree).unwrap();
            let previous = kron_power(&x, degree - 1).unwrap();
            let rebuilt = kron_prod(&x, &previous).unwrap();
            prop_assert_eq!(full, rebuilt);
        }

        /// Each slot of x^[j] holds the monomial named by its key.
        #[test]
        fn power_slots_match_their_keys(x in vector_strategy(3), degree in 1u32..=4) {
            let dim = x.len();
            let power = kron_power(&x, degree).unwrap();
            for (slot, &value) in power.iter().enumerate() {
                let key = key_of(slot, dim, degree).unwrap();
                let expected: f64 = key
                    .iter()
                    .enumerate()
                    .map(|(v, &e)| x[v].powi(e as i32))
                    .product();
                prop_assert!((value - expected).abs() < 1e-9);
            }
        }

        /// Reading a power at a canonical position recovers the
        /// monomial of the generating key.
        #[test]
        fn canonical_positions_index_powers(x in vector_strategy(3), degree in 1u32..=3) {
            let dim = x.len();
            let power = kron_power(&x, degree).unwrap();
            // Walk every slot's key once; canonical or not, the value
            // at the canonical position must match the slot's value.
            for slot in 0..power.len() {
                let key = key_of(slot, dim, degree).unwrap();
                let canonical = index_of(&key, dim, degree).unwrap();
                prop_assert!((power[slot] - power[canonical]).abs() < 1e-9);
            }
        }
    }
}
