//! Property-based tests for monomial indexing
//!
//! This module tests:
//! - The exponent-key / canonical-position round trip
//! - First-occurrence minimality of canonical positions
//! - Multiplicities against brute-force enumeration

use carleman_math::{index_of, key_of, multiplicity, power_len, MathError, MultiIndex};
use num_traits::ToPrimitive;
use proptest::prelude::*;

/// Strategy for exponent keys with positive total degree.
fn key_strategy() -> impl Strategy<Value = MultiIndex> {
    prop::collection::vec(0u32..4, 1..5)
        .prop_filter("total degree must be positive", |key| {
            key.iter().sum::<u32>() > 0
        })
        .prop_map(MultiIndex::from_vec)
}

/// Strategy for a power shape small enough to enumerate.
fn shape_strategy() -> impl Strategy<Value = (usize, u32)> {
    (1usize..=4, 1u32..=4)
}

#[cfg(test)]
mod index_round_trip_properties {
    use super::*;

    proptest! {
        /// A key comes back unchanged through its canonical position.
        #[test]
        fn key_survives_the_round_trip(key in key_strategy()) {
            let dim = key.len();
            let degree: u32 = key.iter().sum();
            let pos = index_of(&key, dim, degree).unwrap();
            let back = key_of(pos, dim, degree).unwrap();
            prop_assert_eq!(back, key);
        }

        /// Decoding any slot and re-encoding lands at or before it.
        #[test]
        fn canonical_position_is_never_later((dim, degree) in shape_strategy(), seed in any::<usize>()) {
            let len = power_len(dim, degree).unwrap();
            let slot = seed % len;
            let key = key_of(slot, dim, degree).unwrap();
            let canonical = index_of(&key, dim, degree).unwrap();
            prop_assert!(canonical <= slot);
            // And the canonical slot decodes to the same monomial.
            prop_assert_eq!(key_of(canonical, dim, degree).unwrap(), key);
        }
    }
}

#[cfg(test)]
mod multiplicity_properties {
    use super::*;

    proptest! {
        /// The multinomial count matches brute-force slot counting.
        #[test]
        fn multiplicity_matches_enumeration((dim, degree) in shape_strategy(), seed in any::<usize>()) {
            let len = power_len(dim, degree).unwrap();
            let key = key_of(seed % len, dim, degree).unwrap();
            let counted = (0..len)
                .filter(|&s| key_of(s, dim, degree).unwrap() == key)
                .count() as u64;
            let claimed = multiplicity(&key, dim, degree).unwrap();
            prop_assert_eq!(claimed.to_u64(), Some(counted));
        }
    }
}

#[cfg(test)]
mod rejection_properties {
    use super::*;

    proptest! {
        /// A wrong total degree is always an unrealizable key.
        #[test]
        fn degree_mismatch_is_always_rejected(key in key_strategy(), extra in 1u32..4) {
            let dim = key.len();
            let degree: u32 = key.iter().sum::<u32>() + extra;
            let err = index_of(&key, dim, degree).unwrap_err();
            prop_assert_eq!(err, MathError::UnrealizableKey {
                expected: degree,
                actual: degree - extra,
            });
        }

        /// Positions past the end of the power are rejected.
        #[test]
        fn out_of_range_positions_are_rejected((dim, degree) in shape_strategy(), past in 0usize..16) {
            let len = power_len(dim, degree).unwrap();
            let err = key_of(len + past, dim, degree).unwrap_err();
            prop_assert_eq!(err, MathError::IndexOutOfRange { index: len + past, len });
        }
    }
}
