//! # Monomial Indexing Example
//!
//! This example demonstrates the bijection between exponent vectors and
//! canonical positions inside Kronecker powers.
//! It covers:
//! - Encoding a monomial to its canonical position
//! - Decoding arbitrary slots back to exponent keys
//! - Slot multiplicities via multinomial coefficients
//! - Reading monomial values straight out of a Kronecker power
//!
//! ## Complexity
//! - Time: O(j) per lookup for a degree-j power (no enumeration)
//! - Space: O(n) for the exponent key
//!
//! ## See Also
//! - [`index_of`](carleman_math::index_of) / [`key_of`](carleman_math::key_of)
//! - [`kron_power`](carleman_math::kron_power)

use carleman_math::{index_of, key_of, kron_power, multiplicity, power_len, MathError};

fn main() -> Result<(), MathError> {
    println!("=== Carleman Math: Monomial Indexing ===\n");

    // ===== Encoding =====
    println!("--- Canonical positions (n = 2, j = 2) ---");
    for key in [[2u32, 0], [1, 1], [0, 2]] {
        let pos = index_of(&key, 2, 2)?;
        println!("  x1^{} x2^{}  ->  slot {}", key[0], key[1], pos);
    }
    println!();

    // ===== Decoding =====
    println!("--- Decoding every slot of x ⊗ x ---");
    for slot in 0..power_len(2, 2)? {
        let key = key_of(slot, 2, 2)?;
        println!("  slot {}  ->  exponents {:?}", slot, key.as_slice());
    }
    println!();

    // ===== Multiplicities =====
    println!("--- Multiplicities (n = 3, j = 3) ---");
    for key in [[3u32, 0, 0], [2, 1, 0], [1, 1, 1]] {
        let m = multiplicity(&key, 3, 3)?;
        println!("  exponents {:?} appear in {} slots", key, m);
    }
    println!();

    // ===== Positions index powers =====
    println!("--- Reading monomials out of x^[3] for x = (2, 3) ---");
    let x = [2.0f64, 3.0];
    let cube = kron_power(&x, 3)?;
    for key in [[3u32, 0], [2, 1], [1, 2], [0, 3]] {
        let pos = index_of(&key, 2, 3)?;
        println!(
            "  x1^{} x2^{} = {}  (slot {} of {})",
            key[0],
            key[1],
            cube[pos],
            pos,
            cube.len()
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
