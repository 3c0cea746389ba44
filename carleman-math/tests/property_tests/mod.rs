//! Property-based tests for carleman-math
//!
//! This module contains property tests for:
//! - Monomial indexing inside Kronecker powers
//! - Kronecker products and powers
//! - Operator and logarithmic norms

mod index_properties;
mod kron_properties;
mod norm_properties;
