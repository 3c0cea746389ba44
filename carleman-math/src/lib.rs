//! Numeric kernel for Carleman linearization.
//!
//! The crate provides the pieces shared by every stage of the
//! embedding of a polynomial ODE into a linear system on Kronecker
//! powers:
//!
//! - [`index`]: the bijection between exponent vectors and canonical
//!   positions inside Kronecker powers, plus slot multiplicities
//! - [`kron`]: Kronecker products and powers of coefficient vectors
//! - [`combinatorics`]: exact factorials, binomials, and multinomials
//! - [`sparse`]: coordinate-format matrices for transfer assembly
//! - [`dense`] / [`eigen`]: dense staging and Jacobi eigenvalues for
//!   the spectral logarithmic norm
//! - [`norms`]: operator and logarithmic norms for `p ∈ {1, 2, ∞}`
//!
//! All numeric entry points are generic over [`Coefficient`], which is
//! implemented for `f32`, `f64`, and their `num_complex` counterparts.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod combinatorics;
pub mod dense;
pub mod eigen;
pub mod error;
pub mod index;
pub mod kron;
pub mod norms;
pub mod scalar;
pub mod sparse;

pub use dense::DenseMatrix;
pub use eigen::hermitian_eigenvalues;
pub use error::{MathError, MathResult};
pub use index::{index_of, key_of, multiplicity, power_len, MultiIndex};
pub use kron::{kron_power, kron_prod};
pub use norms::{inf_norm, log_norm, log_norm_sparse, one_norm, operator_norm, OperatorNorm};
pub use scalar::Coefficient;
pub use sparse::CooMatrix;
