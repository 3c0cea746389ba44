//! Carleman linearization of polynomial ODEs.
//!
//! A polynomial right-hand side `f(x) = Σ_j F_j x^[j]` acts linearly
//! on the Kronecker powers of the state. This crate builds the pieces
//! of that correspondence on top of [`carleman_math`]:
//!
//! - [`model`]: polynomial vector fields with per-component term maps
//! - [`transfer`]: assembly of the transfer matrices `F_1 .. F_k`
//! - [`embedding`]: the truncated Carleman matrix on stacked powers
//! - [`reduction`]: the exact quadratic reduction of a degree-`k`
//!   system
//! - [`analysis`]: scalar convergence characteristics
//! - [`library`]: stock systems for tests and experiments
//!
//! ```
//! use carleman_core::{characteristics, library, transfer_matrices};
//!
//! let model = library::vanderpol(1.0_f64)?;
//! let transfer = transfer_matrices(&model)?;
//! let report = characteristics(&transfer)?;
//! assert_eq!(report.transfer_norms.len(), 3);
//! # Ok::<(), carleman_core::ModelError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
pub mod embedding;
pub mod error;
pub mod library;
pub mod model;
pub mod reduction;
pub mod transfer;

pub use analysis::{characteristics, Characteristics};
pub use embedding::{lift_point, lifted_dim, transfer_sum, truncated_matrix};
pub use error::{ModelError, ModelResult};
pub use model::PolynomialOde;
pub use reduction::{quadratic_reduction, QuadraticSystem};
pub use transfer::{eval_transfer, transfer_matrices, TransferMatrices};

pub use carleman_math::{Coefficient, CooMatrix, MultiIndex, OperatorNorm};
