//! Error types for the numeric kernel.

use thiserror::Error;

/// Errors produced by the numeric kernel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    /// An argument was outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An exponent key cannot be realized in the requested Kronecker power.
    #[error("key of total degree {actual} cannot address a power of degree {expected}")]
    UnrealizableKey {
        /// Degree demanded by the Kronecker power.
        expected: u32,
        /// Total degree of the offending key.
        actual: u32,
    },

    /// A flat position fell outside the addressed Kronecker power.
    #[error("index {index} out of range for a power of length {len}")]
    IndexOutOfRange {
        /// Offending flat position.
        index: usize,
        /// Length of the addressed power.
        len: usize,
    },

    /// A computed length does not fit in `usize`.
    #[error("size overflow: {lhs} x {rhs} exceeds addressable length")]
    SizeOverflow {
        /// Left factor of the overflowing product.
        lhs: usize,
        /// Right factor of the overflowing product.
        rhs: usize,
    },

    /// Two matrix operands disagree on shape.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// Shape required by the operation.
        expected: (usize, usize),
        /// Shape that was supplied.
        found: (usize, usize),
    },

    /// A square matrix was required.
    #[error("matrix of shape {rows}x{cols} is not square")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// The eigenvalue iteration exhausted its sweep budget.
    #[error("Jacobi iteration did not converge within {sweeps} sweeps")]
    NoConvergence {
        /// Sweep budget that was exhausted.
        sweeps: usize,
    },
}

/// Convenience alias for kernel results.
pub type MathResult<T> = Result<T, MathError>;
