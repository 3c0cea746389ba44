//! Error types for model construction and Carleman assembly.

use carleman_math::MathError;
use thiserror::Error;

/// Errors from model construction and Carleman assembly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A model needs at least one state variable.
    #[error("invalid model: state dimension must be at least 1")]
    ZeroDimension,

    /// A model needs room for at least linear terms.
    #[error("invalid model: maximum degree must be at least 1")]
    ZeroDegree,

    /// A component index referenced a right-hand side the model does
    /// not have.
    #[error("invalid model: component {component} out of range for dimension {dim}")]
    ComponentOutOfRange {
        /// Offending component index.
        component: usize,
        /// State dimension of the model.
        dim: usize,
    },

    /// An exponent key was sized for a different state dimension.
    #[error("invalid model: exponent key has {found} entries for dimension {dim}")]
    KeyLength {
        /// Entry count of the offending key.
        found: usize,
        /// State dimension of the model.
        dim: usize,
    },

    /// A state vector was sized for a different state dimension.
    #[error("state vector has {found} entries for dimension {dim}")]
    StateLength {
        /// Entry count of the offending vector.
        found: usize,
        /// State dimension of the model.
        dim: usize,
    },

    /// A term's total degree exceeds what the model declares.
    #[error("invalid model: term of degree {degree} exceeds maximum degree {max_degree}")]
    DegreeTooHigh {
        /// Total degree of the offending term.
        degree: u32,
        /// Declared maximum degree of the model.
        max_degree: u32,
    },

    /// The canonical form `Σ F_j x^[j]` starts at degree 1 and cannot
    /// absorb a constant forcing term.
    #[error("invalid model: component {component} carries a nonzero constant term")]
    ConstantTerm {
        /// Component holding the constant.
        component: usize,
    },

    /// A truncation order below 1 keeps no blocks at all.
    #[error("truncation order must be at least 1")]
    ZeroOrder,

    /// Failure inside the numeric kernel.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Convenience alias for modeling results.
pub type ModelResult<T> = Result<T, ModelError>;
