//! Property-based tests for carleman-core
//!
//! This module contains property tests for:
//! - Agreement between model evaluation and transfer-matrix evaluation
//! - Structure of the truncated Carleman matrix
//! - Exactness of the quadratic reduction

mod pipeline_properties;
