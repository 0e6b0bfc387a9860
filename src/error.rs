//! Error types for polynomial evaluation and quadrature construction.

use thiserror::Error;

/// Errors reported by evaluators, quadrature solvers and grid builders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    /// A shape or decay parameter lies outside its admissible range.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A size argument is below its minimum.
    #[error("Invalid size {name} = {value}: must be at least {min}")]
    InvalidSize {
        name: &'static str,
        value: usize,
        min: usize,
    },

    /// Normalisation was requested over an empty point set.
    #[error("Cannot normalise over an empty point set")]
    EmptyPoints,

    /// The dense symmetric eigensolver failed.
    #[error("Eigendecomposition failed: {0}")]
    Eigendecomposition(String),

    /// Vector or matrix dimensions do not agree.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },
}

impl SpectralError {
    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub(crate) fn size_at_least(name: &'static str, value: usize, min: usize) -> Result<()> {
        if value < min {
            return Err(Self::InvalidSize { name, value, min });
        }
        Ok(())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SpectralError>;
