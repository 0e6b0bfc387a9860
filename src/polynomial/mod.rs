//! Orthogonal polynomial evaluation.
//!
//! This module provides:
//! - Orthonormal Jacobi polynomials on [-1, 1] for any α, β > -1
//! - Physicists' Hermite polynomials, optionally normalised over the sample
//! - Hermite functions (Gaussian-weighted Hermite polynomials)
//!
//! Every evaluator returns either the full table of degrees 0..=N or only
//! the degree-N row, selected with [`Rows`].

mod hermite;
mod jacobi;
mod values;

pub use hermite::{hermite_functions, hermite_polynomials};
pub use jacobi::{JacobiParams, orthonormal_jacobi};
pub(crate) use jacobi::recurrence_coefficients;
pub use values::{PolynomialValues, Rows};
