//! Spectral differentiation operators.
//!
//! This module provides the dense kernels shared by the quadrature rules:
//! - Barycentric differentiation matrices for arbitrary nodes
//! - Ratio matrices built from nodal values of a generating polynomial
//! - The zero-row-sum diagonal correction

mod differentiation;

pub use differentiation::{
    apply, barycentric_differentiation_matrix, enforce_zero_row_sum, max_abs_row_sum,
    ratio_differentiation_matrix,
};
