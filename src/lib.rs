//! # specquad
//!
//! Orthogonal polynomials, Gauss quadrature and spectral differentiation
//! matrices for pseudo-spectral methods.
//!
//! This crate provides the building blocks a spectral PDE discretisation
//! consumes:
//! - Orthonormal Jacobi polynomials on [-1, 1]
//! - Hermite polynomials and Hermite functions on the real line
//! - Jacobi-Gauss and Jacobi-Gauss-Lobatto rules (nodes, weights,
//!   differentiation matrix)
//! - Hermite-Gauss rules for Gaussian-decaying functions
//! - Tensor-product collocation grids and 2D product quadrature
//!
//! Every function is a pure computation: identical inputs give identical
//! outputs and nothing is cached between calls.
//!
//! ```no_run
//! use specquad::{JacobiParams, jacobi_gauss_lobatto};
//!
//! let rule = jacobi_gauss_lobatto(JacobiParams::legendre(), 4).unwrap();
//! let u: Vec<f64> = rule.nodes.iter().map(|x| x * x).collect();
//! let du = rule.differentiate(&u).unwrap();
//! assert!((du[4] - 2.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod grid;
pub mod operators;
pub mod polynomial;
pub mod quadrature;

// Re-export main types for convenience
pub use error::{Result, SpectralError};
pub use grid::{
    CollocationPoints, Indexing, TensorRule2D, collocation_points, linspace, meshgrid,
    tensor_product,
};
pub use polynomial::{
    JacobiParams, PolynomialValues, Rows, hermite_functions, hermite_polynomials,
    orthonormal_jacobi,
};
pub use quadrature::{
    DEFAULT_DECAY, HermiteGauss, QuadratureRule, hermite_gauss, hermite_nodes_weights,
    jacobi_gauss, jacobi_gauss_lobatto,
};
