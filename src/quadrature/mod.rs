//! Gauss-type quadrature rules with spectral differentiation matrices.
//!
//! This module provides:
//! - Jacobi-Gauss rules for the weight (1-x)^α (1+x)^β on [-1, 1]
//! - Jacobi-Gauss-Lobatto rules including both endpoints
//! - Hermite-Gauss rules on the real line, for Hermite functions or
//!   classical Hermite polynomials
//!
//! Each rule is returned as a [`QuadratureRule`] holding nodes, weights and
//! the first-derivative collocation matrix. Nodes are found as eigenvalues
//! of symmetric tridiagonal recurrence matrices (Golub-Welsch).

mod gauss_lobatto;
mod hermite_gauss;
mod jacobi_gauss;
mod rule;
mod tridiagonal;

pub use gauss_lobatto::jacobi_gauss_lobatto;
pub use hermite_gauss::{DEFAULT_DECAY, HermiteGauss, hermite_gauss, hermite_nodes_weights};
pub use jacobi_gauss::jacobi_gauss;
pub use rule::QuadratureRule;
