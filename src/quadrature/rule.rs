//! The quadrature rule value type.

use crate::error::{Result, SpectralError};
use crate::operators;
use faer::Mat;

/// Nodes, weights and first-derivative matrix of a quadrature rule.
///
/// `weights[i]` belongs to `nodes[i]`, and `differentiation` maps values
/// sampled at `nodes` to derivative values at the same nodes.
#[derive(Clone, Debug)]
pub struct QuadratureRule {
    /// Quadrature nodes
    pub nodes: Vec<f64>,
    /// Quadrature weights
    pub weights: Vec<f64>,
    /// First-order differentiation matrix: D[i,j] = dℓ_j/dx at node i
    pub differentiation: Mat<f64>,
}

impl QuadratureRule {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of the weights, the discrete measure of the whole domain.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Weighted sum Σ w_i f_i of nodal values.
    pub fn integrate(&self, values: &[f64]) -> Result<f64> {
        if values.len() != self.len() {
            return Err(SpectralError::dimension_mismatch(
                format!("{} values", self.len()),
                format!("{} values", values.len()),
            ));
        }
        Ok(self.weights.iter().zip(values).map(|(w, f)| w * f).sum())
    }

    /// Weighted sum Σ w_i f(x_i).
    pub fn integrate_fn(&self, f: impl Fn(f64) -> f64) -> f64 {
        self.nodes
            .iter()
            .zip(&self.weights)
            .map(|(&x, &w)| w * f(x))
            .sum()
    }

    /// Nodal derivative D u.
    pub fn differentiate(&self, values: &[f64]) -> Result<Vec<f64>> {
        operators::apply(&self.differentiation, values)
    }

    /// Diagonal mass matrix M = diag(w).
    pub fn mass_matrix(&self) -> Mat<f64> {
        let n = self.len();
        Mat::from_fn(n, n, |i, j| if i == j { self.weights[i] } else { 0.0 })
    }

    /// Inverse of the diagonal mass matrix.
    pub fn mass_matrix_inv(&self) -> Mat<f64> {
        let n = self.len();
        Mat::from_fn(n, n, |i, j| if i == j { 1.0 / self.weights[i] } else { 0.0 })
    }

    /// Largest absolute row sum of the differentiation matrix.
    pub fn max_row_sum(&self) -> f64 {
        operators::max_abs_row_sum(&self.differentiation)
    }
}
