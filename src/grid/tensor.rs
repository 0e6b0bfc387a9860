//! Tensor-product quadrature on rectangles.
//!
//! Nodes are ordered lexicographically: y varies slowest (outer), x varies
//! fastest (inner), so node k = j * n_x + i sits at (x_i, y_j) with weight
//! w_i * w_j.

use crate::error::{Result, SpectralError};
use crate::quadrature::QuadratureRule;

/// Two-dimensional tensor-product rule.
#[derive(Clone, Debug)]
pub struct TensorRule2D {
    /// Nodes (x, y) in lexicographic order
    pub nodes: Vec<(f64, f64)>,
    /// Product weights
    pub weights: Vec<f64>,
    /// Number of nodes along x
    pub n_x: usize,
    /// Number of nodes along y
    pub n_y: usize,
}

/// Combine two 1D rules into a tensor-product rule.
pub fn tensor_product(rule_x: &QuadratureRule, rule_y: &QuadratureRule) -> TensorRule2D {
    let n_x = rule_x.len();
    let n_y = rule_y.len();
    let mut nodes = Vec::with_capacity(n_x * n_y);
    let mut weights = Vec::with_capacity(n_x * n_y);

    for (&y, &w_y) in rule_y.nodes.iter().zip(&rule_y.weights) {
        for (&x, &w_x) in rule_x.nodes.iter().zip(&rule_x.weights) {
            nodes.push((x, y));
            weights.push(w_x * w_y);
        }
    }

    TensorRule2D {
        nodes,
        weights,
        n_x,
        n_y,
    }
}

impl TensorRule2D {
    /// Index of node (x_i, y_j).
    #[inline]
    pub fn node_index(&self, i: usize, j: usize) -> usize {
        j * self.n_x + i
    }

    /// 1D indices (i, j) of node k.
    #[inline]
    pub fn node_indices(&self, k: usize) -> (usize, usize) {
        (k % self.n_x, k / self.n_x)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Weighted sum of nodal values.
    pub fn integrate(&self, values: &[f64]) -> Result<f64> {
        if values.len() != self.len() {
            return Err(SpectralError::dimension_mismatch(
                format!("{} values", self.len()),
                format!("{} values", values.len()),
            ));
        }
        Ok(self.weights.iter().zip(values).map(|(w, f)| w * f).sum())
    }

    /// Weighted sum Σ w_k f(x_k, y_k).
    pub fn integrate_fn(&self, f: impl Fn(f64, f64) -> f64) -> f64 {
        self.nodes
            .iter()
            .zip(&self.weights)
            .map(|(&(x, y), &w)| w * f(x, y))
            .sum()
    }
}
