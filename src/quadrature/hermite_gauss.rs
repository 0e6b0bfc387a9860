//! Hermite-Gauss quadrature on the whole real line.
//!
//! The rule targets functions of the form v(x) = exp(-(cx)²) u(x). With the
//! default decay c = 1/sqrt(2) this is the Hermite-function setting; c = 0
//! recovers the classical Hermite-polynomial rule with weight exp(-x²).

use super::rule::QuadratureRule;
use super::tridiagonal::golub_welsch;
use crate::error::{Result, SpectralError};
use crate::operators::ratio_differentiation_matrix;
use crate::polynomial::{Rows, hermite_functions, hermite_polynomials};
use log::debug;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Default decay factor c = 1/sqrt(2).
pub const DEFAULT_DECAY: f64 = FRAC_1_SQRT_2;

/// Classical Gauss-Hermite nodes and weights for the weight exp(-x²).
///
/// Golub-Welsch on the Hermite Jacobi matrix (zero diagonal, off-diagonal
/// sqrt(k/2)) with weights sqrt(π) v_0². The result is symmetrised: nodes
/// are exactly antisymmetric, weights exactly symmetric, and the middle node
/// of an odd rule is exactly zero. The weights sum to sqrt(π).
pub fn hermite_nodes_weights(n: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    SpectralError::size_at_least("n", n, 1)?;

    let diagonal = vec![0.0; n];
    let off_diagonal: Vec<f64> = (1..n).map(|k| (k as f64 / 2.0).sqrt()).collect();
    let (mut nodes, first) = golub_welsch(&diagonal, &off_diagonal)?;
    let mut weights: Vec<f64> = first.into_iter().map(|v| v * PI.sqrt()).collect();

    for i in 0..n / 2 {
        let j = n - 1 - i;
        let x = 0.5 * (nodes[j] - nodes[i]);
        nodes[i] = -x;
        nodes[j] = x;
        let w = 0.5 * (weights[i] + weights[j]);
        weights[i] = w;
        weights[j] = w;
    }
    if n % 2 == 1 {
        nodes[n / 2] = 0.0;
    }

    Ok((nodes, weights))
}

/// Configuration for a Hermite-Gauss rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HermiteGauss {
    /// Number of nodes
    pub size: usize,
    /// Decay factor c of exp(-(cx)²)
    pub decay: f64,
}

impl HermiteGauss {
    /// Hermite-function rule with the default decay 1/sqrt(2).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            decay: DEFAULT_DECAY,
        }
    }

    /// Classical Hermite-polynomial rule (c = 0).
    pub fn polynomial(size: usize) -> Self {
        Self { size, decay: 0.0 }
    }

    /// Set the decay factor.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Build nodes, weights and differentiation matrix.
    ///
    /// For c ≠ 0 the weights are the Hermite-function weights
    /// 1/(N ĥ_{N-1}(x_j)²), which integrate u directly:
    /// ∫ u dx ≈ Σ w_j u(x_j). For c = 0 the classical weights are kept.
    ///
    /// With H_j = H̃_{N-1}(x_j) exp(-(c x_j)²) the matrix is
    /// D[i,j] = H_i / H_j / (x_i - x_j) off the diagonal and
    /// D[i,i] = x_i (1 - 2c²).
    ///
    /// Large N with c ≠ 0 can underflow ĥ_{N-1} at the outermost nodes;
    /// the default decay stays finite up to several hundred nodes.
    pub fn build(&self) -> Result<QuadratureRule> {
        let n = self.size;
        let c = self.decay;
        SpectralError::size_at_least("size", n, 1)?;
        if !c.is_finite() || c < 0.0 {
            return Err(SpectralError::InvalidParameter {
                name: "decay",
                value: c,
                reason: "must be finite and non-negative",
            });
        }
        debug!("Building Hermite-Gauss rule: n={}, decay={}", n, c);

        let (nodes, mut weights) = hermite_nodes_weights(n)?;
        if c != 0.0 {
            let h = hermite_functions(&nodes, n - 1, Rows::Top).into_top_row();
            weights = h.iter().map(|v| 1.0 / (v * v * n as f64)).collect();
        }

        let h: Vec<f64> = hermite_polynomials(&nodes, n - 1, true, Rows::Top)?
            .into_top_row()
            .into_iter()
            .zip(&nodes)
            .map(|(p, &x)| p * (-(c * x) * (c * x)).exp())
            .collect();

        let mut differentiation = ratio_differentiation_matrix(&h, &nodes);
        for (i, &x) in nodes.iter().enumerate() {
            differentiation[(i, i)] = x * (1.0 - 2.0 * c * c);
        }

        Ok(QuadratureRule {
            nodes,
            weights,
            differentiation,
        })
    }
}

/// Hermite-Gauss rule of `n` nodes with decay factor `c`.
pub fn hermite_gauss(n: usize, c: f64) -> Result<QuadratureRule> {
    HermiteGauss::new(n).with_decay(c).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_nodes() {
        // H_2 zeros ±1/sqrt(2), weights sqrt(π)/2
        let (nodes, weights) = hermite_nodes_weights(2).unwrap();
        assert!((nodes[1] - FRAC_1_SQRT_2).abs() < 1e-14);
        assert_eq!(nodes[0], -nodes[1]);
        assert!((weights[0] - PI.sqrt() / 2.0).abs() < 1e-14);

        // H_3 zeros 0, ±sqrt(3/2), weights 2sqrt(π)/3, sqrt(π)/6
        let (nodes, weights) = hermite_nodes_weights(3).unwrap();
        assert_eq!(nodes[1], 0.0);
        assert!((nodes[2] - 1.5f64.sqrt()).abs() < 1e-14);
        assert!((weights[1] - 2.0 * PI.sqrt() / 3.0).abs() < 1e-14);
        assert!((weights[0] - PI.sqrt() / 6.0).abs() < 1e-14);
    }

    #[test]
    fn test_classical_weights_sum() {
        for n in 1..=20 {
            let (_, weights) = hermite_nodes_weights(n).unwrap();
            let sum: f64 = weights.iter().sum();
            assert!((sum - PI.sqrt()).abs() < 1e-13, "n = {}", n);
        }
    }

    #[test]
    fn test_symmetry() {
        for n in 1..=12 {
            let rule = HermiteGauss::new(n).build().unwrap();
            for i in 0..n {
                let j = n - 1 - i;
                assert_eq!(rule.nodes[i], -rule.nodes[j]);
                assert!((rule.weights[i] - rule.weights[j]).abs() <= 1e-12 * rule.weights[i]);
            }
        }
    }

    #[test]
    fn test_diagonal_closed_form() {
        let c = DEFAULT_DECAY;
        let rule = hermite_gauss(4, c).unwrap();
        for i in 0..4 {
            assert_eq!(rule.differentiation[(i, i)], rule.nodes[i] * (1.0 - 2.0 * c * c));
        }

        let rule = HermiteGauss::new(5).with_decay(0.3).build().unwrap();
        for i in 0..5 {
            assert_eq!(rule.differentiation[(i, i)], rule.nodes[i] * (1.0 - 2.0 * 0.3 * 0.3));
        }
    }

    #[test]
    fn test_modified_weights_relate_to_classical() {
        // ŵ_j = w_j exp(x_j²)
        let n = 10;
        let (nodes, classical) = hermite_nodes_weights(n).unwrap();
        let rule = HermiteGauss::new(n).build().unwrap();
        for j in 0..n {
            let expected = classical[j] * (nodes[j] * nodes[j]).exp();
            assert!((rule.weights[j] - expected).abs() < 1e-10 * expected);
        }
    }

    #[test]
    fn test_polynomial_rule_keeps_classical_weights() {
        let rule = HermiteGauss::polynomial(6).build().unwrap();
        let (_, classical) = hermite_nodes_weights(6).unwrap();
        assert_eq!(rule.weights, classical);
        for i in 0..6 {
            assert_eq!(rule.differentiation[(i, i)], rule.nodes[i]);
        }
    }

    #[test]
    fn test_single_node() {
        let rule = HermiteGauss::new(1).build().unwrap();
        assert_eq!(rule.nodes, vec![0.0]);
        assert!((rule.weights[0] - PI.sqrt()).abs() < 1e-14);
        assert_eq!(rule.differentiation[(0, 0)], 0.0);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            HermiteGauss::new(0).build(),
            Err(SpectralError::InvalidSize { .. })
        ));
        assert!(matches!(
            HermiteGauss::new(4).with_decay(-0.1).build(),
            Err(SpectralError::InvalidParameter { .. })
        ));
        assert!(matches!(
            HermiteGauss::new(4).with_decay(f64::NAN).build(),
            Err(SpectralError::InvalidParameter { .. })
        ));
    }
}
