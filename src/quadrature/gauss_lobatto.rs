//! Jacobi-Gauss-Lobatto quadrature.
//!
//! The N+1 Gauss-Lobatto nodes are x = ±1 together with the zeros of
//! d/dx J_N^{α,β}. Since d/dx J_N^{α,β} ∝ J_{N-1}^{α+1,β+1}, the interior
//! nodes are exactly the (N-1)-point Gauss nodes of the shifted family.

use super::jacobi_gauss::jacobi_gauss_nodes_weights;
use super::rule::QuadratureRule;
use crate::error::{Result, SpectralError};
use crate::operators::barycentric_differentiation_matrix;
use crate::polynomial::{JacobiParams, Rows, orthonormal_jacobi};
use libm::lgamma;
use log::debug;
use std::f64::consts::LN_2;

/// Compute the Jacobi-Gauss-Lobatto rule with N+1 nodes.
///
/// `nodes[0] = -1` and `nodes[N] = 1` exactly. For N = 1 only the two
/// endpoints are used and no interior solve takes place.
///
/// Weights: for Legendre (α = β = 0) the canonical formula
/// w_j = (2N+1)/(N(N+1)) / J̃_N(x_j)², with J̃_N the orthonormal Legendre
/// polynomial. For other parameters the interior weights are ŵ_j/(1-x_j²),
/// ŵ being the shifted Gauss weights, and the endpoint weights are
/// evaluated in closed form:
///
/// w(-1) = 2^{α+β+1} (β+1) Γ(β+1)² Γ(N) Γ(N+α+1) / (Γ(N+β+1) Γ(N+α+β+2))
///
/// and w(1) with α and β exchanged.
///
/// The differentiation matrix is built from the nodes alone with the
/// barycentric formula and the zero-row-sum diagonal.
pub fn jacobi_gauss_lobatto(params: JacobiParams, n: usize) -> Result<QuadratureRule> {
    SpectralError::size_at_least("n", n, 1)?;
    debug!(
        "Building Jacobi-Gauss-Lobatto rule: n={}, alpha={}, beta={}",
        n,
        params.alpha(),
        params.beta()
    );

    let (interior_nodes, interior_gauss_weights) = if n >= 2 {
        jacobi_gauss_nodes_weights(params.shifted(1.0)?, n - 1)?
    } else {
        (Vec::new(), Vec::new())
    };

    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(-1.0);
    nodes.extend_from_slice(&interior_nodes);
    nodes.push(1.0);

    let weights = if params.is_legendre() {
        legendre_lobatto_weights(&nodes, n)
    } else {
        jacobi_lobatto_weights(params, n, &interior_nodes, &interior_gauss_weights)
    };

    let differentiation = barycentric_differentiation_matrix(&nodes);

    Ok(QuadratureRule {
        nodes,
        weights,
        differentiation,
    })
}

fn legendre_lobatto_weights(nodes: &[f64], n: usize) -> Vec<f64> {
    let top = orthonormal_jacobi(nodes, JacobiParams::legendre(), n, Rows::Top).into_top_row();
    let scale = (2 * n + 1) as f64 / (n * n + n) as f64;
    top.iter().map(|p| scale / (p * p)).collect()
}

/// Weight at the endpoint where the factor with exponent `own` vanishes,
/// `other` being the exponent of the opposite factor. Evaluated in log
/// space so strongly skewed parameters neither overflow nor cancel.
fn endpoint_weight(own: f64, other: f64, n: usize) -> f64 {
    let nf = n as f64;
    ((own + other + 1.0) * LN_2 + (own + 1.0).ln() + 2.0 * lgamma(own + 1.0) + lgamma(nf)
        + lgamma(nf + other + 1.0)
        - lgamma(nf + own + 1.0)
        - lgamma(nf + own + other + 2.0))
        .exp()
}

fn jacobi_lobatto_weights(
    params: JacobiParams,
    n: usize,
    interior_nodes: &[f64],
    interior_gauss_weights: &[f64],
) -> Vec<f64> {
    let (alpha, beta) = (params.alpha(), params.beta());
    let mut weights = Vec::with_capacity(n + 1);
    weights.push(endpoint_weight(beta, alpha, n));
    weights.extend(
        interior_nodes
            .iter()
            .zip(interior_gauss_weights)
            .map(|(&x, &w)| w / (1.0 - x * x)),
    );
    weights.push(endpoint_weight(alpha, beta, n));
    weights
}
