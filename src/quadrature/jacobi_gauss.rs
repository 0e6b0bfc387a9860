//! Jacobi-Gauss quadrature.
//!
//! The N Gauss nodes for the weight (1-x)^α (1+x)^β are the zeros of
//! J_N^{α,β}. They are computed as eigenvalues of the symmetric
//! tridiagonal Jacobi matrix A_N built from the orthonormal recurrence:
//!
//! A[k,k]   = (β² - α²) / ((2k+α+β)(2k+α+β+2))
//! A[k,k+1] = 2/(2k+α+β+2) * sqrt((k+1)(k+1+α+β)(k+1+α)(k+1+β)
//!                                 / ((2k+α+β+1)(2k+α+β+3)))
//!
//! At k = 0 both entries carry a factor α+β (resp. α+β+1) that cancels
//! analytically but vanishes numerically near α+β ∈ {0, -1, -2}. The
//! entries come from the shared recurrence coefficients, which always use
//! the cancelled forms A[0,0] = (β-α)/(α+β+2) and
//! A[0,1] = 2/(α+β+2) sqrt((α+1)(β+1)/(α+β+3)), so the matrix is continuous
//! in (α, β) over the whole admissible range.

use super::rule::QuadratureRule;
use super::tridiagonal::golub_welsch;
use crate::error::{Result, SpectralError};
use crate::operators::{enforce_zero_row_sum, ratio_differentiation_matrix};
use crate::polynomial::{JacobiParams, Rows, orthonormal_jacobi, recurrence_coefficients};
use faer::Mat;
use log::debug;

/// Diagonal and off-diagonal of the N×N Jacobi matrix.
pub(crate) fn jacobi_matrix(params: JacobiParams, n: usize) -> (Vec<f64>, Vec<f64>) {
    let (alpha, beta) = (params.alpha(), params.beta());
    let diagonal = (0..n)
        .map(|k| recurrence_coefficients(alpha, beta, k).1)
        .collect();
    let off_diagonal = (0..n.saturating_sub(1))
        .map(|k| recurrence_coefficients(alpha, beta, k).0)
        .collect();
    (diagonal, off_diagonal)
}

/// Jacobi-Gauss nodes and weights without the differentiation matrix.
pub(crate) fn jacobi_gauss_nodes_weights(
    params: JacobiParams,
    n: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    SpectralError::size_at_least("n", n, 1)?;
    let mass = params.total_mass();

    if n == 1 {
        // the mean (β-α)/(α+β+2)
        let (_, node) = recurrence_coefficients(params.alpha(), params.beta(), 0);
        return Ok((vec![node], vec![mass]));
    }

    let (diagonal, off_diagonal) = jacobi_matrix(params, n);
    let (nodes, first) = golub_welsch(&diagonal, &off_diagonal)?;
    let weights = first.into_iter().map(|v| v * mass).collect();
    Ok((nodes, weights))
}

/// Compute the N-point Jacobi-Gauss rule for the weight (1-x)^α (1+x)^β.
///
/// The differentiation matrix uses d/dx J_N^{α,β} ∝ J_{N-1}^{α+1,β+1}:
/// D[i,j] = l(x_i) / l(x_j) / (x_i - x_j) with l = J̃_{N-1}^{α+1,β+1},
/// and the diagonal set from the zero-row-sum condition.
///
/// For N = 1 the single node is (β-α)/(α+β+2) carrying the total mass.
pub fn jacobi_gauss(params: JacobiParams, n: usize) -> Result<QuadratureRule> {
    SpectralError::size_at_least("n", n, 1)?;
    debug!(
        "Building Jacobi-Gauss rule: n={}, alpha={}, beta={}",
        n,
        params.alpha(),
        params.beta()
    );

    let (nodes, weights) = jacobi_gauss_nodes_weights(params, n)?;
    if n == 1 {
        return Ok(QuadratureRule {
            nodes,
            weights,
            differentiation: Mat::zeros(1, 1),
        });
    }

    let l = orthonormal_jacobi(&nodes, params.shifted(1.0)?, n - 1, Rows::Top).into_top_row();
    let mut differentiation = ratio_differentiation_matrix(&l, &nodes);
    enforce_zero_row_sum(&mut differentiation);

    Ok(QuadratureRule {
        nodes,
        weights,
        differentiation,
    })
}
