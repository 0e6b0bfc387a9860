//! Collocation differentiation matrices.
//!
//! A differentiation matrix D maps nodal values to nodal derivative values:
//! (du/dx)_i = Σ_j D[i,j] * u_j
//!
//! Off-diagonal entries of every matrix built here share the form
//! D[i,j] = (v_i / v_j) / (x_i - x_j), with v the nodal "barycentric"
//! values of the family. The diagonal is then either fixed by the
//! zero-row-sum condition (derivative of a constant is exactly zero) or
//! assigned from a closed form by the caller.

use crate::error::{Result, SpectralError};
use faer::Mat;

/// Off-diagonal ratio matrix D[i,j] = (v_i / v_j) / (x_i - x_j).
///
/// The diagonal is left at zero.
pub fn ratio_differentiation_matrix(values: &[f64], nodes: &[f64]) -> Mat<f64> {
    let n = nodes.len();
    debug_assert_eq!(values.len(), n);

    Mat::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else {
            values[i] / values[j] / (nodes[i] - nodes[j])
        }
    })
}

/// Overwrite the diagonal with the negated off-diagonal row sum.
///
/// Afterwards every row sums to zero up to the round-off of one summation,
/// independently of how accurately the off-diagonal entries were computed.
pub fn enforce_zero_row_sum(d: &mut Mat<f64>) {
    for i in 0..d.nrows() {
        let off_diagonal: f64 = (0..d.ncols()).filter(|&j| j != i).map(|j| d[(i, j)]).sum();
        d[(i, i)] = -off_diagonal;
    }
}

/// Differentiation matrix for arbitrary distinct nodes.
///
/// With ω_i = Π_{k≠i} (x_i - x_k):
/// D[i,j] = ω_i / ω_j / (x_i - x_j) for i ≠ j, diagonal from the
/// zero-row-sum condition.
pub fn barycentric_differentiation_matrix(nodes: &[f64]) -> Mat<f64> {
    let n = nodes.len();
    // Distance matrix with the identity on the diagonal
    let distance = Mat::from_fn(n, n, |i, j| {
        if i == j {
            1.0
        } else {
            nodes[i] - nodes[j]
        }
    });
    let omega: Vec<f64> = (0..n)
        .map(|i| (0..n).map(|j| distance[(i, j)]).product())
        .collect();

    let mut d = Mat::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else {
            omega[i] / distance[(i, j)] / omega[j]
        }
    });
    enforce_zero_row_sum(&mut d);
    d
}

/// Apply a differentiation matrix to nodal values.
pub fn apply(d: &Mat<f64>, values: &[f64]) -> Result<Vec<f64>> {
    if d.ncols() != values.len() {
        return Err(SpectralError::dimension_mismatch(
            format!("{} values", d.ncols()),
            format!("{} values", values.len()),
        ));
    }

    let mut out = vec![0.0; d.nrows()];
    for (i, o) in out.iter_mut().enumerate() {
        *o = values.iter().enumerate().map(|(j, &u)| d[(i, j)] * u).sum();
    }
    Ok(out)
}

/// Largest absolute row sum of `d`.
pub fn max_abs_row_sum(d: &Mat<f64>) -> f64 {
    (0..d.nrows())
        .map(|i| (0..d.ncols()).map(|j| d[(i, j)]).sum::<f64>().abs())
        .fold(0.0, f64::max)
}
