//! Golub-Welsch: Gauss nodes and weights from the Jacobi matrix.
//!
//! For a symmetric tridiagonal recurrence matrix T, the Gauss nodes are
//! the eigenvalues of T and the weights are μ_0 * v_0², where v_0 is the
//! first component of the corresponding normalised eigenvector and μ_0 the
//! total mass of the weight function.

use crate::error::{Result, SpectralError};
use faer::{Mat, Side};

/// Eigenvalues of the symmetric tridiagonal matrix with the given diagonal
/// and off-diagonal, in increasing order, paired with the squared first
/// components of their unit eigenvectors.
pub(crate) fn golub_welsch(diagonal: &[f64], off_diagonal: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    let n = diagonal.len();
    debug_assert_eq!(off_diagonal.len() + 1, n.max(1));

    let t = Mat::from_fn(n, n, |i, j| {
        if i == j {
            diagonal[i]
        } else if i == j + 1 {
            off_diagonal[j]
        } else if j == i + 1 {
            off_diagonal[i]
        } else {
            0.0
        }
    });

    let evd = t
        .as_ref()
        .self_adjoint_eigen(Side::Lower)
        .map_err(|e| SpectralError::Eigendecomposition(format!("{e:?}")))?;
    let eigenvalues = evd.S().column_vector();
    let eigenvectors = evd.U();

    let mut pairs: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let v0 = eigenvectors[(0, k)];
            (eigenvalues[k], v0 * v0)
        })
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(pairs.into_iter().unzip())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two() {
        // [[0, 1], [1, 0]] has eigenpairs ∓1 with v = (1, ∓1)/sqrt(2)
        let (values, first) = golub_welsch(&[0.0, 0.0], &[1.0]).unwrap();
        assert!((values[0] + 1.0).abs() < 1e-14);
        assert!((values[1] - 1.0).abs() < 1e-14);
        assert!((first[0] - 0.5).abs() < 1e-14);
        assert!((first[1] - 0.5).abs() < 1e-14);
    }

    #[test]
    fn test_first_components_sum_to_one() {
        let diagonal = [0.3, -0.1, 0.2, 0.0, 0.5];
        let off = [0.4, 0.6, 0.5, 0.45];
        let (values, first) = golub_welsch(&diagonal, &off).unwrap();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        let sum: f64 = first.iter().sum();
        assert!((sum - 1.0).abs() < 1e-14);
        // Trace is preserved
        let trace: f64 = values.iter().sum();
        assert!((trace - 0.9).abs() < 1e-13);
    }

    #[test]
    fn test_single_entry() {
        let (values, first) = golub_welsch(&[0.25], &[]).unwrap();
        assert_eq!(values.len(), 1);
        assert!((values[0] - 0.25).abs() < 1e-15);
        assert!((first[0] - 1.0).abs() < 1e-15);
    }
}
