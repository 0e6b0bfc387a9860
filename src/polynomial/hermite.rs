//! Hermite polynomials and Hermite functions on the real line.
//!
//! Physicists' Hermite polynomials H_n(x) are orthogonal on (-∞, ∞) with
//! weight exp(-x²):
//! H_0 = 1, H_1 = 2x, H_{n+1} = 2x H_n - 2n H_{n-1}
//!
//! Hermite functions ĥ_n(x) = H_n(x) exp(-x²/2) / sqrt(2^n n! sqrt(π)) are
//! orthonormal with weight 1 and are evaluated with their own recurrence so
//! the Gaussian factor never has to be applied to a huge polynomial value.

use super::values::{PolynomialValues, Rows, TableBuilder};
use crate::error::{Result, SpectralError};
use log::trace;
use std::f64::consts::{PI, SQRT_2};

fn l2_norm(row: &[f64]) -> f64 {
    row.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Evaluate Hermite polynomials of degree 0..=n at `x`.
///
/// With `normalized`, every returned row is divided by its own discrete L2
/// norm over the sample points. The norms are measured numerically rather
/// than taken from the factorial formula, so they match the sample exactly.
/// Internally the two live recurrence rows share a running scale, which
/// keeps high degrees from overflowing before they are normalised.
///
/// A row whose discrete norm is zero (e.g. an odd degree sampled only at
/// x = 0) is returned unscaled.
pub fn hermite_polynomials(
    x: &[f64],
    n: usize,
    normalized: bool,
    rows: Rows,
) -> Result<PolynomialValues> {
    if normalized && x.is_empty() {
        return Err(SpectralError::EmptyPoints);
    }

    let mut builder = TableBuilder::new(n, x.len(), rows);
    let mut record = |degree: usize, row: &[f64]| {
        let norm = if normalized { l2_norm(row) } else { 1.0 };
        if norm > 0.0 {
            builder.record(degree, row, 1.0 / norm);
        } else {
            trace!("Hermite row {} has zero norm, left unscaled", degree);
            builder.record(degree, row, 1.0);
        }
        norm
    };

    let mut prev = vec![1.0; x.len()];
    record(0, &prev[..]);
    if n == 0 {
        return Ok(builder.finish());
    }

    let mut curr: Vec<f64> = x.iter().map(|&xj| 2.0 * xj).collect();
    for i in 1..n {
        let two_i = 2.0 * i as f64;
        let mut next: Vec<f64> = x
            .iter()
            .zip(prev.iter().zip(&curr))
            .map(|(&xj, (&p, &c))| 2.0 * xj * c - two_i * p)
            .collect();

        let norm = record(i, &curr[..]);
        if normalized && norm > 0.0 {
            curr.iter_mut().for_each(|c| *c /= norm);
            next.iter_mut().for_each(|v| *v /= norm);
        }
        prev = std::mem::replace(&mut curr, next);
    }
    record(n, &curr[..]);

    Ok(builder.finish())
}

/// Evaluate the Hermite functions ĥ_0..=ĥ_n at `x`.
///
/// ĥ_0 = exp(-x²/2) / π^{1/4}, ĥ_1 = sqrt(2) x ĥ_0 and
/// ĥ_{i+1} = sqrt(2/(i+1)) x ĥ_i - sqrt(i/(i+1)) ĥ_{i-1}.
///
/// ĥ_0 underflows to zero for |x| beyond roughly 38, and every higher
/// degree follows it there.
pub fn hermite_functions(x: &[f64], n: usize, rows: Rows) -> PolynomialValues {
    let mut builder = TableBuilder::new(n, x.len(), rows);

    let mut prev: Vec<f64> = x
        .iter()
        .map(|&xj| (-xj * xj / 2.0).exp() / PI.powf(0.25))
        .collect();
    builder.record(0, &prev, 1.0);
    if n == 0 {
        return builder.finish();
    }

    let mut curr: Vec<f64> = x
        .iter()
        .zip(&prev)
        .map(|(&xj, &p)| SQRT_2 * xj * p)
        .collect();
    builder.record(1, &curr, 1.0);

    for i in 1..n {
        let k = i as f64;
        let c1 = (2.0 / (k + 1.0)).sqrt();
        let c2 = (k / (k + 1.0)).sqrt();
        let next: Vec<f64> = x
            .iter()
            .zip(prev.iter().zip(&curr))
            .map(|(&xj, (&p, &c))| c1 * xj * c - c2 * p)
            .collect();
        builder.record(i + 1, &next, 1.0);
        prev = std::mem::replace(&mut curr, next);
    }

    builder.finish()
}
