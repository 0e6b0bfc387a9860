//! Orthonormal Jacobi polynomial evaluation.
//!
//! Jacobi polynomials J_n^{α,β}(x) are orthogonal on [-1, 1] with weight
//! ω(x) = (1-x)^α (1+x)^β. The evaluator returns the orthonormal family
//! J_n / sqrt(γ_n), so that ∫ J̃_m J̃_n ω dx = δ_{mn}.
//!
//! α = β = 0 gives the Legendre polynomials, α = β = -1/2 the Chebyshev
//! polynomials of the first kind.

use super::values::{PolynomialValues, Rows, TableBuilder};
use crate::error::{Result, SpectralError};
use libm::{lgamma, tgamma};
use std::f64::consts::LN_2;

/// Above this value of α+β+2 the Gamma functions overflow and the total
/// mass is evaluated in log space.
const GAMMA_OVERFLOW: f64 = 170.0;

/// Validated Jacobi shape parameters (α, β), both strictly greater than -1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JacobiParams {
    alpha: f64,
    beta: f64,
}

impl JacobiParams {
    /// Create parameters, rejecting α ≤ -1, β ≤ -1 and non-finite values.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        check_shape("alpha", alpha)?;
        check_shape("beta", beta)?;
        Ok(Self { alpha, beta })
    }

    /// Legendre parameters α = β = 0.
    pub fn legendre() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
        }
    }

    /// Chebyshev (first kind) parameters α = β = -1/2.
    pub fn chebyshev() -> Self {
        Self {
            alpha: -0.5,
            beta: -0.5,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Parameters (α+k, β+k), validated like [`JacobiParams::new`].
    ///
    /// Any k ≥ 0 succeeds; a negative shift fails once it takes α or β to
    /// -1 or below.
    pub fn shifted(&self, k: f64) -> Result<Self> {
        Self::new(self.alpha + k, self.beta + k)
    }

    /// True for α = β = 0.
    pub fn is_legendre(&self) -> bool {
        self.alpha == 0.0 && self.beta == 0.0
    }

    /// Total mass of the weight: γ_0 = ∫_{-1}^{1} (1-x)^α (1+x)^β dx
    /// = 2^{α+β+1} Γ(α+1) Γ(β+1) / Γ(α+β+2).
    pub fn total_mass(&self) -> f64 {
        let (a, b) = (self.alpha, self.beta);
        if a + b + 2.0 < GAMMA_OVERFLOW {
            2f64.powf(a + b + 1.0) * tgamma(a + 1.0) * tgamma(b + 1.0) / tgamma(a + b + 2.0)
        } else {
            ((a + b + 1.0) * LN_2 + lgamma(a + 1.0) + lgamma(b + 1.0) - lgamma(a + b + 2.0)).exp()
        }
    }

    /// First moment ∫ x ω(x) dx.
    pub fn first_moment(&self) -> f64 {
        self.total_mass() * (self.beta - self.alpha) / (self.alpha + self.beta + 2.0)
    }
}

fn check_shape(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SpectralError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= -1.0 {
        return Err(SpectralError::InvalidParameter {
            name,
            value,
            reason: "must be greater than -1",
        });
    }
    Ok(())
}

/// Coefficients (a_i, b_i) of the orthonormal recurrence
/// a_i J̃_{i+1} = (x - b_i) J̃_i - a_{i-1} J̃_{i-1}.
///
/// These are also the off-diagonal and diagonal entries of the Jacobi
/// matrix. At i = 0 the factors α+β and α+β+1 are cancelled analytically,
/// and every sum is formed from α+1 and β+1, so the coefficients stay
/// accurate as α+β approaches 0, -1 or -2.
pub(crate) fn recurrence_coefficients(alpha: f64, beta: f64, i: usize) -> (f64, f64) {
    let (a1, b1) = (alpha + 1.0, beta + 1.0);
    let s = a1 + b1;
    if i == 0 {
        let a = 2.0 / s * (a1 * b1 / (s + 1.0)).sqrt();
        return (a, (beta - alpha) / s);
    }

    let m = (i + 1) as f64;
    // 2i+α+β
    let h1 = 2.0 * (i - 1) as f64 + s;
    let a = 2.0 / (h1 + 2.0)
        * (m * (m - 2.0 + s) * (m - 1.0 + a1) * (m - 1.0 + b1) / (h1 + 1.0) / (h1 + 3.0)).sqrt();
    let b = (beta - alpha) * (beta + alpha) / (h1 * (h1 + 2.0));
    (a, b)
}

/// Evaluate the orthonormal Jacobi polynomials of degree 0..=n at `x`.
///
/// Degree 0 is the constant 1/sqrt(γ_0), degree 1 the closed-form linear
/// polynomial normalised by γ_1, and higher degrees follow the three-term
/// recurrence with coefficients recomputed at every step.
pub fn orthonormal_jacobi(x: &[f64], params: JacobiParams, n: usize, rows: Rows) -> PolynomialValues {
    let (alpha, beta) = (params.alpha, params.beta);
    let ab = alpha + beta;
    let mut builder = TableBuilder::new(n, x.len(), rows);

    let gamma0 = params.total_mass();
    let mut prev = vec![1.0 / gamma0.sqrt(); x.len()];
    builder.record(0, &prev, 1.0);
    if n == 0 {
        return builder.finish();
    }

    let gamma1 = (alpha + 1.0) * (beta + 1.0) / (ab + 3.0) * gamma0;
    let mut curr: Vec<f64> = x
        .iter()
        .map(|&xj| ((ab + 2.0) * xj / 2.0 + (alpha - beta) / 2.0) / gamma1.sqrt())
        .collect();
    builder.record(1, &curr, 1.0);

    let (mut a_old, _) = recurrence_coefficients(alpha, beta, 0);
    for i in 1..n {
        let (a_new, b_new) = recurrence_coefficients(alpha, beta, i);
        let next: Vec<f64> = x
            .iter()
            .zip(prev.iter().zip(&curr))
            .map(|(&xj, (&p, &c))| (-a_old * p + (xj - b_new) * c) / a_new)
            .collect();
        builder.record(i + 1, &next, 1.0);
        prev = std::mem::replace(&mut curr, next);
        a_old = a_new;
    }

    builder.finish()
}
