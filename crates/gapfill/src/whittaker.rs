//! Penalized least-squares smoother over a banded system.
//!
//! Minimizes `sum w_i (z_i - x_i)^2 + lambda * ||D z||^2` where `D` is the
//! second-difference operator extended past both ends of the axis (the
//! extension rows anchor the solution toward zero where no data pulls back,
//! which keeps the system positive definite for every weight vector,
//! including all-zero). The normal equations `(W + lambda D'D) z = W x`
//! form a symmetric pentadiagonal system solved by a banded Cholesky
//! factorization.

use crate::error::GapFillError;

/// Smooths `x` under per-position weights.
///
/// `weights[i] = 1.0` pins position `i` to the data in the least-squares
/// sense; `weights[i] = 0.0` lets the penalty interpolate through it. The
/// value of `x` at zero-weight positions only affects conditioning, not the
/// solution.
///
/// # Panics
///
/// Panics if `x` and `weights` differ in length (caller's responsibility).
///
/// # Errors
///
/// Returns [`GapFillError::SingularSystem`] if the factorization hits a
/// non-positive pivot. With a positive `lambda` this indicates non-finite
/// input rather than a representable degenerate series.
pub fn whittaker_smooth(
    x: &[f64],
    weights: &[f64],
    lambda: f64,
) -> Result<Vec<f64>, GapFillError> {
    assert_eq!(
        x.len(),
        weights.len(),
        "whittaker_smooth: x and weights must have equal length"
    );
    let n = x.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    // W + lambda * D'D. The extended D makes D'D a uniform Toeplitz band
    // [1, -4, 6, -4, 1], so only the diagonal varies with the weights.
    let diag: Vec<f64> = weights.iter().map(|&w| w + 6.0 * lambda).collect();
    let sub1 = vec![-4.0 * lambda; n.saturating_sub(1)];
    let sub2 = vec![lambda; n.saturating_sub(2)];

    let rhs: Vec<f64> = x.iter().zip(weights).map(|(&xi, &wi)| wi * xi).collect();

    let factor = cholesky_penta(&diag, &sub1, &sub2)?;
    Ok(factor.solve(&rhs))
}

/// Banded Cholesky factor `L` (bandwidth 2) of a symmetric pentadiagonal
/// matrix, stored by band.
struct PentaCholesky {
    /// `L[i][i]`.
    diag: Vec<f64>,
    /// `L[i+1][i]`.
    sub1: Vec<f64>,
    /// `L[i+2][i]`.
    sub2: Vec<f64>,
}

/// Factors a symmetric pentadiagonal matrix given by its lower bands.
fn cholesky_penta(
    diag: &[f64],
    sub1: &[f64],
    sub2: &[f64],
) -> Result<PentaCholesky, GapFillError> {
    let n = diag.len();
    let mut ld = vec![0.0; n];
    let mut l1 = vec![0.0; sub1.len()];
    let mut l2 = vec![0.0; sub2.len()];

    for j in 0..n {
        let mut pivot = diag[j];
        if j >= 1 {
            pivot -= l1[j - 1] * l1[j - 1];
        }
        if j >= 2 {
            pivot -= l2[j - 2] * l2[j - 2];
        }
        if pivot <= 0.0 || !pivot.is_finite() {
            return Err(GapFillError::SingularSystem { row: j });
        }
        ld[j] = pivot.sqrt();

        if j + 1 < n {
            let mut s = sub1[j];
            if j >= 1 {
                s -= l2[j - 1] * l1[j - 1];
            }
            l1[j] = s / ld[j];
        }
        if j + 2 < n {
            // L[j+2][k] vanishes for k < j, so no cross terms remain.
            l2[j] = sub2[j] / ld[j];
        }
    }

    Ok(PentaCholesky {
        diag: ld,
        sub1: l1,
        sub2: l2,
    })
}

impl PentaCholesky {
    /// Solves `L L' z = b` by forward then backward substitution.
    fn solve(&self, b: &[f64]) -> Vec<f64> {
        let n = b.len();
        let mut y = vec![0.0; n];
        for i in 0..n {
            let mut s = b[i];
            if i >= 1 {
                s -= self.sub1[i - 1] * y[i - 1];
            }
            if i >= 2 {
                s -= self.sub2[i - 2] * y[i - 2];
            }
            y[i] = s / self.diag[i];
        }

        let mut z = vec![0.0; n];
        for i in (0..n).rev() {
            let mut s = y[i];
            if i + 1 < n {
                s -= self.sub1[i] * z[i + 1];
            }
            if i + 2 < n {
                s -= self.sub2[i] * z[i + 2];
            }
            z[i] = s / self.diag[i];
        }
        z
    }
}
