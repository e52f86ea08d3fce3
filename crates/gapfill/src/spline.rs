//! Natural cubic spline through observed positions.

/// A natural cubic spline: piecewise cubic through the knots with zero
/// second derivative at both endpoints.
///
/// Knot second derivatives come from the standard tridiagonal system solved
/// with the Thomas algorithm. Evaluation outside the knot range extends the
/// first/last segment polynomial.
#[derive(Debug, Clone)]
pub struct NaturalCubic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot; zero at both ends.
    m: Vec<f64>,
}

impl NaturalCubic {
    /// Fits a natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// Two knots degenerate to a straight line. A well-posed natural cubic
    /// needs at least 4 knots; with fewer, callers should prefer a
    /// different estimator.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 2 knots are given, lengths differ, or `xs` is
    /// not strictly increasing (caller's responsibility: knots are
    /// positions on the daily axis).
    pub fn fit(xs: &[f64], ys: &[f64]) -> Self {
        assert_eq!(xs.len(), ys.len(), "NaturalCubic: xs and ys length mismatch");
        assert!(xs.len() >= 2, "NaturalCubic: need at least 2 knots");
        assert!(
            xs.windows(2).all(|w| w[1] > w[0]),
            "NaturalCubic: xs must be strictly increasing"
        );

        let n = xs.len();
        let mut m = vec![0.0; n];

        if n > 2 {
            // Tridiagonal system for the n-2 interior second derivatives.
            let k = n - 2;
            let mut diag = vec![0.0; k];
            let mut sup = vec![0.0; k];
            let mut rhs = vec![0.0; k];

            for i in 1..n - 1 {
                let h0 = xs[i] - xs[i - 1];
                let h1 = xs[i + 1] - xs[i];
                diag[i - 1] = 2.0 * (h0 + h1);
                sup[i - 1] = h1;
                rhs[i - 1] =
                    6.0 * ((ys[i + 1] - ys[i]) / h1 - (ys[i] - ys[i - 1]) / h0);
            }

            // Thomas sweep; the matrix is strictly diagonally dominant, so
            // no pivoting is needed. The sub-diagonal entry for row i is
            // h0 = xs[i] - xs[i-1], i.e. the previous row's sup mirror.
            for i in 1..k {
                let sub = xs[i + 1] - xs[i];
                let factor = sub / diag[i - 1];
                diag[i] -= factor * sup[i - 1];
                rhs[i] -= factor * rhs[i - 1];
            }
            m[k] = rhs[k - 1] / diag[k - 1];
            for i in (1..k).rev() {
                m[i] = (rhs[i - 1] - sup[i - 1] * m[i + 1]) / diag[i - 1];
            }
        }

        Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        }
    }

    /// Evaluates the spline at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let seg = self
            .xs
            .partition_point(|&knot| knot <= x)
            .saturating_sub(1)
            .min(n - 2);

        let h = self.xs[seg + 1] - self.xs[seg];
        let t = x - self.xs[seg];
        let (m0, m1) = (self.m[seg], self.m[seg + 1]);
        let b = (self.ys[seg + 1] - self.ys[seg]) / h - h * (2.0 * m0 + m1) / 6.0;

        self.ys[seg] + b * t + m0 / 2.0 * t * t + (m1 - m0) / (6.0 * h) * t * t * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reproduces_knots() {
        let xs = [0.0, 3.0, 7.0, 12.0, 20.0];
        let ys = [0.3, 0.5, 0.2, 0.6, 0.4];
        let spline = NaturalCubic::fit(&xs, &ys);
        for (&x, &y) in xs.iter().zip(&ys) {
            assert_relative_eq!(spline.eval(x), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn linear_data_stays_linear() {
        let xs = [0.0, 1.0, 4.0, 9.0];
        let ys: Vec<f64> = xs.iter().map(|&x| 0.1 + 0.05 * x).collect();
        let spline = NaturalCubic::fit(&xs, &ys);
        for i in 0..=18 {
            let x = i as f64 * 0.5;
            assert_relative_eq!(spline.eval(x), 0.1 + 0.05 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn known_interior_values() {
        // Knots (0,0), (1,1), (2,0), (3,1): interior second derivatives are
        // -4 and 4, giving S(0.5) = 0.75 and S(1.5) = 0.5 by hand.
        let spline = NaturalCubic::fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0]);
        assert_relative_eq!(spline.eval(0.5), 0.75, epsilon = 1e-12);
        assert_relative_eq!(spline.eval(1.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn two_knots_is_a_line() {
        let spline = NaturalCubic::fit(&[0.0, 10.0], &[0.2, 0.7]);
        assert_relative_eq!(spline.eval(5.0), 0.45, epsilon = 1e-12);
        assert_relative_eq!(spline.eval(2.0), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn extends_end_segments() {
        let spline = NaturalCubic::fit(&[0.0, 10.0], &[0.2, 0.7]);
        // Linear segment extended past both ends.
        assert_relative_eq!(spline.eval(-2.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(spline.eval(12.0), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn natural_boundary_second_derivative_is_flat() {
        let xs = [0.0, 2.0, 5.0, 6.0, 9.0];
        let ys = [0.1, 0.8, 0.3, 0.9, 0.2];
        let spline = NaturalCubic::fit(&xs, &ys);

        // Central second difference at the first knot with a small step.
        let eps = 1e-4;
        let d2 = (spline.eval(eps) - 2.0 * spline.eval(0.0) + spline.eval(-eps)) / (eps * eps);
        assert_relative_eq!(d2, 0.0, epsilon = 1e-4);
    }

    #[test]
    #[should_panic(expected = "at least 2 knots")]
    fn single_knot_panics() {
        let _ = NaturalCubic::fit(&[1.0], &[1.0]);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn unsorted_knots_panic() {
        let _ = NaturalCubic::fit(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]);
    }
}
