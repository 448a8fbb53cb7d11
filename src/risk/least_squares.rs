//! Averaged squared error of a linear model
use super::Risk;
use ndarray::ArrayView2;

/// Computes `R(w) = 1/(2N) Σ_i (x_i·w - y_i)²` for a dense sample matrix
/// `x` with one row per sample.
pub struct LeastSquaresRisk<'a> {
    x: ArrayView2<'a, f64>,
    y: &'a [f64],
}

impl<'a> LeastSquaresRisk<'a> {
    /// Creates a least-squares risk.
    pub fn new(x: ArrayView2<'a, f64>, y: &'a [f64]) -> LeastSquaresRisk<'a> {
        assert_eq!(x.nrows(), y.len());
        LeastSquaresRisk { x, y }
    }
}

impl Risk for LeastSquaresRisk<'_> {
    fn dim(&self) -> usize {
        self.x.ncols()
    }

    fn risk(&self, w: &[f64], subgrad: &mut [f64]) -> f64 {
        subgrad.fill(0.0);
        let scale = 1.0 / self.y.len() as f64;
        let mut r = 0.0;
        for (i, xi) in self.x.outer_iter().enumerate() {
            let pred: f64 = xi.iter().zip(w.iter()).map(|(&xik, &wk)| xik * wk).sum();
            let res = pred - self.y[i];
            r += 0.5 * scale * res * res;
            for (gk, &xik) in subgrad.iter_mut().zip(xi.iter()) {
                *gk += scale * res * xik;
            }
        }
        r
    }
}
