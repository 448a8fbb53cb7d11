//! Averaged hinge loss of a linear classifier
use super::Risk;
use ndarray::ArrayView2;

/// Computes `R(w) = Σ_i c_i max(0, 1 - y_i x_i·w)` for a dense sample
/// matrix `x` with one row per sample and labels `y_i ∈ {-1, +1}`.
pub struct HingeRisk<'a> {
    x: ArrayView2<'a, f64>,
    y: &'a [f64],
    c: Option<&'a [f64]>,
}

impl<'a> HingeRisk<'a> {
    /// Creates a hinge risk with uniform sample weights `1/N`.
    pub fn new(x: ArrayView2<'a, f64>, y: &'a [f64]) -> HingeRisk<'a> {
        assert_eq!(x.nrows(), y.len());
        HingeRisk { x, y, c: None }
    }

    /// Replaces the uniform sample weights.
    pub fn with_weights(mut self, c: &'a [f64]) -> Self {
        assert_eq!(c.len(), self.y.len());
        self.c = Some(c);
        self
    }

    fn weight(&self, i: usize) -> f64 {
        match self.c {
            Some(c) => c[i],
            None => 1.0 / self.y.len() as f64,
        }
    }
}

impl Risk for HingeRisk<'_> {
    fn dim(&self) -> usize {
        self.x.ncols()
    }

    fn risk(&self, w: &[f64], subgrad: &mut [f64]) -> f64 {
        subgrad.fill(0.0);
        let mut r = 0.0;
        for (i, xi) in self.x.outer_iter().enumerate() {
            let margin: f64 = xi.iter().zip(w.iter()).map(|(&xik, &wk)| xik * wk).sum();
            let slack = 1.0 - self.y[i] * margin;
            if slack > 0.0 {
                let ci = self.weight(i);
                r += ci * slack;
                for (gk, &xik) in subgrad.iter_mut().zip(xi.iter()) {
                    *gk -= ci * self.y[i] * xik;
                }
            }
        }
        r
    }
}
