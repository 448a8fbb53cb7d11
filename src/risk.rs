//! Risk oracles for linear models

pub mod hinge;
pub use hinge::HingeRisk;
pub mod least_squares;
pub use least_squares::LeastSquaresRisk;

/// An empirical risk functional together with its subgradient.
pub trait Risk {
    /// Returns the dimension of the weight vector.
    fn dim(&self) -> usize;
    /// Evaluates the risk at `w` and writes a subgradient into `subgrad`.
    fn risk(&self, w: &[f64], subgrad: &mut [f64]) -> f64;
}
