//! Simplex-constrained quadratic programming subproblem

mod splx;
pub use splx::SimplexSmo;

use serde::{Deserialize, Serialize};

/// Column access to a symmetric quadratic term.
pub trait Gram {
    /// Returns the number of live rows/columns.
    fn size(&self) -> usize;
    /// Returns the `i`-th diagonal entry.
    fn diag(&self, i: usize) -> f64;
    /// Writes the first `out.len()` entries of the `j`-th column into `out`.
    fn column(&self, j: usize, out: &mut [f64]);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Possible outcomes of a subproblem solve
pub enum QpStatusCode {
    /// Solve not started
    Initialized,
    /// Solution found (up to defined tolerance)
    Optimal,
    /// Maximum number of steps reached
    MaxSteps,
    /// Step not possible
    NoStepPossible,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Result of a subproblem solve
pub struct QpStatus {
    /// Achieved objective value `0.5 β'Hβ + f'β`
    pub value: f64,
    /// Lower bound on the optimal objective value
    pub dual_value: f64,
    /// Number of conducted steps
    pub steps: usize,
    /// Exit flag
    pub code: QpStatusCode,
}

/// Solver for the subproblem
/// `min 0.5 β'Hβ + f'β` subject to `Σ β_i = c`, `β_i ≥ 0`.
pub trait QpSolver {
    /// Solves the subproblem for the quadratic term given by `gram` and the
    /// linear term `f`, warm-starting from and overwriting `beta`.
    fn solve(&self, gram: &dyn Gram, f: &[f64], c: f64, beta: &mut [f64]) -> QpStatus;
}
