//! Unit tests for the simplex-constrained subproblem solver.

use ndarray::{array, Array2};
use rubmrm::qp::{Gram, QpSolver, QpStatusCode, SimplexSmo};

/// Dense symmetric matrix backing the [`Gram`] contract.
struct DenseGram {
    h: Array2<f64>,
}

impl Gram for DenseGram {
    fn size(&self) -> usize {
        self.h.nrows()
    }

    fn diag(&self, i: usize) -> f64 {
        self.h[[i, i]]
    }

    fn column(&self, j: usize, out: &mut [f64]) {
        for (i, hij) in out.iter_mut().enumerate() {
            *hij = self.h[[i, j]];
        }
    }
}

#[test]
fn solves_two_variable_qp_exactly() {
    let gram = DenseGram {
        h: array![[2.0, 0.0], [0.0, 2.0]],
    };
    let f = [-1.0, 0.0];
    let mut beta = vec![0.0; 2];
    let status = SimplexSmo::new().solve(&gram, &f, 1.0, &mut beta);
    assert_eq!(status.code, QpStatusCode::Optimal);
    assert!((beta[0] - 0.75).abs() < 1e-8);
    assert!((beta[1] - 0.25).abs() < 1e-8);
    assert!((status.value + 0.125).abs() < 1e-8);
    assert!(status.value >= status.dual_value - 1e-9);
}

#[test]
fn repairs_infeasible_warm_start() {
    let gram = DenseGram {
        h: array![[2.0, 0.0], [0.0, 2.0]],
    };
    let f = [-1.0, 0.0];
    // sums to 0.4 instead of 1
    let mut beta = vec![0.2, 0.2];
    let status = SimplexSmo::new().solve(&gram, &f, 1.0, &mut beta);
    assert_eq!(status.code, QpStatusCode::Optimal);
    let asum: f64 = beta.iter().sum();
    assert!((asum - 1.0).abs() < 1e-12);
    assert!((beta[0] - 0.75).abs() < 1e-8);
}

#[test]
fn linear_objective_puts_all_mass_on_minimum() {
    let gram = DenseGram {
        h: Array2::zeros((3, 3)),
    };
    let f = [1.0, -2.0, 3.0];
    let mut beta = vec![0.0; 3];
    let status = SimplexSmo::new().solve(&gram, &f, 1.0, &mut beta);
    assert_eq!(status.code, QpStatusCode::Optimal);
    assert_eq!(beta, vec![0.0, 1.0, 0.0]);
    assert!((status.value + 2.0).abs() < 1e-12);
}

#[test]
fn respects_step_cap() {
    let gram = DenseGram {
        h: array![[2.0, 0.0], [0.0, 2.0]],
    };
    let f = [-1.0, 0.0];
    let mut beta = vec![0.0; 2];
    let solver = SimplexSmo {
        max_steps: 0,
        ..SimplexSmo::new()
    };
    let status = solver.solve(&gram, &f, 1.0, &mut beta);
    assert_eq!(status.code, QpStatusCode::MaxSteps);
    assert_eq!(status.steps, 0);
}

#[test]
fn scaled_simplex_constraint_is_kept() {
    let gram = DenseGram {
        h: array![[1.0, 0.5], [0.5, 1.0]],
    };
    let f = [-1.0, -1.0];
    let mut beta = vec![0.0; 2];
    let status = SimplexSmo::new().solve(&gram, &f, 2.5, &mut beta);
    assert_eq!(status.code, QpStatusCode::Optimal);
    let asum: f64 = beta.iter().sum();
    assert!((asum - 2.5).abs() < 1e-12);
    assert!(beta.iter().all(|&bi| bi >= 0.0));
}
