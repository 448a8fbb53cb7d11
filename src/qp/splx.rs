//! Generalized SMO for the simplex-constrained subproblem
use super::{Gram, QpSolver, QpStatus, QpStatusCode};

/// Solves `min 0.5 β'Hβ + f'β` over the scaled simplex by pairwise
/// exchange steps between the minimum-gradient coordinate and the
/// coordinate with the largest one-dimensional improvement.
pub struct SimplexSmo {
    /// Maximum number of exchange steps
    pub max_steps: usize,
    /// Relative tolerance on the internal duality gap
    pub tol_rel: f64,
    /// Absolute tolerance on the internal duality gap
    pub tol_abs: f64,
}

impl SimplexSmo {
    /// Creates a new [`SimplexSmo`] struct with default parameter values.
    pub fn new() -> SimplexSmo {
        SimplexSmo {
            max_steps: usize::MAX,
            tol_rel: 1e-9,
            tol_abs: 0.0,
        }
    }
}

impl Default for SimplexSmo {
    fn default() -> Self {
        SimplexSmo::new()
    }
}

fn argmin(d: &[f64]) -> usize {
    let mut idx = 0;
    let mut d_min = f64::INFINITY;
    for (i, &di) in d.iter().enumerate() {
        if di < d_min {
            d_min = di;
            idx = i;
        }
    }
    idx
}

impl QpSolver for SimplexSmo {
    fn solve(&self, gram: &dyn Gram, f: &[f64], c: f64, beta: &mut [f64]) -> QpStatus {
        let n = gram.size();
        assert_eq!(f.len(), n);
        assert_eq!(beta.len(), n);

        // repair an infeasible warm start
        let asum: f64 = beta.iter().sum();
        if asum <= 0.0 {
            beta.fill(0.0);
            beta[argmin(f)] = c;
        } else if asum != c {
            let scale = c / asum;
            for bi in beta.iter_mut() {
                *bi *= scale;
            }
        }

        // gradient d = Hβ + f
        let mut d = f.to_vec();
        let mut col = vec![0.0; n];
        for i in 0..n {
            if beta[i] > 0.0 {
                gram.column(i, &mut col);
                for (dj, &hij) in d.iter_mut().zip(col.iter()) {
                    *dj += hij * beta[i];
                }
            }
        }

        let mut status = QpStatus {
            value: f64::INFINITY,
            dual_value: f64::NEG_INFINITY,
            steps: 0,
            code: QpStatusCode::Initialized,
        };
        let mut col_u = vec![0.0; n];
        let mut col_v = vec![0.0; n];

        loop {
            // primal and dual objectives of the subproblem
            let mut qp = 0.0;
            let mut qd = 0.0;
            let mut u = 0;
            let mut d_min = f64::INFINITY;
            for i in 0..n {
                qp += beta[i] * (f[i] + d[i]);
                qd += beta[i] * (f[i] - d[i]);
                if d[i] < d_min {
                    d_min = d[i];
                    u = i;
                }
            }
            qp *= 0.5;
            qd = 0.5 * qd + c * d_min;
            status.value = qp;
            status.dual_value = qd;

            if qp - qd <= self.tol_rel * qp.abs() || qp - qd <= self.tol_abs {
                status.code = QpStatusCode::Optimal;
                break;
            }
            if status.steps >= self.max_steps {
                status.code = QpStatusCode::MaxSteps;
                break;
            }

            // for fixed u select the exchange partner maximizing the improvement
            gram.column(u, &mut col_u);
            let mut improv = f64::NEG_INFINITY;
            let mut tau = 0.0;
            let mut v = n;
            for i in 0..n {
                if i == u || beta[i] <= 0.0 {
                    continue;
                }
                let num = beta[i] * (d[i] - d[u]);
                let den = beta[i] * beta[i] * (gram.diag(u) - 2.0 * col_u[i] + gram.diag(i));
                let dec = if den > 0.0 {
                    if num < den {
                        num * num / den
                    } else {
                        num - 0.5 * den
                    }
                } else if num > 0.0 {
                    // flat direction, transfer the full mass
                    num
                } else {
                    continue;
                };
                if dec > improv {
                    improv = dec;
                    tau = if den > 0.0 { f64::min(1.0, num / den) } else { 1.0 };
                    v = i;
                }
            }
            if v == n {
                status.code = QpStatusCode::NoStepPossible;
                break;
            }

            // exchange step between u and v
            let t = beta[v] * tau;
            beta[u] += t;
            beta[v] -= t;
            gram.column(v, &mut col_v);
            for ((dj, &huj), &hvj) in d.iter_mut().zip(col_u.iter()).zip(col_v.iter()) {
                *dj += t * (huj - hvj);
            }
            status.steps += 1;
        }
        status
    }
}
