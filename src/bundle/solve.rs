use crate::dense::{dot, sq_dist, sq_norm};
use crate::qp::QpSolver;
use crate::risk::Risk;
use crate::status::{Status, StatusCode};
use std::time::Instant;

use super::icp::IcpTracker;
use super::store::CuttingPlaneStore;
use super::Params;

/// Scaling of the simplex constraint `Σ β_i = C`.
const C: f64 = 1.0;

/// Uses the bundle method to minimize `R(w) + λ/2 ‖w‖²` starting from the zero weight vector.
pub fn solve(
    risk: &dyn Risk,
    qp: &dyn QpSolver,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Status {
    let status = Status::new(risk.dim());
    solve_with_status(status, risk, qp, params, callback)
}

/// Uses the bundle method to minimize `R(w) + λ/2 ‖w‖²` starting from the
/// weight vector of a particular [`Status`].
pub fn solve_with_status(
    status: Status,
    risk: &dyn Risk,
    qp: &dyn QpSolver,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Status {
    let mut status = status;
    let start = Instant::now();
    let n = risk.dim();
    assert_eq!(status.w.len(), n);
    assert!(params.lambda > 0.0);

    // the buffer is allocated once up front; refuse impossible requests
    if params.buf_size == 0 || params.buf_size.checked_mul(n).is_none() {
        status.code = StatusCode::AllocationFailure;
        return status;
    }

    let mut store = CuttingPlaneStore::new(n, params.buf_size, params.lambda);
    let mut icp = IcpTracker::new(params.buf_size, params.clean_after, params.beta_eps);
    let mut subgrad = vec![0.0; n];
    let mut prev_w = status.w.clone();

    // seed the bundle at the initial point
    let r = risk.risk(&status.w, &mut subgrad);
    store.append(&subgrad, dot(&subgrad, &status.w) - r);
    icp.push();
    status.beta.clear();
    status.beta.push(0.0);
    status.risk = r;
    status.fp = r + 0.5 * params.lambda * sq_norm(&status.w);
    status.fd = f64::NEG_INFINITY;
    status.ncp = 1;
    status.steps = 0;
    status.hist_fp.clear();
    status.hist_fd.clear();
    status.hist_wdist.clear();
    status.hist_fp.push(status.fp);
    status.hist_fd.push(status.fd);
    status.hist_wdist.push(0.0);

    if params.verbose > 0 {
        println!(
            "{:>6} {:>10} {:>12} {:>12} {:>12} {:>10} {:>12} {:>6} {:>6}",
            "round", "time", "fp", "fd", "gap", "gap/fp", "risk", "ncp", "nza",
        );
        println!(
            "{:6} {:10.3} {:12.6} {:12.6} {:>12} {:>10} {:12.6} {:6} {:6}",
            0, status.time, status.fp, status.fd, "-", "-", r, status.ncp, 0,
        );
    }

    let mut have_pending = false;
    let mut pending_b = 0.0;

    loop {
        // append the plane formed in the previous round
        if have_pending {
            store.append(&subgrad, pending_b);
            icp.push();
            status.beta.push(0.0);
            have_pending = false;
        }
        status.ncp = store.len();
        status.steps += 1;

        // dual subproblem over the live planes
        let qp_status = qp.solve(&store, store.offsets(), C, &mut status.beta);
        status.qp_code = qp_status.code;
        status.fd = -qp_status.value;

        // staleness bookkeeping
        status.nza = icp.observe(&status.beta);

        // w = -(1/λ) Σ β_i a_i over the live planes
        status.w.fill(0.0);
        for (j, &bj) in status.beta.iter().enumerate() {
            if bj == 0.0 {
                continue;
            }
            for (wk, &ajk) in status.w.iter_mut().zip(store.plane(j).iter()) {
                *wk -= bj / params.lambda * ajk;
            }
        }

        // risk at the new point; this also yields the next cutting plane
        let r = risk.risk(&status.w, &mut subgrad);
        pending_b = dot(&subgrad, &status.w) - r;
        have_pending = true;
        status.risk = r;
        status.fp = r + 0.5 * params.lambda * sq_norm(&status.w);

        let elapsed = start.elapsed().as_secs_f64();
        status.time = elapsed;

        // stopping conditions
        let gap = status.fp - status.fd;
        let mut stop = true;
        if gap <= params.tol_rel * status.fp.abs() {
            status.code = StatusCode::OptimalRelative;
        } else if gap <= params.tol_abs {
            status.code = StatusCode::OptimalAbsolute;
        } else if store.is_full() {
            status.code = StatusCode::BufferExceeded;
        } else if status.steps >= params.max_steps {
            status.code = StatusCode::MaxSteps;
        } else if elapsed >= params.time_limit {
            status.code = StatusCode::TimeLimit;
        } else {
            stop = false;
        }

        // handle progress output
        if params.verbose > 0 && (status.steps % params.verbose == 0 || stop) {
            println!(
                "{:6} {:10.3} {:12.6} {:12.6} {:12.6} {:10.6} {:12.6} {:6} {:6}",
                status.steps,
                elapsed,
                status.fp,
                status.fd,
                gap,
                gap / status.fp,
                r,
                status.ncp,
                status.nza,
            );
        }

        // handle callback
        if !stop {
            if let Some(callback_fn) = callback {
                if callback_fn(&status) {
                    status.code = StatusCode::Callback;
                    stop = true;
                }
            }
        }

        // keep fp, fd and wdist history
        status.hist_fp.push(status.fp);
        status.hist_fd.push(status.fd);
        status.hist_wdist.push(sq_dist(&status.w, &prev_w).sqrt());
        prev_w.copy_from_slice(&status.w);

        // terminate
        if stop {
            break;
        }

        // reclaim inactive cutting planes
        if params.clean_icp {
            let keep = icp.survivors();
            if keep.len() < store.len() {
                store.compact(&keep);
                for (ni, &oi) in keep.iter().enumerate() {
                    status.beta[ni] = status.beta[oi];
                }
                status.beta.truncate(keep.len());
                icp.compact(&keep);
                status.ncp = store.len();
            }
        }
    }
    status
}
