use crate::qp::QpStatusCode;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Possible outcomes of the bundle method
pub enum StatusCode {
    /// Optimization not started
    Initialized,
    /// Duality gap below the relative tolerance
    OptimalRelative,
    /// Duality gap below the absolute tolerance
    OptimalAbsolute,
    /// Cutting-plane buffer is full and no further reduction is possible
    BufferExceeded,
    /// Requested buffer could not be allocated
    AllocationFailure,
    /// Maximum number of rounds reached
    MaxSteps,
    /// Time limit reached
    TimeLimit,
    /// Stopped by the callback function
    Callback,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing information about the current point and state of the bundle method
pub struct Status {
    /// Primal weight vector
    pub w: Vec<f64>,
    /// Dual variables of the cutting-plane subproblem (one per live plane)
    pub beta: Vec<f64>,
    /// Primal objective value `R(w) + λ/2 ‖w‖²`
    pub fp: f64,
    /// Dual objective value (lower bound on `fp`)
    pub fd: f64,
    /// Risk value at `w`
    pub risk: f64,
    /// Number of live cutting planes
    pub ncp: usize,
    /// Number of non-negligible dual variables
    pub nza: usize,
    /// Number of conducted rounds
    pub steps: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
    /// Current status
    pub code: StatusCode,
    /// Exit flag of the most recent subproblem solve
    pub qp_code: QpStatusCode,
    /// History of primal objective values (one entry per round)
    pub hist_fp: Vec<f64>,
    /// History of dual objective values
    pub hist_fd: Vec<f64>,
    /// History of distances between consecutive weight vectors
    pub hist_wdist: Vec<f64>,
}

impl Status {
    /// Create a [`Status`] struct with default initialization for dimension `n`
    pub fn new(n: usize) -> Status {
        Status {
            w: vec![0.0; n],
            beta: Vec::new(),
            fp: f64::INFINITY,
            fd: f64::NEG_INFINITY,
            risk: f64::INFINITY,
            ncp: 0,
            nza: 0,
            steps: 0,
            time: 0.0,
            code: StatusCode::Initialized,
            qp_code: QpStatusCode::Initialized,
            hist_fp: Vec::new(),
            hist_fd: Vec::new(),
            hist_wdist: Vec::new(),
        }
    }

    /// Duality gap `fp - fd` of the current round
    pub fn gap(&self) -> f64 {
        self.fp - self.fd
    }
}
