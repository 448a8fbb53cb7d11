/// Parameters of the bundle method
pub struct Params {
    /// Regularization constant λ of the objective `R(w) + λ/2 ‖w‖²`
    pub lambda: f64,
    /// Relative tolerance on the duality gap
    pub tol_rel: f64,
    /// Absolute tolerance on the duality gap
    pub tol_abs: f64,
    /// Capacity of the cutting-plane buffer
    pub buf_size: usize,
    /// Whether inactive cutting planes are reclaimed
    pub clean_icp: bool,
    /// Number of consecutive inactive rounds after which a plane is dropped
    pub clean_after: usize,
    /// Threshold below which a dual variable counts as inactive
    pub beta_eps: f64,
    /// Maximum number of rounds
    pub max_steps: usize,
    /// Time limit (in seconds)
    pub time_limit: f64,
    /// Print a progress row every `verbose` rounds (0 disables output)
    pub verbose: usize,
}

impl Params {
    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            lambda: 1.0,
            tol_rel: 1e-3,
            tol_abs: 0.0,
            buf_size: 1000,
            clean_icp: true,
            clean_after: 10,
            beta_eps: 0.0,
            max_steps: usize::MAX,
            time_limit: f64::INFINITY,
            verbose: 0,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new()
    }
}
