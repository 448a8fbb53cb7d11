//! Cutting-plane bundle method (BMRM)

mod icp;
mod params;
mod store;

pub use self::params::Params;
pub use self::store::CuttingPlaneStore;

mod solve;
pub use solve::{solve, solve_with_status};
