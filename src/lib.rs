//! Solve regularized risk minimization problems with a cutting-plane bundle method.
#![warn(missing_docs)]

pub mod bundle;
mod dense;
pub mod qp;
pub mod risk;

mod status;
pub use crate::status::{Status, StatusCode};
