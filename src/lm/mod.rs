//! Levenberg-Marquardt algorithm implementation.
//!
//! The solver works on any [`Problem`](crate::problem::Problem); bounded
//! parameters are handled by wrapping the problem in a
//! [`BoundedProblem`](crate::problem::BoundedProblem) first.

pub mod algorithm;
pub mod config;
pub mod convergence;

pub use algorithm::{LevenbergMarquardt, LmResult};
pub use config::LmConfig;
pub use convergence::{ConvergenceCriteria, ConvergenceStatus};
