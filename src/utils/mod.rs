//! Numerical helpers shared by the solver and the uncertainty estimates.

pub mod finite_difference;
pub mod linalg;

pub use finite_difference::jacobian;
pub use linalg::{cholesky_solve, invert_spd};
