//! # Uncertainty Calculation
//!
//! Standard errors of fitted parameters, estimated from the
//! Jacobian of the residuals at the solution.

mod covariance;

pub use covariance::{
    calculate_covariance, reduced_chi_square, standard_errors, standard_errors_from_covariance,
};
