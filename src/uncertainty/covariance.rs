//! # Covariance Matrix Calculations
//!
//! Parameter covariance of a least-squares fit, estimated from the Jacobian
//! of the residuals at the solution:
//!
//! ```text
//! covar = redchi * inv(Jᵀ J),   redchi = SS_res / (n - p)
//! ```

use ndarray::{Array1, Array2};

use crate::error::{KineticsError, Result};
use crate::utils::linalg::invert_spd;

/// Reduced chi-square `SS_res / (n - p)`, or `None` when there are no
/// degrees of freedom left.
pub fn reduced_chi_square(residuals: &Array1<f64>, n_params: usize) -> Option<f64> {
    let n = residuals.len();
    if n <= n_params {
        return None;
    }
    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    Some(ss_res / (n - n_params) as f64)
}

/// Calculate the covariance matrix from the Jacobian matrix.
///
/// # Errors
///
/// `UndefinedStatistic` when `JᵀJ` is singular, which happens when a
/// parameter has no influence on the residuals (e.g. a rate constant pinned
/// at a bound).
pub fn calculate_covariance(jacobian: &Array2<f64>, redchi: f64) -> Result<Array2<f64>> {
    let jtj = jacobian.t().dot(jacobian);
    let inverse = invert_spd(&jtj).ok_or_else(|| {
        KineticsError::UndefinedStatistic(
            "JᵀJ is singular; parameter covariance is undefined".to_string(),
        )
    })?;
    Ok(inverse * redchi)
}

/// Standard errors are the square roots of the covariance diagonal.
pub fn standard_errors_from_covariance(covar: &Array2<f64>) -> Array1<f64> {
    covar
        .diag()
        .mapv(|v| if v > 0.0 { v.sqrt() } else { 0.0 })
}

/// Standard errors of the fitted parameters, or `None` when they cannot be
/// estimated (no degrees of freedom, or a singular `JᵀJ`).
pub fn standard_errors(jacobian: &Array2<f64>, residuals: &Array1<f64>) -> Option<Array1<f64>> {
    let redchi = reduced_chi_square(residuals, jacobian.ncols())?;
    let covar = calculate_covariance(jacobian, redchi).ok()?;
    Some(standard_errors_from_covariance(&covar))
}
