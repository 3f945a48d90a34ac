//! Goodness-of-fit statistics.
//!
//! All values are raw: R² can be negative for a fit worse than the mean, and
//! it is `NaN` when the observed values have zero variance (`SS_tot = 0`).
//! The NaN follows directly from the formula and is never replaced by 0 or 1;
//! use [`FitStatistics::r_squared_defined`] to get it as an `Option`.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{KineticsError, Result};

/// Residual-based statistics of a prediction against observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitStatistics {
    /// `actual - predicted`, elementwise
    pub residuals: Array1<f64>,
    pub rmse: f64,
    pub r_squared: f64,
    pub mae: f64,
    pub mse: f64,
}

impl FitStatistics {
    /// R² when it is defined (the observations vary), `None` otherwise.
    pub fn r_squared_defined(&self) -> Option<f64> {
        if self.r_squared.is_nan() {
            None
        } else {
            Some(self.r_squared)
        }
    }

    /// Sum of squared residuals.
    pub fn ss_res(&self) -> f64 {
        self.residuals.iter().map(|r| r * r).sum()
    }
}

/// Compute RMSE, R², MAE and MSE of `predicted` against `actual`.
///
/// # Errors
///
/// `DimensionMismatch` when the sequences differ in length, `InvalidInput`
/// when they are empty.
pub fn calculate_statistics(predicted: &Array1<f64>, actual: &Array1<f64>) -> Result<FitStatistics> {
    if predicted.len() != actual.len() {
        return Err(KineticsError::DimensionMismatch(format!(
            "Expected {} predicted values, got {}",
            actual.len(),
            predicted.len()
        )));
    }
    if actual.is_empty() {
        return Err(KineticsError::InvalidInput(
            "Statistics need at least one observation".to_string(),
        ));
    }

    let n = actual.len() as f64;
    let residuals = actual - predicted;

    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    let mse = ss_res / n;
    let mae = residuals.iter().map(|r| r.abs()).sum::<f64>() / n;

    let mean = actual.sum() / n;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let r_squared = if ss_tot == 0.0 {
        f64::NAN
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(FitStatistics {
        residuals,
        rmse: mse.sqrt(),
        r_squared,
        mae,
        mse,
    })
}
