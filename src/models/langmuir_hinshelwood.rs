//! Langmuir-Hinshelwood surface kinetics with rate constant `k` and
//! adsorption equilibrium constant `K`.
//!
//! With `r = c0 * exp(-k t)`:
//!
//! ```text
//! c(t) = (K c0 (ln c0 - ln r) + c0 - r) / (1 + K c0 exp(-k t))
//! ```
//!
//! Both logarithm arguments must be positive. `r` underflows to zero once
//! `k t` exceeds roughly 745, and `c0 = 0` makes both arguments zero; either
//! case is reported as a [`KineticsError::ModelEvaluation`] for that time
//! point instead of producing NaN.

use ndarray::Array1;

use super::clamp_rate;
use crate::error::{KineticsError, Result};

/// Concentration at time `t`.
///
/// At `t = 0` both logarithms are taken of the same value and cancel exactly,
/// so the numerator is `0` and the result is `0`.
pub fn concentration(t: f64, k: f64, adsorption: f64, c0: f64) -> Result<f64> {
    let k = clamp_rate(k);
    let adsorption = clamp_rate(adsorption);

    let decay = (-k * t).exp();
    let remaining = c0 * decay;
    if !(c0 > 0.0 && remaining > 0.0) {
        return Err(KineticsError::ModelEvaluation(format!(
            "Langmuir-Hinshelwood logarithm argument is not positive at t = {} (c0 = {}, c0*exp(-k*t) = {})",
            t, c0, remaining
        )));
    }

    let term1 = adsorption * c0;
    let term2 = c0.ln() - remaining.ln();
    Ok((term1 * term2 + c0 - remaining) / (1.0 + adsorption * c0 * decay))
}

/// Vectorized [`concentration`]; fails on the first time point that cannot
/// be evaluated.
pub fn evaluate(times: &Array1<f64>, k: f64, adsorption: f64, c0: f64) -> Result<Array1<f64>> {
    times
        .iter()
        .map(|&t| concentration(t, k, adsorption, c0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_time_zero_is_finite() {
        let c = concentration(0.0, 0.3, 0.7, 10.0).unwrap();
        assert!(c.is_finite());
        assert_eq!(c, 0.0);
    }

    #[test]
    fn test_matches_formula() {
        let (k, big_k, c0, t) = (0.05, 0.2, 10.0, 20.0);
        let r = c0 * f64::exp(-k * t);
        let expected = (big_k * c0 * (c0.ln() - r.ln()) + c0 - r) / (1.0 + big_k * r);

        assert_relative_eq!(concentration(t, k, big_k, c0).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_without_adsorption_reduces_to_consumed_amount() {
        // K = 0 leaves c0 - c0 exp(-k t)
        let c = concentration(10.0, 0.1, 0.0, 4.0).unwrap();
        assert_relative_eq!(c, 4.0 - 4.0 * f64::exp(-1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_underflow_is_an_error() {
        let err = concentration(60.0, 1000.0, 0.1, 10.0).unwrap_err();
        assert!(matches!(err, KineticsError::ModelEvaluation(_)));

        let times = array![0.0, 1.0, 1e4];
        assert!(evaluate(&times, 0.5, 0.1, 10.0).is_err());
    }

    #[test]
    fn test_zero_initial_concentration_is_an_error() {
        assert!(concentration(0.0, 0.1, 0.1, 0.0).is_err());
    }
}
