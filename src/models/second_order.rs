//! Second-order decay: `c(t) = c0 / (1 + k * c0 * t)`.

use ndarray::Array1;

use super::clamp_rate;

/// Smallest denominator allowed.
const MIN_DENOMINATOR: f64 = 1e-10;

/// Concentration at time `t` for rate constant `k`.
///
/// `k` is clamped to `[0, 1000]` and the denominator floored at `1e-10`.
pub fn concentration(t: f64, k: f64, c0: f64) -> f64 {
    let k = clamp_rate(k);
    let denominator = (1.0 + k * c0 * t).clamp(MIN_DENOMINATOR, f64::INFINITY);
    c0 / denominator
}

/// Vectorized [`concentration`] over a sequence of times.
pub fn evaluate(times: &Array1<f64>, k: f64, c0: f64) -> Array1<f64> {
    times.mapv(|t| concentration(t, k, c0))
}
