//! First-order decay: `c(t) = c0 * exp(-k * t)`.

use ndarray::Array1;

use super::clamp_rate;

/// Largest value the exponential factor may take.
const MAX_DECAY_FACTOR: f64 = 1e100;

/// Concentration at time `t` for rate constant `k`.
///
/// `k` is clamped to `[0, 1000]` and the exponential factor to `[0, 1e100]`,
/// so the function stays finite for any probe the optimizer makes.
pub fn concentration(t: f64, k: f64, c0: f64) -> f64 {
    let k = clamp_rate(k);
    let decay = (-k * t).exp().clamp(0.0, MAX_DECAY_FACTOR);
    c0 * decay
}

/// Vectorized [`concentration`] over a sequence of times.
pub fn evaluate(times: &Array1<f64>, k: f64, c0: f64) -> Array1<f64> {
    times.mapv(|t| concentration(t, k, c0))
}
