//! Synthetic observation series for testing and benchmarking.
//!
//! A series is generated by evaluating a model at known parameters and adding
//! Gaussian noise. Noisy concentrations below zero are clamped to zero so the
//! result always passes validation.

use ndarray::Array1;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};

use crate::error::{KineticsError, Result};
use crate::models::KineticModel;
use crate::series::ObservationSeries;

/// Add independent `N(0, noise_sd²)` noise to every value, clamping at zero.
pub fn add_noise<R: Rng + ?Sized>(values: &Array1<f64>, noise_sd: f64, rng: &mut R) -> Result<Array1<f64>> {
    let normal = Normal::new(0.0, noise_sd).map_err(|e| {
        KineticsError::InvalidParameter(format!("Invalid noise level {}: {}", noise_sd, e))
    })?;

    Ok(values.mapv(|v| (v + normal.sample(rng)).max(0.0)))
}

/// Evaluate `model` at `times` with `params` and `c0`, then add noise.
pub fn synthetic_series<R: Rng + ?Sized>(
    model: KineticModel,
    params: &[f64],
    c0: f64,
    times: &[f64],
    noise_sd: f64,
    rng: &mut R,
) -> Result<ObservationSeries> {
    let times = Array1::from_vec(times.to_vec());
    let clean = model.evaluate(&times, params, c0)?;
    let noisy = add_noise(&clean, noise_sd, rng)?;

    ObservationSeries::new(times.to_vec(), noisy.to_vec())
}

/// [`synthetic_series`] with a [`StdRng`] seeded from `seed`.
pub fn synthetic_series_seeded(
    model: KineticModel,
    params: &[f64],
    c0: f64,
    times: &[f64],
    noise_sd: f64,
    seed: u64,
) -> Result<ObservationSeries> {
    let mut rng = StdRng::seed_from_u64(seed);
    synthetic_series(model, params, c0, times, noise_sd, &mut rng)
}
