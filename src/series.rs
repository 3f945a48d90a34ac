//! Validated time/concentration observations.

use ndarray::Array1;
use serde::Serialize;

use crate::error::Result;
use crate::validation::ValidationErrors;

/// An ordered set of `(time, concentration)` observations.
///
/// Construction runs the validation gate, so every series in existence has
/// equal-length, finite, non-negative data with strictly increasing times and
/// at least three points. The data cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationSeries {
    times: Array1<f64>,
    concentrations: Array1<f64>,
}

impl ObservationSeries {
    /// Validate and wrap the two sequences.
    ///
    /// Fails with [`KineticsError::Validation`](crate::KineticsError::Validation)
    /// listing every issue found.
    pub fn new(times: Vec<f64>, concentrations: Vec<f64>) -> Result<Self> {
        ValidationErrors::check(&times, &concentrations)?;

        Ok(Self {
            times: Array1::from_vec(times),
            concentrations: Array1::from_vec(concentrations),
        })
    }

    /// Build a series from `(time, concentration)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let (times, concentrations) = pairs.iter().copied().unzip();
        Self::new(times, concentrations)
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    pub fn concentrations(&self) -> &Array1<f64> {
        &self.concentrations
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false for a validated series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Last (largest) observation time.
    pub fn t_max(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.concentrations.iter().copied())
    }
}
