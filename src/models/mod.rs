//! Kinetic models for concentration decay.
//!
//! The three supported rate laws form a closed set, so they are a plain enum
//! rather than trait objects. Each variant knows its parameter names, their
//! bounds, the starting point the solver uses, and how to evaluate itself.
//!
//! The functions behind each variant clamp their rate constants to
//! `[0, 1000]` even though the solver already bounds them: finite-difference
//! probes and callers evaluating arbitrary parameters must still get a
//! well-defined value.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{KineticsError, Result};
use crate::parameters::Bounds;

pub mod first_order;
pub mod langmuir_hinshelwood;
pub mod second_order;

/// Upper limit for every rate or adsorption constant.
pub const RATE_CONSTANT_MAX: f64 = 1e3;

/// Clamp a rate or adsorption constant to `[0, RATE_CONSTANT_MAX]`.
pub(crate) fn clamp_rate(value: f64) -> f64 {
    value.clamp(0.0, RATE_CONSTANT_MAX)
}

/// A kinetic rate law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KineticModel {
    /// `c0 * exp(-k t)`
    FirstOrder,
    /// `c0 / (1 + k c0 t)`
    SecondOrder,
    /// Surface-adsorption kinetics with rate `k` and adsorption constant `K`
    LangmuirHinshelwood,
}

impl KineticModel {
    /// Every supported model, in presentation order.
    pub const ALL: [KineticModel; 3] = [
        KineticModel::FirstOrder,
        KineticModel::SecondOrder,
        KineticModel::LangmuirHinshelwood,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            KineticModel::FirstOrder => "First Order",
            KineticModel::SecondOrder => "Second Order",
            KineticModel::LangmuirHinshelwood => "Langmuir-Hinshelwood",
        }
    }

    /// Names of the free parameters, in the order `evaluate` expects them.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            KineticModel::FirstOrder | KineticModel::SecondOrder => &["k"],
            KineticModel::LangmuirHinshelwood => &["k", "K"],
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_names().len()
    }

    /// Bounds applied to each parameter during fitting: `[0, 1000]`.
    pub fn default_bounds(&self) -> Vec<Bounds> {
        vec![Bounds::rate_constant(); self.parameter_count()]
    }

    /// Starting point for the solver.
    ///
    /// Langmuir-Hinshelwood starts from `(k, K) = (0.1, 0.1)`; the
    /// one-parameter models start from `k = 1`.
    ///
    /// With `k = 1` and times in the thousands every first-order prediction
    /// past `t = 0` underflows to zero, the gradient vanishes, and the solver
    /// reports convergence at the starting point with a poor R². Pass a
    /// starting point near `1 / t_max` through
    /// [`FitOptions::with_initial_guess`](crate::fit::FitOptions::with_initial_guess)
    /// for such data.
    pub fn default_initial_guess(&self) -> Vec<f64> {
        match self {
            KineticModel::FirstOrder | KineticModel::SecondOrder => vec![1.0],
            KineticModel::LangmuirHinshelwood => vec![0.1, 0.1],
        }
    }

    /// Predicted concentration at each time, same length and order as `times`.
    pub fn evaluate(&self, times: &Array1<f64>, params: &[f64], c0: f64) -> Result<Array1<f64>> {
        self.check_arity(params)?;

        match self {
            KineticModel::FirstOrder => Ok(first_order::evaluate(times, params[0], c0)),
            KineticModel::SecondOrder => Ok(second_order::evaluate(times, params[0], c0)),
            KineticModel::LangmuirHinshelwood => {
                langmuir_hinshelwood::evaluate(times, params[0], params[1], c0)
            }
        }
    }

    /// Predicted concentration at a single time.
    pub fn evaluate_at(&self, t: f64, params: &[f64], c0: f64) -> Result<f64> {
        self.check_arity(params)?;

        match self {
            KineticModel::FirstOrder => Ok(first_order::concentration(t, params[0], c0)),
            KineticModel::SecondOrder => Ok(second_order::concentration(t, params[0], c0)),
            KineticModel::LangmuirHinshelwood => {
                langmuir_hinshelwood::concentration(t, params[0], params[1], c0)
            }
        }
    }

    fn check_arity(&self, params: &[f64]) -> Result<()> {
        if params.len() != self.parameter_count() {
            return Err(KineticsError::DimensionMismatch(format!(
                "{} expects {} parameters, got {}",
                self,
                self.parameter_count(),
                params.len()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for KineticModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KineticModel {
    type Err = KineticsError;

    /// Accepts the display names and common spellings such as `first-order`,
    /// `second_order` or `lh`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "firstorder" | "first" | "1" | "pseudofirstorder" => Ok(KineticModel::FirstOrder),
            "secondorder" | "second" | "2" | "pseudosecondorder" => Ok(KineticModel::SecondOrder),
            "langmuirhinshelwood" | "lh" => Ok(KineticModel::LangmuirHinshelwood),
            _ => Err(KineticsError::UnknownModel(s.to_string())),
        }
    }
}
