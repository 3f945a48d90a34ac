//! Problem definition trait and implementations.
//!
//! This module defines the `Problem` trait, a nonlinear least squares problem
//! to be solved with the Levenberg-Marquardt algorithm, the
//! [`KineticProblem`] that fits a kinetic model to an observation series, and
//! the [`BoundedProblem`] adapter that lets the unconstrained solver respect
//! parameter bounds.

use ndarray::{Array1, Array2};

use crate::error::{KineticsError, Result};
use crate::models::KineticModel;
use crate::parameters::{Bounds, BoundsTransform};
use crate::series::ObservationSeries;

/// A trait representing a nonlinear least squares problem.
pub trait Problem {
    /// Evaluate the residuals at the given parameters.
    ///
    /// # Arguments
    ///
    /// * `params` - The parameter values at which to evaluate the residuals
    ///
    /// # Returns
    ///
    /// * A vector of residuals, or an error if the evaluation fails
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>>;

    /// Get the number of parameters in the problem.
    fn parameter_count(&self) -> usize;

    /// Get the number of residuals in the problem.
    fn residual_count(&self) -> usize;

    /// Evaluate the Jacobian matrix at the given parameters.
    ///
    /// The default implementation uses forward finite differences.
    fn jacobian(&self, params: &Array1<f64>) -> Result<Array2<f64>>
    where
        Self: Sized,
    {
        crate::utils::finite_difference::jacobian(self, params, None)
    }

    /// Check if this problem provides a custom Jacobian implementation.
    ///
    /// If false, the optimizer computes the Jacobian by finite differences
    /// with its own configured step.
    fn has_custom_jacobian(&self) -> bool {
        false
    }

    /// Evaluate the sum of squared residuals at the given parameters.
    fn eval_cost(&self, params: &Array1<f64>) -> Result<f64> {
        let residuals = self.eval(params)?;
        Ok(residuals.iter().map(|r| r.powi(2)).sum())
    }
}

/// Residuals `predicted - observed` of a kinetic model against a series, with
/// the initial concentration held fixed.
///
/// Parameters are in the model's natural (external) units.
#[derive(Debug, Clone, Copy)]
pub struct KineticProblem<'a> {
    model: KineticModel,
    series: &'a ObservationSeries,
    c0: f64,
}

impl<'a> KineticProblem<'a> {
    pub fn new(model: KineticModel, series: &'a ObservationSeries, c0: f64) -> Self {
        Self { model, series, c0 }
    }

    pub fn model(&self) -> KineticModel {
        self.model
    }

    pub fn series(&self) -> &ObservationSeries {
        self.series
    }

    pub fn c0(&self) -> f64 {
        self.c0
    }
}

impl Problem for KineticProblem<'_> {
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>> {
        let params = params.to_vec();
        let predicted = self.model.evaluate(self.series.times(), &params, self.c0)?;

        if let Some(i) = predicted.iter().position(|p| !p.is_finite()) {
            return Err(KineticsError::ModelEvaluation(format!(
                "{} prediction at t = {} is not finite",
                self.model,
                self.series.times()[i]
            )));
        }

        Ok(predicted - self.series.concentrations())
    }

    fn parameter_count(&self) -> usize {
        self.model.parameter_count()
    }

    fn residual_count(&self) -> usize {
        self.series.len()
    }
}

/// Adapter exposing a problem over bounded parameters as an unconstrained one.
///
/// The solver iterates on internal coordinates; every evaluation maps them
/// through [`BoundsTransform::to_external`] first, so the wrapped problem only
/// ever sees in-bounds parameters.
pub struct BoundedProblem<'a, P: Problem> {
    problem: &'a P,
    transforms: Vec<BoundsTransform>,
}

impl<'a, P: Problem> BoundedProblem<'a, P> {
    /// Create a new adapter; one bounds entry per parameter.
    pub fn new(problem: &'a P, bounds: &[Bounds]) -> Result<Self> {
        if bounds.len() != problem.parameter_count() {
            return Err(KineticsError::DimensionMismatch(format!(
                "Expected {} bounds, got {}",
                problem.parameter_count(),
                bounds.len()
            )));
        }

        Ok(Self {
            problem,
            transforms: bounds.iter().copied().map(BoundsTransform::new).collect(),
        })
    }

    /// Map internal solver coordinates to external parameter values.
    pub fn to_external(&self, internal: &Array1<f64>) -> Array1<f64> {
        internal
            .iter()
            .zip(&self.transforms)
            .map(|(&x, t)| t.to_external(x))
            .collect()
    }

    /// Map external parameter values to internal solver coordinates.
    pub fn to_internal(&self, external: &Array1<f64>) -> Result<Array1<f64>> {
        if external.len() != self.transforms.len() {
            return Err(KineticsError::DimensionMismatch(format!(
                "Expected {} parameters, got {}",
                self.transforms.len(),
                external.len()
            )));
        }

        external
            .iter()
            .zip(&self.transforms)
            .map(|(&v, t)| t.to_internal(v).map_err(KineticsError::from))
            .collect()
    }
}

impl<P: Problem> Problem for BoundedProblem<'_, P> {
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>> {
        self.problem.eval(&self.to_external(params))
    }

    fn parameter_count(&self) -> usize {
        self.transforms.len()
    }

    fn residual_count(&self) -> usize {
        self.problem.residual_count()
    }
}
