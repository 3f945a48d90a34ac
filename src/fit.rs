//! Fitting kinetic models to observation series.
//!
//! [`fit`] is the single entry point: it wraps the series in a
//! [`KineticProblem`], confines the parameters to their bounds with a
//! [`BoundedProblem`], runs the Levenberg-Marquardt solver from the model's
//! starting point, and recomputes predictions and statistics at the
//! solution. Either a complete [`FitResult`] comes back or an error saying
//! which condition stopped the fit.

use std::collections::{BTreeMap, HashMap};

use log::{info, warn};
use ndarray::Array1;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{KineticsError, Result};
use crate::lm::{LevenbergMarquardt, LmConfig};
use crate::models::KineticModel;
use crate::parameters::{Bounds, Parameter};
use crate::problem::{BoundedProblem, KineticProblem};
use crate::series::ObservationSeries;
use crate::statistics::{calculate_statistics, FitStatistics};
use crate::uncertainty::standard_errors;
use crate::utils::finite_difference;

/// Estimator configuration.
///
/// Everything is optional: the defaults fit every parameter within
/// `[0, 1000]` starting from [`KineticModel::default_initial_guess`].
///
/// ```
/// use kinfit_rs::{FitOptions, KineticModel};
///
/// let options = FitOptions::from_json(
///     r#"{ "solver": { "max_iterations": 50 }, "initial_guess": { "first_order": [0.05] } }"#,
/// ).unwrap();
/// assert_eq!(options.solver.max_iterations, 50);
/// assert_eq!(options.initial_guess_for(KineticModel::FirstOrder).unwrap(), vec![0.05]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Solver configuration
    pub solver: LmConfig,

    /// Starting points overriding the model defaults
    pub initial_guess: HashMap<KineticModel, Vec<f64>>,

    /// Parameter bounds overriding the model defaults
    pub bounds: HashMap<KineticModel, Vec<Bounds>>,
}

impl FitOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_solver(mut self, solver: LmConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_initial_guess(mut self, model: KineticModel, guess: Vec<f64>) -> Self {
        self.initial_guess.insert(model, guess);
        self
    }

    pub fn with_bounds(mut self, model: KineticModel, bounds: Vec<Bounds>) -> Self {
        self.bounds.insert(model, bounds);
        self
    }

    /// Starting point used for `model`.
    pub fn initial_guess_for(&self, model: KineticModel) -> Result<Vec<f64>> {
        let guess = self
            .initial_guess
            .get(&model)
            .cloned()
            .unwrap_or_else(|| model.default_initial_guess());
        check_parameter_count(model, guess.len(), "initial guess")?;
        Ok(guess)
    }

    /// Bounds used for `model`.
    pub fn bounds_for(&self, model: KineticModel) -> Result<Vec<Bounds>> {
        let bounds = self
            .bounds
            .get(&model)
            .cloned()
            .unwrap_or_else(|| model.default_bounds());
        check_parameter_count(model, bounds.len(), "bounds")?;
        Ok(bounds)
    }
}

fn check_parameter_count(model: KineticModel, count: usize, what: &str) -> Result<()> {
    if count != model.parameter_count() {
        return Err(KineticsError::InvalidParameter(format!(
            "{} needs {} {} values, got {}",
            model,
            model.parameter_count(),
            what,
            count
        )));
    }
    Ok(())
}

/// Outcome of a successful fit.
#[derive(Debug, Clone, Serialize)]
pub struct FitResult {
    pub model: KineticModel,

    /// Initial concentration the fit was made with
    pub c0: f64,

    /// Fitted parameters in model order, with standard errors when available
    pub parameters: Vec<Parameter>,

    /// RMSE, R², MAE, MSE and residuals against the observations
    pub statistics: FitStatistics,

    /// Observation times
    pub times: Array1<f64>,

    /// Observed concentrations
    pub observed: Array1<f64>,

    /// Fitted model evaluated at each observation time
    pub predicted: Array1<f64>,

    /// Accepted solver steps
    pub iterations: usize,

    /// Solver termination message
    pub message: String,
}

impl FitResult {
    /// Fitted value of the parameter called `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.parameters
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.value())
    }

    /// Fitted values in model order.
    pub fn parameter_values(&self) -> Vec<f64> {
        self.parameters.iter().map(|p| p.value()).collect()
    }

    /// Parameter name to fitted value.
    pub fn parameter_map(&self) -> BTreeMap<String, f64> {
        self.parameters
            .iter()
            .map(|p| (p.name().to_string(), p.value()))
            .collect()
    }

    pub fn rmse(&self) -> f64 {
        self.statistics.rmse
    }

    pub fn r_squared(&self) -> f64 {
        self.statistics.r_squared
    }

    pub fn mae(&self) -> f64 {
        self.statistics.mae
    }

    pub fn mse(&self) -> f64 {
        self.statistics.mse
    }

    /// `observed - predicted` at each observation time.
    pub fn residuals(&self) -> &Array1<f64> {
        &self.statistics.residuals
    }

    /// Fitted model sampled at `n` evenly spaced times in `[0, t_max]`.
    pub fn curve(&self, n: usize) -> Result<(Array1<f64>, Array1<f64>)> {
        if n < 2 {
            return Err(KineticsError::InvalidInput(format!(
                "A fitted curve needs at least 2 points, got {}",
                n
            )));
        }

        let t_max = self.times.iter().copied().fold(0.0, f64::max);
        let times = Array1::linspace(0.0, t_max, n);
        let concentrations = self
            .model
            .evaluate(&times, &self.parameter_values(), self.c0)?;
        Ok((times, concentrations))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn not_converged(model: KineticModel, reason: impl Into<String>) -> KineticsError {
    let reason = reason.into();
    warn!("{} fit did not converge: {}", model, reason);
    KineticsError::FitDidNotConverge { model, reason }
}

/// Fit `model` to a validated series with `c0` held fixed.
///
/// # Errors
///
/// * `InvalidInput` when `c0` is negative or not finite
/// * `InvalidParameter` when the options give the wrong number of values
/// * `FitDidNotConverge` when the solver cannot start or stops without
///   meeting its tolerances
/// * `UndefinedStatistic` when the observed concentrations have zero
///   variance, so R² does not exist
pub fn fit(
    series: &ObservationSeries,
    model: KineticModel,
    c0: f64,
    options: &FitOptions,
) -> Result<FitResult> {
    if !c0.is_finite() || c0 < 0.0 {
        return Err(KineticsError::InvalidInput(format!(
            "Initial concentration must be a non-negative number, got {}",
            c0
        )));
    }

    let bounds = options.bounds_for(model)?;
    let initial = Array1::from_vec(options.initial_guess_for(model)?);

    let problem = KineticProblem::new(model, series, c0);
    let bounded = BoundedProblem::new(&problem, &bounds)?;
    let start = bounded
        .to_internal(&initial)
        .map_err(|e| not_converged(model, format!("infeasible initial guess: {}", e)))?;

    let solver = LevenbergMarquardt::with_config(options.solver.clone());
    let solution = solver
        .minimize(&bounded, start)
        .map_err(|e| not_converged(model, e.to_string()))?;
    if !solution.success {
        return Err(not_converged(model, solution.message));
    }

    let values = bounded.to_external(&solution.params);
    let predicted = model.evaluate(series.times(), &values.to_vec(), c0)?;
    let statistics = calculate_statistics(&predicted, series.concentrations())?;
    if statistics.r_squared_defined().is_none() {
        warn!("{} fit: observed concentrations have zero variance", model);
        return Err(KineticsError::UndefinedStatistic(
            "R² is undefined because the observed concentrations have zero variance".to_string(),
        ));
    }

    let errors = finite_difference::jacobian(&problem, &values, Some(options.solver.diff_step))
        .ok()
        .and_then(|jac| standard_errors(&jac, &statistics.residuals));

    let parameters = model
        .parameter_names()
        .iter()
        .zip(values.iter().zip(&bounds))
        .enumerate()
        .map(|(i, (name, (&value, &b)))| {
            let mut parameter = Parameter::with_bounds(name, value, b);
            parameter.set_stderr(errors.as_ref().map(|e| e[i]));
            parameter
        })
        .collect::<Vec<_>>();

    info!(
        "{} fit converged after {} iterations: {:?}, R² = {:.4}, RMSE = {:.4}",
        model,
        solution.iterations,
        values.to_vec(),
        statistics.r_squared,
        statistics.rmse
    );

    Ok(FitResult {
        model,
        c0,
        parameters,
        statistics,
        times: series.times().clone(),
        observed: series.concentrations().clone(),
        predicted,
        iterations: solution.iterations,
        message: solution.message,
    })
}

/// Validate raw sequences, then [`fit`].
pub fn fit_data(
    time: &[f64],
    concentration: &[f64],
    model: KineticModel,
    c0: f64,
    options: &FitOptions,
) -> Result<FitResult> {
    let series = ObservationSeries::new(time.to_vec(), concentration.to_vec()).map_err(|e| {
        warn!("Rejected input data: {}", e);
        e
    })?;
    fit(&series, model, c0, options)
}

/// Fit every model to the same series, independently and in parallel.
///
/// One outcome per model, in [`KineticModel::ALL`] order; a failure for one
/// model does not affect the others.
pub fn fit_all_models(
    series: &ObservationSeries,
    c0: f64,
    options: &FitOptions,
) -> Vec<(KineticModel, Result<FitResult>)> {
    KineticModel::ALL
        .par_iter()
        .map(|&model| (model, fit(series, model, c0, options)))
        .collect()
}
