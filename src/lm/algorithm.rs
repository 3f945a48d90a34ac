//! Implementation of the Levenberg-Marquardt algorithm.
//!
//! Each iteration solves the damped normal equations `(JᵀJ + λI) δ = -Jᵀr`
//! by Cholesky factorization. A step is accepted only if it lowers the sum of
//! squared residuals; otherwise λ grows and the step is retried. Trial points
//! at which the model cannot be evaluated count as infinitely bad steps.

use log::debug;
use ndarray::{Array1, Array2};
use std::fmt;

use crate::error::{KineticsError, Result};
use crate::problem::Problem;
use crate::utils::finite_difference;
use crate::utils::linalg::cholesky_solve;

use super::config::LmConfig;
use super::convergence::ConvergenceStatus;

/// Result of the Levenberg-Marquardt optimization.
#[derive(Debug, Clone)]
pub struct LmResult {
    /// Optimized parameter values
    pub params: Array1<f64>,

    /// Residuals at the solution
    pub residuals: Array1<f64>,

    /// Sum of squared residuals
    pub cost: f64,

    /// Number of accepted steps
    pub iterations: usize,

    /// Number of function evaluations, including those for the Jacobian
    pub func_evals: usize,

    /// Whether the optimization converged
    pub success: bool,

    /// Why the iteration stopped
    pub status: ConvergenceStatus,

    /// A message describing the result
    pub message: String,
}

impl fmt::Display for LmResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimization Result:")?;
        writeln!(f, "  Success: {}", self.success)?;
        writeln!(f, "  Message: {}", self.message)?;
        writeln!(f, "  Cost: {:.6e}", self.cost)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Function evaluations: {}", self.func_evals)?;
        writeln!(f, "  Parameters: {:?}", self.params)?;
        Ok(())
    }
}

/// The Levenberg-Marquardt optimizer.
#[derive(Debug, Clone, Default)]
pub struct LevenbergMarquardt {
    /// Configuration options
    config: LmConfig,
}

impl LevenbergMarquardt {
    /// Create a new Levenberg-Marquardt optimizer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Levenberg-Marquardt optimizer with the given configuration.
    pub fn with_config(config: LmConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LmConfig {
        &self.config
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the tolerance for relative change in cost.
    pub fn with_ftol(mut self, ftol: f64) -> Self {
        self.config.ftol = ftol;
        self
    }

    /// Set the tolerance for change in parameter values.
    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.config.xtol = xtol;
        self
    }

    /// Set the tolerance for the gradient.
    pub fn with_gtol(mut self, gtol: f64) -> Self {
        self.config.gtol = gtol;
        self
    }

    /// Set the initial value for the damping parameter.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.config.initial_lambda = lambda;
        self
    }

    /// Set the relative finite-difference step.
    pub fn with_diff_step(mut self, diff_step: f64) -> Self {
        self.config.diff_step = diff_step;
        self
    }

    /// Minimize the sum of squared residuals for the given problem.
    ///
    /// # Arguments
    ///
    /// * `problem` - The problem to solve
    /// * `initial_params` - Initial guess for the parameter values
    ///
    /// # Errors
    ///
    /// Fails if the parameter count is wrong, if the residuals cannot be
    /// evaluated at the initial guess, or if the Jacobian cannot be evaluated
    /// at an accepted point. Running out of iterations or damping is not an
    /// error: it is reported through [`LmResult::success`].
    pub fn minimize<P: Problem>(&self, problem: &P, initial_params: Array1<f64>) -> Result<LmResult> {
        let n_params = problem.parameter_count();
        if initial_params.len() != n_params {
            return Err(KineticsError::DimensionMismatch(format!(
                "Expected {} parameters, got {}",
                n_params,
                initial_params.len()
            )));
        }

        let config = &self.config;
        let criteria = config.convergence_criteria();

        let mut params = initial_params;
        let mut residuals = problem.eval(&params)?;
        let mut cost = sum_of_squares(&residuals);
        let mut func_evals = 1;
        if !cost.is_finite() {
            return Err(KineticsError::ModelEvaluation(format!(
                "Residuals are not finite at the initial parameters {:?}",
                params
            )));
        }

        let mut lambda = config.initial_lambda;
        let mut iterations = 0;

        let status = 'outer: loop {
            if iterations >= config.max_iterations {
                break ConvergenceStatus::MaxIterationsReached;
            }

            let jac = self.jacobian(problem, &params, &residuals)?;
            if !problem.has_custom_jacobian() {
                func_evals += n_params;
            }

            let jtj = jac.t().dot(&jac);
            let gradient = jac.t().dot(&residuals);

            let status = criteria.check_gradient(&gradient);
            if status.is_converged() {
                break status;
            }
            let neg_gradient = gradient.mapv(|g| -g);

            loop {
                let mut damped = jtj.clone();
                for i in 0..n_params {
                    damped[[i, i]] += lambda;
                }

                let step = match cholesky_solve(&damped, &neg_gradient) {
                    Some(step) => step,
                    None => {
                        lambda *= config.lambda_up_factor;
                        if lambda > config.max_lambda {
                            break 'outer ConvergenceStatus::DampingLimitReached;
                        }
                        continue;
                    }
                };

                let trial = &params + &step;
                let evaluated = trial_residuals(problem, &trial)?;
                func_evals += 1;

                match evaluated {
                    Some((new_residuals, new_cost)) if new_cost < cost => {
                        let status = criteria.check_accepted_step(&params, &step, cost, new_cost);

                        params = trial;
                        residuals = new_residuals;
                        cost = new_cost;
                        lambda = (lambda * config.lambda_down_factor).max(config.min_lambda);
                        iterations += 1;

                        debug!(
                            "LM iteration {}: cost = {:.6e}, lambda = {:.2e}, params = {:?}",
                            iterations, cost, lambda, params
                        );

                        if status.is_converged() {
                            break 'outer status;
                        }
                        break;
                    }
                    _ => {
                        if criteria.step_is_negligible(&params, &step) {
                            break 'outer ConvergenceStatus::ParameterConvergence;
                        }
                        lambda *= config.lambda_up_factor;
                        if lambda > config.max_lambda {
                            break 'outer ConvergenceStatus::DampingLimitReached;
                        }
                    }
                }
            }
        };

        let message = match status {
            ConvergenceStatus::MaxIterationsReached => format!(
                "Maximum iterations ({}) reached",
                config.max_iterations
            ),
            ConvergenceStatus::DampingLimitReached => format!(
                "{} (lambda > {:.1e})",
                status.description(),
                config.max_lambda
            ),
            _ => status.description().to_string(),
        };

        debug!(
            "LM finished after {} iterations ({} evaluations): {}",
            iterations, func_evals, message
        );

        Ok(LmResult {
            params,
            residuals,
            cost,
            iterations,
            func_evals,
            success: status.is_converged(),
            status,
            message,
        })
    }

    fn jacobian<P: Problem>(
        &self,
        problem: &P,
        params: &Array1<f64>,
        residuals: &Array1<f64>,
    ) -> Result<Array2<f64>> {
        if problem.has_custom_jacobian() {
            problem.jacobian(params)
        } else {
            finite_difference::jacobian_at(problem, params, residuals, Some(self.config.diff_step))
        }
    }
}

fn sum_of_squares(residuals: &Array1<f64>) -> f64 {
    residuals.iter().map(|r| r.powi(2)).sum()
}

/// Residuals and cost at a trial point, or `None` when the model cannot be
/// evaluated there.
fn trial_residuals<P: Problem>(problem: &P, params: &Array1<f64>) -> Result<Option<(Array1<f64>, f64)>> {
    match problem.eval(params) {
        Ok(residuals) => {
            let cost = sum_of_squares(&residuals);
            Ok(cost.is_finite().then_some((residuals, cost)))
        }
        Err(KineticsError::ModelEvaluation(reason)) => {
            debug!("Rejecting trial point {:?}: {}", params, reason);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
