//! Convergence criteria for the Levenberg-Marquardt iteration.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Possible convergence states of the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvergenceStatus {
    /// The solver is still running.
    Running,

    /// Converged: the step is small relative to the parameters.
    ParameterConvergence,

    /// Converged: the relative decrease of the cost is small.
    FunctionValueConvergence,

    /// Converged: the gradient of the cost vanishes.
    GradientConvergence,

    /// Terminated: maximum number of iterations reached.
    MaxIterationsReached,

    /// Terminated: no step reduced the cost before the damping hit its maximum.
    DampingLimitReached,
}

impl ConvergenceStatus {
    /// Returns true if the optimization has converged.
    pub fn is_converged(&self) -> bool {
        matches!(
            self,
            ConvergenceStatus::ParameterConvergence
                | ConvergenceStatus::FunctionValueConvergence
                | ConvergenceStatus::GradientConvergence
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConvergenceStatus::Running => "Optimization is still running",
            ConvergenceStatus::ParameterConvergence => "Converged: small parameter change",
            ConvergenceStatus::FunctionValueConvergence => "Converged: small cost change",
            ConvergenceStatus::GradientConvergence => "Converged: small gradient",
            ConvergenceStatus::MaxIterationsReached => "Terminated: maximum iterations reached",
            ConvergenceStatus::DampingLimitReached => {
                "Terminated: failed to decrease cost before damping reached its maximum"
            }
        }
    }
}

/// Tolerances deciding when the iteration stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceCriteria {
    /// Tolerance for the step relative to the parameter norm.
    pub xtol: f64,

    /// Tolerance for the relative decrease in cost.
    pub ftol: f64,

    /// Tolerance for the largest gradient component.
    pub gtol: f64,
}

impl ConvergenceCriteria {
    pub fn new(xtol: f64, ftol: f64, gtol: f64) -> Self {
        Self { xtol, ftol, gtol }
    }

    /// Gradient test, applied before a step is attempted.
    pub fn check_gradient(&self, gradient: &Array1<f64>) -> ConvergenceStatus {
        let largest = gradient.iter().fold(0.0_f64, |acc, g| acc.max(g.abs()));
        if largest < self.gtol {
            ConvergenceStatus::GradientConvergence
        } else {
            ConvergenceStatus::Running
        }
    }

    /// True when `step` is too small, relative to `params`, to matter.
    pub fn step_is_negligible(&self, params: &Array1<f64>, step: &Array1<f64>) -> bool {
        norm(step) <= self.xtol * (norm(params) + self.xtol)
    }

    /// Tests applied after a step has been accepted.
    pub fn check_accepted_step(
        &self,
        params: &Array1<f64>,
        step: &Array1<f64>,
        cost: f64,
        new_cost: f64,
    ) -> ConvergenceStatus {
        if self.step_is_negligible(params, step) {
            ConvergenceStatus::ParameterConvergence
        } else if cost - new_cost <= self.ftol * cost {
            ConvergenceStatus::FunctionValueConvergence
        } else {
            ConvergenceStatus::Running
        }
    }
}

fn norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}
