//! Integration tests for the Levenberg-Marquardt algorithm.

use approx::assert_relative_eq;
use kinfit_rs::lm::{ConvergenceStatus, LevenbergMarquardt, LmConfig};
use kinfit_rs::problem::{BoundedProblem, KineticProblem};
use kinfit_rs::{Bounds, KineticModel, KineticsError, ObservationSeries, Problem, Result};
use ndarray::{array, Array1, Array2};

/// Test Problem: Simple 1D linear function f(x) = a*x + b
struct LinearProblem {
    x_data: Array1<f64>,
    y_data: Array1<f64>,
}

impl Problem for LinearProblem {
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>> {
        if params.len() != 2 {
            return Err(KineticsError::DimensionMismatch(format!(
                "Expected 2 parameters, got {}",
                params.len()
            )));
        }

        Ok(&self.x_data * params[0] + params[1] - &self.y_data)
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn residual_count(&self) -> usize {
        self.x_data.len()
    }

    fn jacobian(&self, _params: &Array1<f64>) -> Result<Array2<f64>> {
        let n = self.x_data.len();
        let mut jac = Array2::ones((n, 2));
        jac.column_mut(0).assign(&self.x_data);
        Ok(jac)
    }

    fn has_custom_jacobian(&self) -> bool {
        true
    }
}

/// Test Problem: Rosenbrock function as residuals r₁ = 1 - x, r₂ = 10(y - x²)
struct RosenbrockProblem;

impl Problem for RosenbrockProblem {
    fn eval(&self, params: &Array1<f64>) -> Result<Array1<f64>> {
        let (x, y) = (params[0], params[1]);
        Ok(array![1.0 - x, 10.0 * (y - x.powi(2))])
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn residual_count(&self) -> usize {
        2
    }

    fn jacobian(&self, params: &Array1<f64>) -> Result<Array2<f64>> {
        Ok(array![[-1.0, 0.0], [-20.0 * params[0], 10.0]])
    }

    fn has_custom_jacobian(&self) -> bool {
        true
    }
}

#[test]
fn test_linear_fitting() {
    // y = 3x + 2 + noise
    let problem = LinearProblem {
        x_data: array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        y_data: array![2.1, 4.9, 8.05, 10.8, 14.1, 17.0],
    };

    let result = LevenbergMarquardt::new()
        .minimize(&problem, array![1.0, 1.0])
        .unwrap();

    assert!(result.success);
    assert_relative_eq!(result.params[0], 3.0, epsilon = 0.1);
    assert_relative_eq!(result.params[1], 2.0, epsilon = 0.1);
    assert!(result.cost < 0.1);
}

#[test]
fn test_rosenbrock_optimization() {
    let result = LevenbergMarquardt::new()
        .minimize(&RosenbrockProblem, array![-1.2, 1.0])
        .unwrap();

    assert!(result.success, "{}", result.message);
    assert_relative_eq!(result.params[0], 1.0, epsilon = 1e-5);
    assert_relative_eq!(result.params[1], 1.0, epsilon = 1e-5);
}

#[test]
fn test_config_builders() {
    let lm = LevenbergMarquardt::new()
        .with_max_iterations(10)
        .with_ftol(1e-6)
        .with_xtol(1e-7)
        .with_gtol(1e-8)
        .with_lambda(1.0)
        .with_diff_step(1e-6);

    let config = lm.config();
    assert_eq!(config.max_iterations, 10);
    assert_eq!(config.ftol, 1e-6);
    assert_eq!(config.xtol, 1e-7);
    assert_eq!(config.gtol, 1e-8);
    assert_eq!(config.initial_lambda, 1.0);
    assert_eq!(config.diff_step, 1e-6);
    assert_eq!(LmConfig::default().max_iterations, 200);
}

#[test]
fn test_iteration_limit_reported() {
    let result = LevenbergMarquardt::new()
        .with_max_iterations(2)
        .minimize(&RosenbrockProblem, array![-1.2, 1.0])
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.status, ConvergenceStatus::MaxIterationsReached);
    assert!(result.message.contains("Maximum iterations"));
}

#[test]
fn test_bounded_kinetic_problem() {
    let series = ObservationSeries::new(
        vec![0.0, 5.0, 10.0, 15.0, 20.0, 30.0, 45.0, 60.0],
        vec![10.0, 8.5, 7.2, 6.1, 5.2, 4.1, 3.3, 2.7],
    )
    .unwrap();
    let problem = KineticProblem::new(KineticModel::FirstOrder, &series, 10.0);
    let bounded = BoundedProblem::new(&problem, &[Bounds::rate_constant()]).unwrap();

    let start = bounded.to_internal(&array![1.0]).unwrap();
    let result = LevenbergMarquardt::new().minimize(&bounded, start).unwrap();
    let k = bounded.to_external(&result.params)[0];

    assert!(result.success);
    assert_relative_eq!(k, 0.0282257, epsilon = 1e-5);
    assert_relative_eq!(result.cost, problem.eval_cost(&array![k]).unwrap(), epsilon = 1e-10);
}
