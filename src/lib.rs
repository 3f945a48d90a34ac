//! # kinfit-rs
//!
//! `kinfit-rs` fits concentration decay data to chemical kinetic models and
//! reports goodness-of-fit statistics.
//!
//! The library provides:
//! - First-order, second-order and Langmuir-Hinshelwood rate laws
//! - A bounded Levenberg-Marquardt solver for the model parameters
//! - RMSE, R², MAE and MSE of the fitted model, plus parameter standard errors
//! - An input validation gate that reports every problem with the data
//! - CSV parsing and export helpers and a plain-text report
//!
//! ## Basic Usage
//!
//! ```
//! use kinfit_rs::{fit, FitOptions, KineticModel, ObservationSeries};
//!
//! let series = ObservationSeries::new(
//!     vec![0.0, 5.0, 10.0, 15.0, 20.0, 30.0, 45.0, 60.0],
//!     vec![10.0, 8.5, 7.2, 6.1, 5.2, 4.1, 3.3, 2.7],
//! )
//! .unwrap();
//!
//! let result = fit(&series, KineticModel::FirstOrder, 10.0, &FitOptions::default()).unwrap();
//! let k = result.get("k").unwrap();
//! assert!(k > 0.02 && k < 0.03);
//! assert!(result.r_squared() > 0.95);
//! ```

pub mod error;
pub mod fit;
pub mod io;
pub mod lm;
pub mod models;
pub mod parameters;
pub mod problem;
pub mod series;
pub mod statistics;
pub mod synthetic;
pub mod uncertainty;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use error::{KineticsError, Result};
pub use fit::{fit, fit_all_models, fit_data, FitOptions, FitResult};
pub use lm::{LevenbergMarquardt, LmConfig, LmResult};
pub use models::KineticModel;
pub use parameters::{Bounds, Parameter};
pub use problem::Problem;
pub use series::ObservationSeries;
pub use statistics::{calculate_statistics, FitStatistics};
pub use validation::{validate_data, ValidationErrors, ValidationIssue};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
