use thiserror::Error;

use crate::models::KineticModel;
use crate::parameters::bounds::BoundsError;
use crate::validation::ValidationErrors;

/// Error types for the kinfit-rs library.
#[derive(Error, Debug)]
pub enum KineticsError {
    /// The input series failed one or more validation checks.
    #[error("Invalid data: {0}")]
    Validation(ValidationErrors),

    /// The optimizer could not find a parameter vector within its tolerances.
    #[error("{model} fit did not converge: {reason}")]
    FitDidNotConverge { model: KineticModel, reason: String },

    /// A statistic is mathematically undefined for the given data.
    #[error("Undefined statistic: {0}")]
    UndefinedStatistic(String),

    /// Error indicating a mismatch in array dimensions.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error for invalid parameter values.
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(String),

    /// Error for boundary constraint violations.
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// A model could not be evaluated at a point.
    #[error("Model evaluation error: {0}")]
    ModelEvaluation(String),

    /// The model name is not one of the supported kinetic laws.
    #[error("Unknown kinetic model: {0}")]
    UnknownModel(String),

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// CSV reading/writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KineticsError {
    /// Returns true when the error came from the solver rather than from the input.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, KineticsError::FitDidNotConverge { .. })
    }
}

impl From<ValidationErrors> for KineticsError {
    fn from(errors: ValidationErrors) -> Self {
        KineticsError::Validation(errors)
    }
}

/// Result type alias for kinfit-rs operations.
pub type Result<T> = std::result::Result<T, KineticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KineticsError::DimensionMismatch("expected 8 residuals, got 7".to_string());
        assert!(format!("{}", err).contains("expected 8 residuals, got 7"));

        let err = KineticsError::FitDidNotConverge {
            model: KineticModel::SecondOrder,
            reason: "maximum iterations (200) reached".to_string(),
        };
        let text = format!("{}", err);
        assert!(text.contains("Second Order"));
        assert!(text.contains("maximum iterations"));
        assert!(err.is_convergence_failure());

        let err = KineticsError::ModelEvaluation("log argument is not positive at t = 5".to_string());
        assert!(!err.is_convergence_failure());
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KineticsError = io_err.into();

        match err {
            KineticsError::Io(_) => (),
            _ => panic!("Expected Io variant"),
        }

        let bounds_err: KineticsError = BoundsError::InfiniteValue.into();
        assert!(matches!(bounds_err, KineticsError::Bounds(_)));
        assert!(!bounds_err.is_convergence_failure());
    }
}
