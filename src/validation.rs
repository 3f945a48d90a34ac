//! Input checks run before any fit is attempted.
//!
//! All checks are independent and all failures are reported, in a fixed
//! order, so a caller can show every problem with the data at once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fewest observations a fit is attempted on.
pub const MIN_POINTS: usize = 3;

/// A single reason a pair of time/concentration sequences cannot be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    LengthMismatch,
    TooFewPoints,
    NegativeTime,
    NegativeConcentration,
    TimeNotIncreasing,
    NonFiniteValue,
}

impl ValidationIssue {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationIssue::LengthMismatch => {
                "Number of time points must match number of concentration points"
            }
            ValidationIssue::TooFewPoints => "At least 3 data points are required for fitting",
            ValidationIssue::NegativeTime => "Time values must be non-negative",
            ValidationIssue::NegativeConcentration => "Concentration values must be non-negative",
            ValidationIssue::TimeNotIncreasing => "Time values must be strictly increasing",
            ValidationIssue::NonFiniteValue => "Time and concentration values must be finite numbers",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run every check and return the issues found, in check order.
pub fn validate(time: &[f64], concentration: &[f64]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if time.len() != concentration.len() {
        issues.push(ValidationIssue::LengthMismatch);
    }
    if time.len().min(concentration.len()) < MIN_POINTS {
        issues.push(ValidationIssue::TooFewPoints);
    }
    if time.iter().any(|&t| t < 0.0) {
        issues.push(ValidationIssue::NegativeTime);
    }
    if concentration.iter().any(|&c| c < 0.0) {
        issues.push(ValidationIssue::NegativeConcentration);
    }
    if time.windows(2).any(|w| w[0] >= w[1]) {
        issues.push(ValidationIssue::TimeNotIncreasing);
    }
    if time.iter().chain(concentration).any(|v| !v.is_finite()) {
        issues.push(ValidationIssue::NonFiniteValue);
    }

    issues
}

/// Human-readable error descriptions; empty when the data can be fitted.
///
/// ```
/// use kinfit_rs::validation::validate_data;
///
/// assert!(validate_data(&[0.0, 5.0, 10.0], &[10.0, 8.0, 6.0]).is_empty());
/// assert_eq!(
///     validate_data(&[0.0, 5.0, 3.0], &[10.0, 8.0, 6.0]),
///     vec!["Time values must be strictly increasing".to_string()]
/// );
/// ```
pub fn validate_data(time: &[f64], concentration: &[f64]) -> Vec<String> {
    validate(time, concentration)
        .into_iter()
        .map(|issue| issue.message().to_string())
        .collect()
}

/// The non-empty list of issues that stopped a fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Check the data, returning `Err` with every issue found.
    pub fn check(time: &[f64], concentration: &[f64]) -> Result<(), ValidationErrors> {
        let issues = validate(time, concentration);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { issues })
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.message().to_string()).collect()
    }

    pub fn contains(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
