//! Named fit parameters
//!
//! A fitted kinetic model reports its parameters by name (`k`, `K`) together
//! with the bounds the solver respected and, when it could be estimated, a
//! standard error.

use crate::parameters::bounds::Bounds;
use serde::{Deserialize, Serialize};

/// A named parameter of a kinetic model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Name of the parameter
    pub name: String,

    /// Current value of the parameter
    value: f64,

    /// Minimum and maximum bounds for the parameter value
    bounds: Bounds,

    /// Standard error of the parameter (set after fitting)
    pub stderr: Option<f64>,
}

impl Parameter {
    /// Create a new parameter with the given name, value, and bounds.
    ///
    /// The value is clamped into the bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinfit_rs::parameters::{Bounds, Parameter};
    ///
    /// let k = Parameter::with_bounds("k", 1500.0, Bounds::rate_constant());
    /// assert_eq!(k.name(), "k");
    /// assert_eq!(k.value(), 1000.0);
    /// ```
    pub fn with_bounds(name: &str, value: f64, bounds: Bounds) -> Self {
        Self {
            name: name.to_string(),
            value: bounds.clamp(value),
            bounds,
            stderr: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn stderr(&self) -> Option<f64> {
        self.stderr
    }

    pub fn set_stderr(&mut self, stderr: Option<f64>) {
        self.stderr = stderr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_clamped_into_bounds() {
        let k = Parameter::with_bounds("K", -3.0, Bounds::rate_constant());
        assert_eq!(k.value(), 0.0);
        assert_eq!(k.bounds(), Bounds::rate_constant());

        let mut k = Parameter::with_bounds("k", 0.02, Bounds::rate_constant());
        assert_eq!(k.value(), 0.02);
        assert_eq!(k.stderr(), None);
        k.set_stderr(Some(0.001));
        assert_eq!(k.stderr(), Some(0.001));
    }
}
