//! # Parameter System
//!
//! Named, bounded parameters for the kinetic models.
//!
//! - [`Parameter`]: a named value with bounds and an optional standard error
//! - [`Bounds`] and [`BoundsTransform`]: keep the solver inside the physical window
//!
//! ```rust
//! use kinfit_rs::parameters::{Bounds, BoundsTransform};
//!
//! let transform = BoundsTransform::new(Bounds::rate_constant());
//! let internal = transform.to_internal(0.1).unwrap();
//! assert!((transform.to_external(internal) - 0.1).abs() < 1e-10);
//! ```

pub mod bounds;
pub mod parameter;

pub use bounds::{Bounds, BoundsError, BoundsTransform};
pub use parameter::Parameter;
