//! Integration tests for the kinfit-rs library
//!
//! This module organizes all integration tests that test the library as a whole,
//! rather than individual components.

// The pinned reference fit of the degradation experiment
pub mod reference_scenario;

// Fits of data generated from known parameters
pub mod round_trip;

// All three models against the same data
pub mod model_comparison;
