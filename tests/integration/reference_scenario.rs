//! The reference degradation experiment, fitted with every model.

use approx::assert_relative_eq;
use kinfit_rs::io::{export_csv, generate_report};
use kinfit_rs::{fit, FitOptions, KineticModel};

use crate::test_helpers::{reference_series, REFERENCE_C0, REFERENCE_CONCENTRATIONS, REFERENCE_TIMES};

#[test]
fn test_first_order_reference_fit() {
    let result = fit(
        &reference_series(),
        KineticModel::FirstOrder,
        REFERENCE_C0,
        &FitOptions::default(),
    )
    .unwrap();

    let k = result.get("k").unwrap();
    assert!((0.02..=0.03).contains(&k));
    assert_relative_eq!(k, 0.0282257, epsilon = 1e-5);

    assert!(result.r_squared() > 0.95);
    assert_relative_eq!(result.r_squared(), 0.965091, epsilon = 1e-4);
    assert_relative_eq!(result.rmse(), 0.448165, epsilon = 1e-4);
    assert_relative_eq!(result.mae(), 0.375079, epsilon = 1e-4);
    assert_relative_eq!(result.mse(), 0.200852, epsilon = 1e-4);
}

#[test]
fn test_second_order_reference_fit() {
    let result = fit(
        &reference_series(),
        KineticModel::SecondOrder,
        REFERENCE_C0,
        &FitOptions::default(),
    )
    .unwrap();

    assert_relative_eq!(result.get("k").unwrap(), 0.004382, epsilon = 1e-4);
    assert!(result.r_squared() > 0.99);
}

#[test]
fn test_predictions_align_with_observations() {
    let result = fit(
        &reference_series(),
        KineticModel::SecondOrder,
        REFERENCE_C0,
        &FitOptions::default(),
    )
    .unwrap();

    assert_eq!(result.predicted.len(), REFERENCE_TIMES.len());
    for i in 0..REFERENCE_TIMES.len() {
        assert_eq!(result.times[i], REFERENCE_TIMES[i]);
        assert_eq!(result.observed[i], REFERENCE_CONCENTRATIONS[i]);
        assert_relative_eq!(
            result.residuals()[i],
            REFERENCE_CONCENTRATIONS[i] - result.predicted[i],
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_fit_result_exports() {
    let result = fit(
        &reference_series(),
        KineticModel::FirstOrder,
        REFERENCE_C0,
        &FitOptions::default(),
    )
    .unwrap();

    let csv = export_csv(&result).unwrap();
    assert_eq!(csv.lines().count(), REFERENCE_TIMES.len() + 1);
    assert!(csv.starts_with("time,experimental_concentration,predicted_concentration"));

    let report = generate_report(&result);
    assert!(report.contains("k: 0.0282"));
    assert!(report.contains("r2: 0.9651"));

    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert_eq!(json["model"], "first_order");
    assert_eq!(json["parameters"][0]["name"], "k");
}
