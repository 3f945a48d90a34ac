//! Fitting data generated from known parameters recovers those parameters.

use approx::assert_relative_eq;
use kinfit_rs::synthetic::{synthetic_series, synthetic_series_seeded};
use kinfit_rs::{fit, FitOptions, KineticModel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::test_helpers::{even_times, relative_error};

#[test]
fn test_first_order_recovers_rate_constant() {
    let k_true = 0.2;
    let times = even_times(10.0, 11);

    for seed in [1, 2, 3] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let series =
            synthetic_series(KineticModel::FirstOrder, &[k_true], 10.0, &times, 0.1, &mut rng).unwrap();
        let result = fit(&series, KineticModel::FirstOrder, 10.0, &FitOptions::default()).unwrap();

        let k = result.get("k").unwrap();
        assert!(relative_error(k, k_true) < 0.1, "seed {}: k = {}", seed, k);
        assert!(result.r_squared() > 0.9);
    }
}

#[test]
fn test_second_order_recovers_rate_constant() {
    let k_true = 0.01;
    let times = even_times(60.0, 13);

    for seed in [11, 12, 13] {
        let series =
            synthetic_series_seeded(KineticModel::SecondOrder, &[k_true], 10.0, &times, 0.05, seed)
                .unwrap();
        let result = fit(&series, KineticModel::SecondOrder, 10.0, &FitOptions::default()).unwrap();

        let k = result.get("k").unwrap();
        assert!(relative_error(k, k_true) < 0.1, "seed {}: k = {}", seed, k);
        assert!(result.r_squared() > 0.9);
    }
}

#[test]
fn test_langmuir_hinshelwood_recovers_both_constants() {
    let (k_true, adsorption_true) = (0.05, 0.2);
    let times = even_times(60.0, 13);

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let series = synthetic_series(
        KineticModel::LangmuirHinshelwood,
        &[k_true, adsorption_true],
        10.0,
        &times,
        0.05,
        &mut rng,
    )
    .unwrap();
    let result = fit(&series, KineticModel::LangmuirHinshelwood, 10.0, &FitOptions::default()).unwrap();

    assert!(relative_error(result.get("k").unwrap(), k_true) < 0.1);
    assert!(relative_error(result.get("K").unwrap(), adsorption_true) < 0.1);
    assert!(result.r_squared() > 0.9);
}

#[test]
fn test_noise_free_data_is_fitted_exactly() {
    let times = even_times(60.0, 13);
    let cases = [
        (KineticModel::FirstOrder, vec![0.03]),
        (KineticModel::SecondOrder, vec![0.005]),
        (KineticModel::LangmuirHinshelwood, vec![0.05, 0.2]),
    ];

    for (model, params) in cases {
        let series = synthetic_series_seeded(model, &params, 10.0, &times, 0.0, 0).unwrap();
        let result = fit(&series, model, 10.0, &FitOptions::default()).unwrap();

        for (fitted, expected) in result.parameter_values().iter().zip(&params) {
            assert_relative_eq!(*fitted, *expected, max_relative = 1e-5);
        }
        assert_relative_eq!(result.r_squared(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_standard_errors_shrink_with_less_noise() {
    let times = even_times(10.0, 11);
    let stderr_at = |noise: f64| {
        let series =
            synthetic_series_seeded(KineticModel::FirstOrder, &[0.2], 10.0, &times, noise, 5).unwrap();
        let result = fit(&series, KineticModel::FirstOrder, 10.0, &FitOptions::default()).unwrap();
        result.parameters[0].stderr().unwrap()
    };

    assert!(stderr_at(0.01) < stderr_at(0.2));
}
