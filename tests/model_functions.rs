//! Properties of the kinetic rate laws.

use approx::assert_relative_eq;
use kinfit_rs::{KineticModel, KineticsError};
use ndarray::Array1;

#[test]
fn test_first_and_second_order_start_at_c0() {
    for model in [KineticModel::FirstOrder, KineticModel::SecondOrder] {
        for &k in &[0.0, 1e-4, 0.03, 2.5, 999.0] {
            for &c0 in &[0.0, 0.5, 10.0, 250.0] {
                let c = model.evaluate_at(0.0, &[k], c0).unwrap();
                assert_relative_eq!(c, c0, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_langmuir_hinshelwood_at_time_zero_is_finite() {
    for &(k, adsorption) in &[(0.0, 0.0), (0.05, 0.2), (10.0, 1000.0), (1000.0, 0.0)] {
        let c = KineticModel::LangmuirHinshelwood
            .evaluate_at(0.0, &[k, adsorption], 10.0)
            .unwrap();
        assert!(c.is_finite());
        assert_eq!(c, 0.0);
    }
}

#[test]
fn test_decay_is_non_increasing() {
    let times = Array1::linspace(0.0, 100.0, 201);

    for model in [KineticModel::FirstOrder, KineticModel::SecondOrder] {
        for &k in &[1e-3, 0.05, 0.8] {
            let c = model.evaluate(&times, &[k], 10.0).unwrap();
            assert_eq!(c.len(), times.len());
            for w in c.as_slice().unwrap().windows(2) {
                assert!(w[1] <= w[0], "{} with k = {} increased", model, k);
            }
        }
    }
}

#[test]
fn test_out_of_range_rate_constants_are_clamped() {
    let times = Array1::linspace(0.0, 10.0, 5);

    for model in [KineticModel::FirstOrder, KineticModel::SecondOrder] {
        let negative = model.evaluate(&times, &[-3.0], 10.0).unwrap();
        let zero = model.evaluate(&times, &[0.0], 10.0).unwrap();
        assert_eq!(negative, zero);

        let huge = model.evaluate(&times, &[1e9], 10.0).unwrap();
        let max = model.evaluate(&times, &[1000.0], 10.0).unwrap();
        assert_eq!(huge, max);
        assert!(huge.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_langmuir_hinshelwood_non_positive_logarithm_fails() {
    let times = Array1::from_vec(vec![0.0, 1.0, 2.0]);

    let err = KineticModel::LangmuirHinshelwood
        .evaluate(&times, &[0.1, 0.1], 0.0)
        .unwrap_err();
    assert!(matches!(err, KineticsError::ModelEvaluation(_)));

    // exp(-1000 * 2) underflows to zero
    let err = KineticModel::LangmuirHinshelwood
        .evaluate(&times, &[1000.0, 0.1], 10.0)
        .unwrap_err();
    assert!(err.to_string().contains("t = 1"));
}

#[test]
fn test_model_names_parse() {
    for model in KineticModel::ALL {
        assert_eq!(model.name().parse::<KineticModel>().unwrap(), model);
    }
    assert!(matches!(
        "zeroth order".parse::<KineticModel>(),
        Err(KineticsError::UnknownModel(_))
    ));
}
