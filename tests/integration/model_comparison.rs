//! Fitting every model to the same series.

use kinfit_rs::{fit, fit_all_models, FitOptions, KineticModel, KineticsError, ObservationSeries};

use crate::test_helpers::{reference_series, REFERENCE_C0};

#[test]
fn test_fit_all_models_matches_individual_fits() {
    let series = reference_series();
    let options = FitOptions::default();
    let outcomes = fit_all_models(&series, REFERENCE_C0, &options);

    assert_eq!(outcomes.len(), 3);
    for ((model, outcome), expected_model) in outcomes.iter().zip(KineticModel::ALL) {
        assert_eq!(*model, expected_model);

        let single = fit(&series, *model, REFERENCE_C0, &options);
        match (outcome, single) {
            (Ok(parallel), Ok(single)) => {
                assert_eq!(parallel.parameter_values(), single.parameter_values());
                assert_eq!(parallel.r_squared(), single.r_squared());
            }
            (Err(_), Err(_)) => {}
            (a, b) => panic!("{} disagrees: {:?} vs {:?}", model, a.is_ok(), b.is_ok()),
        }
    }
}

#[test]
fn test_second_order_describes_reference_data_best() {
    let outcomes = fit_all_models(&reference_series(), REFERENCE_C0, &FitOptions::default());

    let best = outcomes
        .iter()
        .filter_map(|(model, outcome)| outcome.as_ref().ok().map(|r| (*model, r.r_squared())))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();

    assert_eq!(best.0, KineticModel::SecondOrder);
}

#[test]
fn test_failure_of_one_model_leaves_others() {
    // c0 = 0 cannot be put through the Langmuir-Hinshelwood logarithm
    let series = ObservationSeries::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 0.1, 0.0, 0.2]).unwrap();
    let outcomes = fit_all_models(&series, 0.0, &FitOptions::default());

    let (_, lh) = &outcomes[2];
    assert!(matches!(lh, Err(KineticsError::FitDidNotConverge { .. })));
    // a zero c0 predicts a flat zero line whatever k is
    for (model, outcome) in &outcomes[..2] {
        let result = outcome.as_ref().unwrap();
        assert_eq!(result.model, *model);
        assert!(result.predicted.iter().all(|&p| p == 0.0));
    }
}
