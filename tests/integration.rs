//! End-to-end integration tests.

use bootstrap_median::statistics::{median, resample, standard_error};
use bootstrap_median::{
    bootstrap_sample, bootstrap_sample_with_rng, Bootstrap, BootstrapError, InvalidInput,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

const DATA: [f64; 9] = [1.2, 2.4, 3.6, 4.8, 5.0, 6.1, 7.3, 8.4, 9.9];

/// The demonstration scenario: 1000 replicates over the fixed sample.
#[test]
fn end_to_end_scenario() {
    let result = bootstrap_sample(&DATA, 1000).unwrap();

    assert_eq!(result.statistics.len(), 1000);
    for m in &result.statistics {
        assert!(DATA.contains(m), "median {} is not a dataset value", m);
    }

    let (min, max) = (1.2_f64, 9.9_f64);
    assert!(result.std_error >= 0.0);
    assert!(result.std_error <= (max - min) / 2.0);
}

/// Even-length datasets produce medians that are midpoints of dataset values.
#[test]
fn even_length_medians_are_midpoints() {
    let data = [1.0, 2.0, 4.0, 8.0];
    let result = Bootstrap::new().n_boot(300).seed(8).run(&data).unwrap();

    for m in &result.statistics {
        let is_midpoint = data
            .iter()
            .any(|&a| data.iter().any(|&b| ((a + b) / 2.0 - m).abs() < 1e-12));
        assert!(is_midpoint, "median {} is not a midpoint of dataset values", m);
    }
}

/// Same generator state in, same result out.
#[test]
fn deterministic_under_fixed_randomness() {
    let mut rng_a = Xoshiro256PlusPlus::seed_from_u64(123);
    let mut rng_b = Xoshiro256PlusPlus::seed_from_u64(123);

    let a = bootstrap_sample_with_rng(&DATA, 500, &mut rng_a).unwrap();
    let b = bootstrap_sample_with_rng(&DATA, 500, &mut rng_b).unwrap();

    assert_eq!(a.statistics, b.statistics);
    assert_eq!(a.std_error, b.std_error);
}

/// The configured orchestrator is reproducible from its seed alone.
#[test]
fn seeded_builder_is_reproducible() {
    let a = Bootstrap::new().n_boot(1000).seed(99).run(&DATA).unwrap();
    let b = Bootstrap::new().n_boot(1000).seed(99).run(&DATA).unwrap();
    let c = Bootstrap::new().n_boot(1000).seed(100).run(&DATA).unwrap();

    assert_eq!(a.statistics, b.statistics);
    assert_ne!(a.statistics, c.statistics);
}

/// The reported standard error is the standard error of the reported medians.
#[test]
fn std_error_matches_statistics() {
    let result = Bootstrap::new().n_boot(400).seed(4).run(&DATA).unwrap();
    let recomputed = standard_error(&result.statistics).unwrap();
    assert_eq!(result.std_error, recomputed);
}

#[test]
fn degenerate_dataset() {
    let result = bootstrap_sample(&[7.0, 7.0, 7.0], 100).unwrap();
    assert_eq!(result.statistics.len(), 100);
    assert!(result.statistics.iter().all(|&m| m == 7.0));
    assert_eq!(result.std_error, 0.0);
}

#[test]
fn single_replicate() {
    let result = bootstrap_sample(&DATA, 1).unwrap();
    assert_eq!(result.statistics.len(), 1);
    assert_eq!(result.std_error, 0.0);
}

#[test]
fn error_scenarios() {
    assert_eq!(
        bootstrap_sample(&[], 10).unwrap_err(),
        BootstrapError::InvalidInput(InvalidInput::EmptyDataset)
    );
    assert_eq!(
        bootstrap_sample(&[1.0, 2.0], 0).unwrap_err(),
        BootstrapError::InvalidInput(InvalidInput::ZeroReplicates)
    );
    assert_eq!(
        median(&[]).unwrap_err(),
        BootstrapError::InvalidInput(InvalidInput::EmptyDataset)
    );

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    assert!(bootstrap_sample_with_rng(&[], 5, &mut rng).is_err());
    assert!(resample(&[], &mut rng).is_err());
}

#[test]
fn median_examples() {
    assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    assert_eq!(median(&[5.0]).unwrap(), 5.0);
}

/// Standard error is non-negative everywhere and zero only for constant input.
#[test]
fn standard_error_non_negativity() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(31);
    for len in 1..40 {
        let values = resample(&DATA[..(len % DATA.len()) + 1], &mut rng).unwrap();
        let se = standard_error(&values).unwrap();
        assert!(se >= 0.0);

        let all_equal = values.iter().all(|&v| v == values[0]);
        assert_eq!(se == 0.0, all_equal, "values: {:?}", values);
    }
}

/// The half-range bound holds at both ends of the float range.
#[test]
fn extreme_magnitudes_respect_half_range_bound() {
    for data in [
        [1.5e308, 1.6e308, 1.7e308, 1.65e308],
        [-f64::MAX, -1.0, 1.0, f64::MAX],
        [1e-200, 2e-200, 3e-200, 5e-200],
    ] {
        let result = Bootstrap::new().n_boot(300).seed(6).run(&data).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        assert!(result.statistics.iter().all(|m| m.is_finite()));
        assert!(result.std_error > 0.0, "data: {:?}", data);
        assert!(result.std_error <= max / 2.0 - min / 2.0, "data: {:?}", data);
    }
}

/// Result serialization.
#[test]
fn result_serialization() {
    let result = Bootstrap::quick().seed(1).run(&DATA).unwrap();

    let json = serde_json::to_string(&result).expect("Should serialize");
    assert!(json.contains("std_error"));
    assert!(json.contains("\"n_boot\":200"));
}
