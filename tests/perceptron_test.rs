//! End-to-end training and inference through the public API.

use std::sync::mpsc;

use ferrite_perceptron::data::{builtin, parse_samples};
use ferrite_perceptron::*;

fn step_network(units_per_layer: usize) -> Perceptron {
    Perceptron::new(1, units_per_layer, ActivationFunction::Step { threshold: 0.5 }, 0.1, 1)
}

/// Runs every training sample through `process`, bias prepended.
fn classify_all(network: &mut Perceptron, samples: &[Sample]) -> Vec<u32> {
    samples
        .iter()
        .map(|sample| {
            let mut input = vec![network.bias()];
            input.extend_from_slice(sample.inputs());
            network.process(&input).unwrap()
        })
        .collect()
}

// =============================================================================
// Convergence
// =============================================================================

#[test]
fn test_nand_single_unit() {
    let mut p = step_network(1);
    p.set_tracing(true);
    p.train(&builtin::nand(), WeightInit::Zero).unwrap();

    assert_eq!(p.process(&[1, 0, 0]).unwrap(), 1);
    assert_eq!(p.process(&[1, 0, 1]).unwrap(), 1);
    assert_eq!(p.process(&[1, 1, 0]).unwrap(), 1);
    assert_eq!(p.process(&[1, 1, 1]).unwrap(), 0);
}

#[test]
fn test_and_or_converge() {
    for (samples, iterations) in [(builtin::and(), 13), (builtin::or(), 11)] {
        let mut p = step_network(1);
        let report = p.train(&samples, WeightInit::Zero).unwrap();
        assert_eq!(report.iterations, iterations);

        let expected: Vec<u32> = samples.iter().map(Sample::expected).collect();
        assert_eq!(classify_all(&mut p, &samples), expected);
    }
}

#[test]
fn test_converged_run_ends_with_a_full_stable_streak() {
    let samples = builtin::nand();
    let mut p = step_network(1);
    let report = p.train(&samples, WeightInit::Zero).unwrap();

    // the loop only stops after more than one full pass without corrections
    assert!(report.iterations >= report.corrections + samples.len() + 1);
    assert_eq!(p.state(), TrainState::Converged);
}

#[test]
fn test_csv_dataset_trains() {
    let samples = parse_samples(b"x1,x2,nand\n0,0,1\n0,1,1\n1,0,1\n1,1,0\n").unwrap();
    assert_eq!(samples, builtin::nand());

    let mut p = step_network(1);
    p.train(&samples, WeightInit::Zero).unwrap();
    assert_eq!(classify_all(&mut p, &samples), vec![1, 1, 1, 0]);
}

#[test]
fn test_spec_driven_network() {
    let spec: PerceptronSpec = serde_json::from_str(
        r#"{
            "activation": {"type": "step", "threshold": 0.5},
            "learning_rate": 0.1,
            "bias": 1,
            "weight_init": "random",
            "seed": 11,
            "max_iterations": 10000
        }"#,
    )
    .unwrap();

    let samples = builtin::or();
    let run = || {
        let mut p = Perceptron::from_spec(&spec);
        let report = p.train_with(&samples, &spec.train_config()).unwrap();
        let weights = p.units().next().unwrap().weights().to_vec();
        (p, report, weights)
    };

    let (mut p, report, weights) = run();
    assert_eq!(p.state(), TrainState::Converged);
    assert!(report.iterations >= report.corrections + samples.len() + 1);
    assert!(weights.iter().any(|w| *w != 0.0));
    assert_eq!(classify_all(&mut p, &samples), vec![0, 1, 1, 1]);

    // the seed pins the random start, so a second run retraces the first
    let (_, report_again, weights_again) = run();
    assert_eq!(report_again, report);
    assert_eq!(weights_again, weights);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_zero_init_is_deterministic() {
    let trace = || {
        let (tx, rx) = mpsc::channel();
        let mut p = step_network(1).with_sink(tx);
        p.set_tracing(true);
        let report = p.train(&builtin::nand(), WeightInit::Zero).unwrap();
        drop(p);
        (report, rx.iter().collect::<Vec<TraceRecord>>())
    };

    let (report_a, records_a) = trace();
    let (report_b, records_b) = trace();
    assert_eq!(report_a, report_b);
    assert_eq!(records_a, records_b);
}

#[test]
fn test_weight_length_after_first_iteration() {
    let mut p = step_network(2);
    let config = TrainConfig::new(WeightInit::Zero).with_max_iterations(1);
    let samples = vec![Sample::new(vec![1, 0, 1], 1)];

    // one application cannot produce a stable streak longer than the dataset
    assert!(p.train_with(&samples, &config).is_err());
    for unit in p.units() {
        assert_eq!(unit.weights().len(), 4);
        assert_eq!(unit.inputs().len(), 4);
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_empty_dataset() {
    let mut p = step_network(1);
    let err = p.train(&[], WeightInit::Random).unwrap_err();
    assert!(matches!(err, PerceptronError::EmptyDataset));
    assert!(p.units().all(|u| u.weights().is_empty()));
}

#[test]
fn test_empty_feature_vector() {
    let mut p = step_network(1);
    let err = p.train(&[Sample::new(vec![], 0)], WeightInit::Zero).unwrap_err();
    assert!(matches!(err, PerceptronError::EmptyFeatureVector));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PerceptronError::EmptyDataset.to_string(),
        "not enough training samples: the dataset is empty"
    );
    let err = PerceptronError::IndexBounds {
        unit: UnitId { layer: 0, index: 2 },
        inputs: 3,
        weights: 4,
    };
    assert_eq!(err.to_string(), "index out of bounds in unit 0.2: 3 inputs for 4 weights");
}

#[test]
fn test_process_with_wrong_width_after_training() {
    let mut p = step_network(1);
    p.train(&builtin::nand(), WeightInit::Zero).unwrap();
    assert!(matches!(
        p.process(&[0, 0]),
        Err(PerceptronError::IndexBounds { inputs: 2, weights: 3, .. })
    ));
}

// =============================================================================
// Custom activations
// =============================================================================

/// Fires on any positive sum.
#[derive(Debug)]
struct Positive;

impl Activation for Positive {
    fn apply(&self, sum: f32) -> u32 {
        u32::from(sum > 0.0)
    }
}

#[test]
fn test_injected_activation() {
    let mut p = Perceptron::new(1, 1, Positive, 0.5, 1);
    let samples = builtin::and();
    p.train(&samples, WeightInit::Zero).unwrap();
    assert_eq!(classify_all(&mut p, &samples), vec![0, 0, 0, 1]);
}
