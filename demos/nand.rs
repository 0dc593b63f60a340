use std::sync::mpsc;

use ferrite_perceptron::data::builtin;
use ferrite_perceptron::{ActivationFunction, Perceptron, TraceRecord, WeightInit};

fn main() {
    let (tx, rx) = mpsc::channel();
    let mut network = Perceptron::new(1, 1, ActivationFunction::Step { threshold: 0.5 }, 0.1, 1)
        .with_sink(tx);
    network.set_tracing(true);

    let samples = builtin::nand();
    let report = network
        .train(&samples, WeightInit::Zero)
        .expect("NAND is linearly separable");

    for record in rx.try_iter() {
        if let TraceRecord::Update { correction, weights, .. } = record {
            if correction != 0.0 {
                println!("correction {correction:+.1} -> weights {weights:.2?}");
            }
        }
    }
    println!("Converged after {} iterations", report.iterations);

    for sample in &samples {
        let mut input = vec![network.bias()];
        input.extend_from_slice(sample.inputs());
        let output = network.process(&input).expect("trained network");
        println!("Input: {:?} -> Output: {}", sample.inputs(), output);
    }
}
