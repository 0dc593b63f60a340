use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::activation::Activation;
use crate::error::{PerceptronError, Result};
use crate::init::WeightInit;
use crate::train::trace::{TraceRecord, TraceSink};

/// Position of a unit inside its network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId {
    pub layer: usize,
    pub index: usize,
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.layer, self.index)
    }
}

/// A single linear-threshold element.
///
/// Input slot 0 carries the bias; slots `1..` carry the sample features. The
/// unit is only ever mutated through `&mut` by the network that owns it, so
/// at most one mutation is in flight at any time.
#[derive(Debug)]
pub struct Unit {
    id: UnitId,
    inputs: Vec<u32>,
    weights: Vec<f32>,
    activation: Arc<dyn Activation>,
    learning_rate: f32,
    last_correction: f32,
    last_output: u32,
    expected_output: u32,
    tracing: bool,
}

impl Unit {
    pub fn new(id: UnitId, activation: Arc<dyn Activation>, learning_rate: f32) -> Unit {
        Unit {
            id,
            inputs: Vec::new(),
            weights: Vec::new(),
            activation,
            learning_rate,
            last_correction: 0.0,
            last_output: 0,
            expected_output: 0,
            tracing: false,
        }
    }

    /// Zeroes an input vector of `len` slots. Weights are left untouched.
    pub fn resize_inputs(&mut self, len: usize) {
        self.inputs = vec![0; len];
    }

    /// Replaces the whole weight vector with one sized to the current inputs.
    pub fn initialize_weights(&mut self, strategy: WeightInit, rng: &mut dyn RngCore) {
        self.weights = strategy.weights(self.inputs.len(), rng);
    }

    /// Replaces the input vector. A length that differs from the weights is
    /// only reported once the unit computes.
    pub fn set_inputs(&mut self, inputs: &[u32]) {
        self.inputs.clear();
        self.inputs.extend_from_slice(inputs);
    }

    /// Loads the input vector and target for the next step.
    pub fn present(&mut self, inputs: &[u32], expected: u32) {
        self.set_inputs(inputs);
        self.expected_output = expected;
    }

    pub fn set_tracing(&mut self, enabled: bool) {
        self.tracing = enabled;
    }

    fn check_shape(&self) -> Result<()> {
        if self.inputs.len() != self.weights.len() {
            return Err(PerceptronError::IndexBounds {
                unit: self.id,
                inputs: self.inputs.len(),
                weights: self.weights.len(),
            });
        }
        Ok(())
    }

    /// Weighted sum of the inputs, passed through the activation.
    ///
    /// Accumulates left to right in `f32`.
    pub fn compute_output(&self) -> Result<u32> {
        self.check_shape()?;
        let mut sum = 0.0f32;
        for (x, w) in self.inputs.iter().zip(&self.weights) {
            sum += *x as f32 * w;
        }
        Ok(self.activation.apply(sum))
    }

    /// Forward pass over the presented sample.
    pub fn train_one_step(&mut self, sink: &mut dyn TraceSink) -> Result<()> {
        self.last_output = self.compute_output()?;

        if self.tracing {
            sink.record(TraceRecord::Step {
                unit: self.id,
                inputs: self.inputs.clone(),
                expected: self.expected_output,
                weights: self.weights.clone(),
                output: self.last_output,
            });
        }
        Ok(())
    }

    /// `expected - produced`. Negative when the unit fired but should not have.
    pub fn error(&self) -> i64 {
        i64::from(self.expected_output) - i64::from(self.last_output)
    }

    pub fn correction(&self) -> f32 {
        self.learning_rate * self.error() as f32
    }

    /// Delta rule: `w[i] += correction * x[i]`.
    pub fn update_weights(&mut self, sink: &mut dyn TraceSink) -> Result<()> {
        self.check_shape()?;
        self.last_correction = self.correction();

        let correction = self.last_correction;
        for (w, x) in self.weights.iter_mut().zip(&self.inputs) {
            *w += correction * *x as f32;
        }

        if self.tracing {
            sink.record(TraceRecord::Update {
                unit: self.id,
                correction,
                weights: self.weights.clone(),
            });
        }
        Ok(())
    }

    /// True when the last update left the weights where they were.
    pub fn is_stable(&self) -> bool {
        self.last_correction == 0.0
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn inputs(&self) -> &[u32] {
        &self.inputs
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn last_output(&self) -> u32 {
        self.last_output
    }

    pub fn last_correction(&self) -> f32 {
        self.last_correction
    }

    pub fn expected_output(&self) -> u32 {
        self.expected_output
    }
}
