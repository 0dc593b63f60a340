use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

use crate::activation::Activation;
use crate::error::{PerceptronError, Result};
use crate::init::{seeded_rng, WeightInit};
use crate::layers::{Layer, Unit};
use crate::network::sample::Sample;
use crate::network::spec::PerceptronSpec;
use crate::train::{NullSink, TraceSink, TrainConfig, TrainReport, TrainState};

/// A perceptron network of linear-threshold units.
///
/// Every unit of every layer sees the same (bias-prefixed) sample and is
/// trained independently with the delta rule. Inference only consults the
/// first unit of the first layer; extra layers and units are trained but
/// otherwise inert.
pub struct Perceptron {
    layers: Vec<Layer>,
    bias: u32,
    tracing: bool,
    sink: Box<dyn TraceSink>,
    rng: ChaCha8Rng,
    state: TrainState,
}

impl fmt::Debug for Perceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Perceptron")
            .field("layers", &self.layers)
            .field("bias", &self.bias)
            .field("tracing", &self.tracing)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Perceptron {
    /// Builds `layer_count` layers of `units_per_layer` units that share one
    /// activation and learning rate. `bias` is prepended to every sample.
    pub fn new(
        layer_count: usize,
        units_per_layer: usize,
        activation: impl Activation + 'static,
        learning_rate: f32,
        bias: u32,
    ) -> Perceptron {
        let activation: Arc<dyn Activation> = Arc::new(activation);
        let layers = (0..layer_count)
            .map(|index| Layer::new(index, units_per_layer, activation.clone(), learning_rate))
            .collect();

        if layer_count > 1 || units_per_layer > 1 {
            warn!(
                layer_count,
                units_per_layer,
                "only the first unit of the first layer is used for inference"
            );
        }

        Perceptron {
            layers,
            bias,
            tracing: false,
            sink: Box::new(NullSink),
            rng: seeded_rng(None),
            state: TrainState::Idle,
        }
    }

    /// Builds a network from a configuration file's contents.
    pub fn from_spec(spec: &PerceptronSpec) -> Perceptron {
        let mut network = Perceptron::new(
            spec.layers,
            spec.units_per_layer,
            spec.activation.clone(),
            spec.learning_rate,
            spec.bias,
        );
        network.rng = seeded_rng(spec.seed);
        network.tracing = spec.trace;
        network
    }

    /// Makes `WeightInit::Random` reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = seeded_rng(Some(seed));
        self
    }

    /// Installs the observer that receives trace records.
    pub fn with_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Turns per-unit trace records on or off for the next run.
    pub fn set_tracing(&mut self, enabled: bool) {
        self.tracing = enabled;
    }

    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    pub fn bias(&self) -> u32 {
        self.bias
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn state(&self) -> TrainState {
        self.state
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.layers.iter().flat_map(|layer| layer.units())
    }

    pub fn unit_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Trains until the weights are stable, with no iteration cap.
    pub fn train(&mut self, samples: &[Sample], weight_init: WeightInit) -> Result<TrainReport> {
        self.train_with(samples, &TrainConfig::new(weight_init))
    }

    /// Cycles through `samples` until every unit has gone more than
    /// `samples.len()` consecutive applications without a correction.
    ///
    /// All samples must have as many features as the first one; a mismatch
    /// aborts the run with `IndexBounds`.
    pub fn train_with(&mut self, samples: &[Sample], config: &TrainConfig) -> Result<TrainReport> {
        let first = samples.first().ok_or(PerceptronError::EmptyDataset)?;
        let feature_count = first.feature_count();
        if feature_count == 0 {
            return Err(PerceptronError::EmptyFeatureVector);
        }
        let n = samples.len();

        self.state = TrainState::Initializing;
        info!(
            samples = n,
            features = feature_count,
            units = self.unit_count(),
            weight_init = ?config.weight_init,
            "training started"
        );

        for layer in &mut self.layers {
            for unit in layer.units_mut() {
                // slot 0 is the bias, slots 1..=m the features
                unit.resize_inputs(feature_count + 1);
                unit.initialize_weights(config.weight_init, &mut self.rng);
                unit.set_tracing(self.tracing);
            }
        }

        self.state = TrainState::Cycling;

        let mut stable_streak = 0;
        let mut corrections = 0;
        let mut iteration = 0;
        let mut inputs = Vec::with_capacity(feature_count + 1);

        loop {
            if let Some(limit) = config.max_iterations {
                if iteration >= limit {
                    self.state = TrainState::Failed;
                    warn!(limit, corrections, "training stopped before the weights settled");
                    return Err(PerceptronError::IterationLimit { limit });
                }
            }

            let sample = &samples[iteration % n];
            iteration += 1;

            inputs.clear();
            inputs.push(self.bias);
            inputs.extend_from_slice(sample.inputs());

            if let Err(err) = self.apply(&inputs, sample.expected()) {
                self.state = TrainState::Failed;
                return Err(err);
            }

            if self.is_stable() {
                stable_streak += 1;
                if stable_streak > n {
                    break;
                }
            } else {
                if stable_streak > 0 {
                    debug!(iteration, stable_streak, "stable streak broken");
                }
                corrections += 1;
                stable_streak = 0;
            }
            trace!(iteration, stable_streak, "sample applied");
        }

        self.state = TrainState::Converged;
        info!(iterations = iteration, corrections, "training converged");

        Ok(TrainReport {
            iterations: iteration,
            corrections,
            feature_count,
        })
    }

    /// Presents one sample to every unit, layer by layer.
    fn apply(&mut self, inputs: &[u32], expected: u32) -> Result<()> {
        let sink: &mut dyn TraceSink = self.sink.as_mut();
        for layer in &mut self.layers {
            for unit in layer.units_mut() {
                unit.present(inputs, expected);
                unit.train_one_step(&mut *sink)?;
                unit.update_weights(&mut *sink)?;
            }
        }
        Ok(())
    }

    /// True when no unit corrected its weights on the last application.
    fn is_stable(&self) -> bool {
        self.units().all(Unit::is_stable)
    }

    /// Classifies `input` with the first unit of the first layer.
    ///
    /// The input is used as given: the bias is not prepended, so callers pass
    /// the bias value in slot 0 themselves.
    pub fn process(&mut self, input: &[u32]) -> Result<u32> {
        let unit = self
            .layers
            .iter_mut()
            .flat_map(|layer| layer.units_mut())
            .next()
            .ok_or(PerceptronError::Processing)?;

        unit.set_inputs(input);
        unit.compute_output()
    }
}
