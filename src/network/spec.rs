use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::activation::ActivationFunction;
use crate::error::Result;
use crate::init::WeightInit;
use crate::train::TrainConfig;

/// A serializable description of a perceptron and how to train it.
///
/// Only the configuration is stored; trained weights never are. Every field
/// is optional in JSON and falls back to the single-unit NAND setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronSpec {
    /// Number of layers.
    pub layers: usize,
    /// Units in each layer.
    pub units_per_layer: usize,
    pub activation: ActivationFunction,
    pub learning_rate: f32,
    /// Constant prepended to every sample as input slot 0.
    pub bias: u32,
    pub weight_init: WeightInit,
    /// Seed for `WeightInit::Random`; drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Cap on sample applications; unbounded when absent.
    pub max_iterations: Option<usize>,
    /// Emit per-unit trace records while training.
    pub trace: bool,
}

impl Default for PerceptronSpec {
    fn default() -> Self {
        PerceptronSpec {
            layers: 1,
            units_per_layer: 1,
            activation: ActivationFunction::default(),
            learning_rate: 0.1,
            bias: 1,
            weight_init: WeightInit::Zero,
            seed: None,
            max_iterations: None,
            trace: false,
        }
    }
}

impl PerceptronSpec {
    /// The per-run options carried by this spec.
    pub fn train_config(&self) -> TrainConfig {
        TrainConfig {
            weight_init: self.weight_init,
            max_iterations: self.max_iterations,
        }
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Deserializes a `PerceptronSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<PerceptronSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let spec: PerceptronSpec =
            serde_json::from_str(r#"{"learning_rate": 0.25, "weight_init": "random", "seed": 3}"#)
                .unwrap();
        assert_eq!(spec.layers, 1);
        assert_eq!(spec.units_per_layer, 1);
        assert_eq!(spec.bias, 1);
        assert_eq!(spec.activation, ActivationFunction::Step { threshold: 0.5 });
        assert_eq!(spec.learning_rate, 0.25);
        assert_eq!(spec.weight_init, WeightInit::Random);
        assert_eq!(spec.seed, Some(3));
        assert!(!spec.trace);
    }

    #[test]
    fn train_config_mirrors_the_spec() {
        let spec = PerceptronSpec { max_iterations: Some(40), ..PerceptronSpec::default() };
        let config = spec.train_config();
        assert_eq!(config.weight_init, WeightInit::Zero);
        assert_eq!(config.max_iterations, Some(40));
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("perceptron-spec-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let spec = PerceptronSpec {
            units_per_layer: 2,
            activation: ActivationFunction::Sigmoid { threshold: 0.7 },
            trace: true,
            ..PerceptronSpec::default()
        };

        spec.save_json(path).unwrap();
        let loaded = PerceptronSpec::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, spec);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = PerceptronSpec::load_json("/nonexistent/perceptron.json").unwrap_err();
        assert!(matches!(err, crate::error::PerceptronError::Io(_)));
    }
}
