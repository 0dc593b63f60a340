pub mod activation;
pub mod data;
pub mod error;
pub mod init;
pub mod layers;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::{Activation, ActivationFunction};
pub use error::{PerceptronError, Result};
pub use init::WeightInit;
pub use layers::{Layer, Unit, UnitId};
pub use network::{Perceptron, PerceptronSpec, Sample};
pub use train::{NullSink, TraceRecord, TraceSink, TrainConfig, TrainReport, TrainState};
