use thiserror::Error;

use crate::layers::unit::UnitId;

/// Every fallible operation in the crate returns this error.
///
/// None of the variants is recoverable from inside the library: the operation
/// that produced it is aborted and the error is handed back to the caller.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// `train` was called with zero samples.
    #[error("not enough training samples: the dataset is empty")]
    EmptyDataset,

    /// The first training sample has no features.
    #[error("not enough training data: the first sample has no features")]
    EmptyFeatureVector,

    /// A unit's input and weight vectors disagree in length.
    #[error("index out of bounds in unit {unit}: {inputs} inputs for {weights} weights")]
    IndexBounds {
        unit: UnitId,
        inputs: usize,
        weights: usize,
    },

    /// `process` was called on a network that has no units.
    #[error("could not process input: the network has no units")]
    Processing,

    /// A capped training run did not converge in time.
    #[error("training did not converge within {limit} iterations")]
    IterationLimit { limit: usize },

    /// A dataset file could not be turned into samples.
    #[error("dataset row {row}: {message}")]
    Dataset { row: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
