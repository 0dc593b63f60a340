use serde::{Deserialize, Serialize};
use std::fmt;

/// Maps the weighted input sum of a unit to its (unsigned) output class.
///
/// Units hold the activation behind an `Arc`, so implementations must be
/// shareable across every unit of a network.
pub trait Activation: fmt::Debug + Send + Sync {
    fn apply(&self, sum: f32) -> u32;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivationFunction {
    /// `1` when the sum is strictly above `threshold`, `0` otherwise.
    Step { threshold: f32 },
    /// Logistic squashing followed by a cut at `threshold` (in `(0, 1)`).
    Sigmoid { threshold: f32 },
    /// The sum itself, truncated towards zero. Negative sums map to `0`.
    Identity,
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::Step { threshold: 0.5 }
    }
}

impl Activation for ActivationFunction {
    fn apply(&self, sum: f32) -> u32 {
        match self {
            ActivationFunction::Step { threshold } => {
                if sum - threshold > 0.0 { 1 } else { 0 }
            }
            ActivationFunction::Sigmoid { threshold } => {
                let squashed = 1.0 / (1.0 + (-sum).exp());
                if squashed > *threshold { 1 } else { 0 }
            }
            // `as` saturates: negatives and NaN become 0.
            ActivationFunction::Identity => sum as u32,
        }
    }
}
