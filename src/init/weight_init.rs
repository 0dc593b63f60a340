use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// How a unit's weight vector is filled when a training run starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightInit {
    /// Every weight starts at `0.0`. Training is then fully deterministic.
    #[default]
    Zero,
    /// Every weight is drawn uniformly from `[0, 1)`.
    Random,
}

impl WeightInit {
    /// Allocates a fresh weight vector of length `len`.
    ///
    /// The generator is only consulted by `Random`.
    pub fn weights(&self, len: usize, rng: &mut dyn RngCore) -> Vec<f32> {
        match self {
            WeightInit::Zero => vec![0.0; len],
            WeightInit::Random => (0..len).map(|_| rng.gen::<f32>()).collect(),
        }
    }
}

/// Builds the generator backing `WeightInit::Random`.
///
/// A fixed seed makes random initialization reproducible; without one the
/// generator is seeded from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
