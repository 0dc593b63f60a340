pub mod weight_init;

pub use weight_init::{seeded_rng, WeightInit};
