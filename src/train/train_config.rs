use crate::init::WeightInit;

/// Per-run training options.
///
/// # Fields
/// - `weight_init`:    how every unit's weights start out
/// - `max_iterations`: optional cap on sample applications. `None` keeps the
///                      loop unbounded, which may never return on data that is not
///                      linearly separable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainConfig {
    pub weight_init: WeightInit,
    pub max_iterations: Option<usize>,
}

impl TrainConfig {
    /// An uncapped run with the given initialization.
    pub fn new(weight_init: WeightInit) -> Self {
        TrainConfig { weight_init, max_iterations: None }
    }

    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }
}
