use serde::{Deserialize, Serialize};

/// Where a network stands with respect to its latest training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainState {
    /// No run has been started yet.
    Idle,
    /// Per-unit buffers are being sized and weights initialized.
    Initializing,
    /// Samples are being applied until the weights settle.
    Cycling,
    /// The last run reached a stable weight vector.
    Converged,
    /// The last run was aborted by an error.
    Failed,
}

/// Summary of a converged run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Sample applications performed, including the final stable streak.
    pub iterations: usize,
    /// Applications after which at least one unit corrected its weights.
    pub corrections: usize,
    /// Features per sample (the bias slot is not counted).
    pub feature_count: usize,
}
