use serde::{Deserialize, Serialize};

/// A labeled training example: feature vector plus the expected output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    inputs: Vec<u32>,
    expected: u32,
}

impl Sample {
    pub fn new(inputs: Vec<u32>, expected: u32) -> Sample {
        Sample { inputs, expected }
    }

    pub fn inputs(&self) -> &[u32] {
        &self.inputs
    }

    pub fn expected(&self) -> u32 {
        self.expected
    }

    pub fn feature_count(&self) -> usize {
        self.inputs.len()
    }
}
