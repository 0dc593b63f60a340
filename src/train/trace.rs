use serde::{Deserialize, Serialize};
use std::sync::mpsc;

use crate::layers::unit::UnitId;

/// One observation emitted by a unit while a traced training run is cycling.
///
/// A traced unit emits a `Step` followed by an `Update` for every sample it is
/// presented, so a sink sees records in the exact order the loop produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceRecord {
    /// Forward pass result, taken before the weights move.
    Step {
        unit: UnitId,
        /// Presented input vector; index 0 carries the bias value.
        inputs: Vec<u32>,
        expected: u32,
        weights: Vec<f32>,
        output: u32,
    },
    /// Delta-rule correction and the weights it produced.
    Update {
        unit: UnitId,
        correction: f32,
        weights: Vec<f32>,
    },
}

impl TraceRecord {
    pub fn unit(&self) -> UnitId {
        match self {
            TraceRecord::Step { unit, .. } | TraceRecord::Update { unit, .. } => *unit,
        }
    }
}

/// Receives trace records from a training run.
///
/// Sinks are pure observers: nothing they do can alter or stop training.
pub trait TraceSink: Send {
    fn record(&mut self, record: TraceRecord);
}

/// Discards every record. Used until a caller installs a real sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _record: TraceRecord) {}
}

/// Forwards records to a receiver, typically living on another thread.
///
/// A dropped receiver is ignored; the run keeps going.
impl TraceSink for mpsc::Sender<TraceRecord> {
    fn record(&mut self, record: TraceRecord) {
        let _ = self.send(record);
    }
}
