pub mod report;
pub mod trace;
pub mod train_config;

pub use report::{TrainReport, TrainState};
pub use trace::{NullSink, TraceRecord, TraceSink};
pub use train_config::TrainConfig;
