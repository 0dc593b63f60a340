pub mod builtin;
pub mod csv;

pub use csv::{load_samples, parse_samples};
