pub mod layer;
pub mod unit;

pub use layer::Layer;
pub use unit::{Unit, UnitId};
