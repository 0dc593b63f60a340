use std::sync::Arc;

use crate::activation::Activation;
use crate::layers::unit::{Unit, UnitId};

/// An ordered group of independent units.
///
/// Units share nothing but the activation; iteration order is insertion order.
#[derive(Debug)]
pub struct Layer {
    units: Vec<Unit>,
}

impl Layer {
    pub fn new(index: usize, size: usize, activation: Arc<dyn Activation>, learning_rate: f32) -> Layer {
        let units = (0..size)
            .map(|i| Unit::new(UnitId { layer: index, index: i }, activation.clone(), learning_rate))
            .collect();
        Layer { units }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
