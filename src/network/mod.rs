pub mod perceptron;
pub mod sample;
pub mod spec;

pub use perceptron::Perceptron;
pub use sample::Sample;
pub use spec::PerceptronSpec;
