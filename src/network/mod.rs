pub mod network;
pub mod spec;

pub use network::{NeuralNetwork, DEFAULT_LEARNING_RATE};
pub use spec::{NetworkSpec, LayerSpec};
