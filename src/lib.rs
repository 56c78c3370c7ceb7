pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::{NeuralNetwork, DEFAULT_LEARNING_RATE};
pub use network::spec::{LayerSpec, NetworkSpec};
pub use loss::mse::MseLoss;
pub use train::{train_epoch, train_loop, TrainConfig};
