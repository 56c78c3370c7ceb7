use rand::Rng;

use crate::error::{Error, Result};
use crate::network::spec::{LayerSpec, NetworkSpec};
use crate::{layers::dense::Layer, math::matrix::Matrix};

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// A stack of fully-connected layers trained one sample at a time with plain
/// gradient descent.
///
/// `predict` and `train` overwrite each layer's stored output, so both take
/// `&mut self`. Clone the network to use it from several workers.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    input_size: usize,
    layers: Vec<Layer>,
    learning_rate: f64,
}

impl NeuralNetwork {
    /// Sizes every layer against its predecessor (or `input_size` for the
    /// first one) and randomizes weights and biases from `rng`.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        layer_specs: Vec<LayerSpec>,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<NeuralNetwork> {
        if layer_specs.is_empty() {
            return Err(Error::NoLayers);
        }

        let mut layers: Vec<Layer> = Vec::with_capacity(layer_specs.len());
        for spec in &layer_specs {
            let fan_in = layers.last().map_or(input_size, |prev| prev.nodes);
            layers.push(Layer::new(spec.nodes, fan_in, spec.activation_function(), rng)?);
        }

        log::debug!(
            "built network {} -> {:?} (learning rate {})",
            input_size,
            layers.iter().map(|l| l.nodes).collect::<Vec<_>>(),
            learning_rate
        );

        Ok(NeuralNetwork { input_size, layers, learning_rate })
    }

    /// Builds a network from a loaded spec, using the default learning rate
    /// when the spec has none.
    pub fn from_spec<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<NeuralNetwork> {
        NeuralNetwork::new(
            spec.input_size,
            spec.layers.clone(),
            spec.learning_rate.unwrap_or(DEFAULT_LEARNING_RATE),
            rng,
        )
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    /// Forward pass. Returns the output layer's activations.
    ///
    /// `input` must hold exactly `input_size` values.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        let inputs = self.input_column(input)?;
        Ok(self.forward(&inputs)?.to_sequence())
    }

    /// One gradient-descent step on a single sample.
    ///
    /// Input and target lengths are checked before any weight changes, so a
    /// rejected sample leaves the network as it was.
    pub fn train(&mut self, input: &[f64], targets: &[f64]) -> Result<()> {
        self.train_sample(input, targets).map(|_| ())
    }

    /// Like [`NeuralNetwork::train`], but also returns the predictions the
    /// step was computed from (before the weights changed).
    pub fn train_sample(&mut self, input: &[f64], targets: &[f64]) -> Result<Vec<f64>> {
        let inputs = self.input_column(input)?;
        let outputs = self.forward(&inputs)?.clone();
        let targets = Matrix::from_sequence(targets, 1)?;

        let mut error = targets.subtracted(&outputs)?;

        for i in (0..self.layers.len()).rev() {
            let (before, rest) = self.layers.split_at_mut(i);
            let layer = &mut rest[0];
            let prev = before.last().map_or(&inputs, |l| &l.output);

            let gradient = layer.gradient(&error, self.learning_rate)?;

            // Error for layer i-1 must come from the weights that produced
            // this prediction, so take the transpose before updating.
            let weights_t = layer.weights.transpose();
            layer.apply_gradient(&gradient, prev)?;

            if i > 0 {
                error = weights_t.matmul_or_elementwise(&error)?;
            }
        }

        log::trace!("trained on {:?} -> {:?}", input, targets.to_sequence());
        Ok(outputs.to_sequence())
    }

    fn input_column(&self, input: &[f64]) -> Result<Matrix> {
        if input.len() != self.input_size {
            return Err(Error::InputMismatch { expected: self.input_size, actual: input.len() });
        }
        Matrix::from_sequence(input, 1)
    }

    fn forward<'a>(&'a mut self, inputs: &'a Matrix) -> Result<&'a Matrix> {
        let mut current = inputs;
        for layer in &mut self.layers {
            current = layer.feed_from(current)?;
        }
        Ok(current)
    }
}
