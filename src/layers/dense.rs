use rand::Rng;

use crate::error::Result;
use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};

/// Initial weights and biases are drawn uniformly from this range.
pub const INIT_RANGE: (f64, f64) = (-1.0, 1.0);

/// A fully-connected layer. Built by the owning network, which sizes and
/// randomizes `weights` (`nodes x input_size`) and `bias` (`nodes x 1`).
#[derive(Debug, Clone)]
pub struct Layer{
    pub nodes: usize,
    pub weights: Matrix,
    pub bias: Matrix,
    pub activator: ActivationFunction,
    /// Activated output of the most recent forward pass (`nodes x 1`).
    pub output: Matrix,
}

impl Layer {
    pub(crate) fn new<R: Rng + ?Sized>(
        nodes: usize,
        input_size: usize,
        activator: ActivationFunction,
        rng: &mut R,
    ) -> Result<Layer> {
        let (min, max) = INIT_RANGE;
        let mut weights = Matrix::new(nodes, input_size)?;
        let mut bias = Matrix::new(nodes, 1)?;
        weights.randomize(rng, min, max)?;
        bias.randomize(rng, min, max)?;

        Ok(Layer {
            nodes,
            weights,
            bias,
            activator,
            output: Matrix::zeros(nodes, 1),
        })
    }

    /// `activate(weights * input + bias)`; the result is kept in `output`.
    pub fn feed_from(&mut self, input: &Matrix) -> Result<&Matrix> {
        let mut z = self.weights.matmul_or_elementwise(input)?;
        z.add(&self.bias)?;
        z.map(|x| self.activator.function(x));
        self.output = z;
        Ok(&self.output)
    }

    /// Per-node update signal: `derivative(output) ⊙ error * lr`.
    pub fn gradient(&self, error: &Matrix, learning_rate: f64) -> Result<Matrix> {
        let mut gradient = self.output.mapped(|y| self.activator.derivative(y));
        gradient.multiply_elementwise(error)?;
        gradient.multiply_scalar(learning_rate);
        Ok(gradient)
    }

    /// Adds `gradient * inputs^T` to the weights and `gradient` to the bias.
    pub fn apply_gradient(&mut self, gradient: &Matrix, inputs: &Matrix) -> Result<()> {
        let weight_delta = gradient.matmul_or_elementwise(&inputs.transpose())?;
        self.weights.add(&weight_delta)?;
        self.bias.add(gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn layer(weights: Vec<Vec<f64>>, bias: Vec<f64>) -> Layer {
        let nodes = bias.len();
        Layer {
            nodes,
            weights: Matrix::from_data(weights).unwrap(),
            bias: Matrix::from_sequence(&bias, 1).unwrap(),
            activator: ActivationFunction::Sigmoid,
            output: Matrix::zeros(nodes, 1),
        }
    }

    #[test]
    fn new_layer_has_expected_shapes_and_range() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let l = Layer::new(3, 5, ActivationFunction::Sigmoid, &mut rng).unwrap();
        assert_eq!(l.weights.shape(), (3, 5));
        assert_eq!(l.bias.shape(), (3, 1));
        assert_eq!(l.output.shape(), (3, 1));
        let (min, max) = INIT_RANGE;
        assert!(l.weights.to_sequence().iter().chain(l.bias.to_sequence().iter())
            .all(|&v| (min..max).contains(&v)));
    }

    #[test]
    fn feed_from_stores_activated_output() {
        let mut l = layer(vec![vec![1.0, -1.0], vec![0.5, 0.5]], vec![0.0, -1.0]);
        let input = Matrix::from_sequence(&[2.0, 2.0], 1).unwrap();
        let out = l.feed_from(&input).unwrap().to_sequence();

        assert_abs_diff_eq!(out[0], 0.5);
        assert_abs_diff_eq!(out[1], 1.0 / (1.0 + (-1.0f64).exp()), epsilon = 1e-12);
        assert_eq!(l.output.to_sequence(), out);
    }

    #[test]
    fn apply_gradient_updates_weights_and_bias() {
        let mut l = layer(vec![vec![0.0, 0.0]], vec![0.0]);
        let input = Matrix::from_sequence(&[1.0, 3.0], 1).unwrap();
        l.feed_from(&input).unwrap();

        let error = Matrix::from_sequence(&[1.0], 1).unwrap();
        let gradient = l.gradient(&error, 0.5).unwrap();
        // output 0.5 -> derivative 0.25 -> 0.25 * 1.0 * 0.5
        assert_abs_diff_eq!(gradient.data[0][0], 0.125);

        l.apply_gradient(&gradient, &input).unwrap();
        assert_abs_diff_eq!(l.weights.data[0][0], 0.125);
        assert_abs_diff_eq!(l.weights.data[0][1], 0.375);
        assert_abs_diff_eq!(l.bias.data[0][0], 0.125);
    }
}
