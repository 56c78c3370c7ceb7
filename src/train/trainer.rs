use crate::{
    error::{Error, Result},
    loss::mse::MseLoss,
    network::network::NeuralNetwork,
};

/// One pass over the dataset, one gradient-descent step per sample, in the
/// order given by `order`.
///
/// Returns the mean squared error of the predictions each step was taken
/// from.
pub(crate) fn train_in_order(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    order: &[usize],
) -> Result<f64> {
    let mut total_loss = 0.0;

    for &idx in order {
        let expected = &expected_outputs[idx];
        let output = network.train_sample(&inputs[idx], expected)?;
        total_loss += MseLoss::loss(&output, expected);
    }

    Ok(total_loss / order.len() as f64)
}

/// Trains on every `(input, expected)` pair once, in dataset order, and
/// returns the mean loss. An empty dataset has a loss of `0.0`.
pub fn train_epoch(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
) -> Result<f64> {
    check_lengths(inputs, expected_outputs)?;
    if inputs.is_empty() {
        return Ok(0.0);
    }
    let order: Vec<usize> = (0..inputs.len()).collect();
    train_in_order(network, inputs, expected_outputs, &order)
}

pub(crate) fn check_lengths(inputs: &[Vec<f64>], expected_outputs: &[Vec<f64>]) -> Result<()> {
    if inputs.len() != expected_outputs.len() {
        return Err(Error::LengthMismatch {
            inputs: inputs.len(),
            targets: expected_outputs.len(),
        });
    }
    Ok(())
}
