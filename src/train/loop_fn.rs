use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::network::network::NeuralNetwork;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{check_lengths, train_in_order};

/// Trains `network` for `config.epochs` epochs and returns the mean training
/// loss of the **last completed epoch** (`0.0` when no epoch ran or the
/// dataset is empty).
///
/// `rng` is only used when `config.shuffle` is set.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<f64> {
    check_lengths(inputs, expected_outputs)?;
    if inputs.is_empty() {
        return Ok(0.0);
    }

    let started = Instant::now();
    let mut order: Vec<usize> = (0..inputs.len()).collect();
    let mut last_loss = 0.0;

    for epoch in 1..=config.epochs {
        if config.shuffle {
            order.shuffle(rng);
        }

        last_loss = train_in_order(network, inputs, expected_outputs, &order)?;

        if config.log_every > 0 && epoch % config.log_every == 0 {
            log::info!(
                "epoch {}/{}: loss = {:.6} ({} ms)",
                epoch,
                config.epochs,
                last_loss,
                started.elapsed().as_millis()
            );
        }
    }

    Ok(last_loss)
}
