//! Trains a network on XOR and prints its predictions.
//!
//!   feedforward-nn [spec.json]
//!
//! Without an argument the built-in 2-2-1 XOR architecture is used. Log level
//! is read from `FEEDFORWARD_LOG` (default `info`).
use anyhow::{bail, Context};
use feedforward_nn::{train_loop, NetworkSpec, NeuralNetwork, TrainConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

const EPOCHS: usize = 10_000;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("FEEDFORWARD_LOG", "info"))
        .init();

    let spec = match std::env::args().nth(1) {
        Some(path) => NetworkSpec::load_json(&path)
            .with_context(|| format!("failed to load network spec from {path}"))?,
        None => NetworkSpec::xor(),
    };
    if spec.input_size != 2 || spec.layers.last().map(|l| l.nodes) != Some(1) {
        bail!("the XOR demo needs 2 inputs and a single output node");
    }

    let mut rng = match spec.seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    };
    let mut network = NeuralNetwork::from_spec(&spec, &mut rng)?;
    log::info!("training {:?} for {} epochs", spec.name, EPOCHS);

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected_outputs = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let config = TrainConfig { shuffle: true, ..TrainConfig::new(EPOCHS) };
    let loss = train_loop(&mut network, &inputs, &expected_outputs, &config, &mut rng)?;
    println!("final loss: {loss:.6}");

    for input in &inputs {
        println!("{:?} -> {:.4}", input, network.predict(input)?[0]);
    }

    Ok(())
}
