use feedforward_nn::{train_epoch, LayerSpec, NeuralNetwork};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn main() -> feedforward_nn::Result<()> {
    let mut rng = ChaCha12Rng::seed_from_u64(2);
    let mut network = NeuralNetwork::new(
        2,
        vec![LayerSpec::new(2, "sigmoid"), LayerSpec::new(1, "sigmoid")],
        0.1,
        &mut rng,
    )?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected_outputs = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    let epochs = 10000;

    for epoch in 0..epochs {
        let loss = train_epoch(&mut network, &inputs, &expected_outputs)?;
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }

    Ok(())
}
