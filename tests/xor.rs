use feedforward_nn::{train_epoch, LayerSpec, NeuralNetwork};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn xor_data() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    (inputs, targets)
}

#[test]
fn xor_converges() {
    // Seed 2 starts outside the XOR local minimum for this architecture.
    let mut rng = ChaCha12Rng::seed_from_u64(2);
    let mut network = NeuralNetwork::new(
        2,
        vec![LayerSpec::new(2, "sigmoid"), LayerSpec::new(1, "sigmoid")],
        0.1,
        &mut rng,
    )
    .unwrap();

    let (inputs, targets) = xor_data();
    for _ in 0..10_000 {
        train_epoch(&mut network, &inputs, &targets).unwrap();
    }

    for (input, target) in inputs.iter().zip(targets.iter()) {
        let out = network.predict(input).unwrap();
        assert!(
            (out[0] - target[0]).abs() < 0.1,
            "{input:?} -> {} (expected {})",
            out[0],
            target[0]
        );
    }
}

#[test]
fn same_seed_gives_same_network() {
    let build = || {
        let mut rng = ChaCha12Rng::seed_from_u64(17);
        NeuralNetwork::new(3, vec![LayerSpec::new(4, "sigmoid"), LayerSpec::new(2, "relu")], 0.1, &mut rng)
            .unwrap()
    };
    let (mut a, mut b) = (build(), build());
    assert_eq!(a.predict(&[0.1, 0.2, 0.3]).unwrap(), b.predict(&[0.1, 0.2, 0.3]).unwrap());
}
