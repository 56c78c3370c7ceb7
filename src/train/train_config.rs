/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`    — total number of full passes over the training data
/// - `log_every` — log the epoch loss every this many epochs; `0` disables it
/// - `shuffle`   — visit samples in a fresh random order each epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub log_every: usize,
    pub shuffle: bool,
}

impl TrainConfig {
    /// Fixed sample order, progress logged every 1000 epochs.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            log_every: 1000,
            shuffle: false,
        }
    }
}
