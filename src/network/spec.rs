use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;

fn default_activation() -> String {
    "sigmoid".to_string()
}

/// Describes one layer before the network sizes and initializes it.
///
/// Fields:
/// - `nodes`      — number of neurons in this layer
/// - `activation` — activation name; see [`ActivationFunction::from_name`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub nodes: usize,
    #[serde(default = "default_activation")]
    pub activation: String,
}

impl LayerSpec {
    pub fn new(nodes: usize, activation: &str) -> LayerSpec {
        LayerSpec { nodes, activation: activation.to_string() }
    }

    pub fn activation_function(&self) -> ActivationFunction {
        ActivationFunction::from_name(&self.activation)
    }
}

/// Architecture and hyperparameters of a network, loadable from JSON.
///
/// Only the shape of the network is stored here; trained weights are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name, used in logs.
    #[serde(default)]
    pub name: String,
    pub input_size: usize,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    /// Falls back to [`crate::network::network::DEFAULT_LEARNING_RATE`].
    #[serde(default)]
    pub learning_rate: Option<f64>,
    /// Seed for deterministic weight initialization.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkSpec {
    /// 2 inputs, 2 hidden sigmoid nodes, 1 sigmoid output.
    pub fn xor() -> NetworkSpec {
        NetworkSpec {
            name: "xor".to_string(),
            input_size: 2,
            layers: vec![LayerSpec::new(2, "sigmoid"), LayerSpec::new(1, "sigmoid")],
            learning_rate: Some(0.1),
            seed: None,
        }
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
