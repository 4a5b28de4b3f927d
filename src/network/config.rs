use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

pub const DEFAULT_LEARNING_RATE: f64 = 0.3;
pub const DEFAULT_TARGET_MSE: f64 = 0.1;

/// Unit counts of the three layers.
///
/// Fields:
/// - `inputs`  — length of every feature vector
/// - `hidden`  — number of hidden units
/// - `outputs` — number of output units; the weight update only models one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub inputs: usize,
    pub hidden: usize,
    pub outputs: usize,
}

impl Topology {
    pub fn new(inputs: usize, hidden: usize, outputs: usize) -> Topology {
        Topology { inputs, hidden, outputs }
    }

    pub fn validate(&self) -> Result<()> {
        if self.inputs == 0 || self.hidden == 0 || self.outputs == 0 {
            return Err(NetworkError::Configuration(format!(
                "every layer needs at least one unit, got {}-{}-{}",
                self.inputs, self.hidden, self.outputs
            )));
        }
        if self.outputs > self.hidden {
            return Err(NetworkError::Configuration(format!(
                "{} output units exceed the {} hidden-to-output weights",
                self.outputs, self.hidden
            )));
        }
        Ok(())
    }
}

/// Everything needed to build and train a network apart from the data.
///
/// Missing fields fall back to the defaults when loaded from JSON, so a file
/// holding only `{"topology": {...}}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub topology: Topology,
    /// Step size of every weight update.
    pub learning_rate: f64,
    /// Training stops once a single-sample error falls below this.
    pub target_mse: f64,
    /// Optional cap on training iterations; `None` trains until convergence.
    pub max_iterations: Option<usize>,
    /// Seed for weight initialization and sample selection; `None` uses entropy.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            topology: Topology::new(1, 1, 1),
            learning_rate: DEFAULT_LEARNING_RATE,
            target_mse: DEFAULT_TARGET_MSE,
            max_iterations: None,
            seed: None,
        }
    }
}

impl NetworkConfig {
    pub fn new(topology: Topology) -> Self {
        NetworkConfig { topology, ..Default::default() }
    }

    pub fn validate(&self) -> Result<()> {
        self.topology.validate()?;
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::Configuration(format!(
                "learning rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if !(self.target_mse.is_finite() && self.target_mse > 0.0) {
            return Err(NetworkError::Configuration(format!(
                "target MSE must be a positive finite number, got {}",
                self.target_mse
            )));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_hyperparameters() {
        let config = NetworkConfig::new(Topology::new(4, 2, 1));
        assert_eq!(config.learning_rate, 0.3);
        assert_eq!(config.target_mse, 0.1);
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_sized_layer_is_rejected() {
        let err = Topology::new(4, 0, 1).validate().unwrap_err();
        assert!(matches!(err, NetworkError::Configuration(_)));
    }

    #[test]
    fn outputs_beyond_hidden_are_rejected() {
        assert!(Topology::new(2, 1, 2).validate().is_err());
        assert!(Topology::new(2, 2, 2).validate().is_ok());
    }

    #[test]
    fn non_positive_learning_rate_is_rejected() {
        let mut config = NetworkConfig::new(Topology::new(2, 2, 1));
        config.learning_rate = 0.0;
        assert!(config.validate().is_err());
        config.learning_rate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let json = r#"{"topology": {"inputs": 4, "hidden": 2, "outputs": 1}, "target_mse": 0.008}"#;
        let config: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.topology, Topology::new(4, 2, 1));
        assert_eq!(config.target_mse, 0.008);
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
    }
}
