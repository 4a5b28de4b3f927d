use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::{
    activation::sigmoid::sigmoid,
    error::{NetworkError, Result},
    loss::mse::MseLoss,
    math::matrix::Matrix,
    network::config::{NetworkConfig, Topology, DEFAULT_LEARNING_RATE, DEFAULT_TARGET_MSE},
    network::unit::Unit,
    train::{loop_fn::train_loop, train_stats::TrainStats},
};

/// Initial weights are drawn uniformly from `[0, INITIAL_WEIGHT_BOUND)`.
pub const INITIAL_WEIGHT_BOUND: f64 = 0.5;

/// A 3-layer network with a single hidden layer and one modeled output.
///
/// The network owns its training data and the random generator used for both
/// weight initialization and sample selection, so a seeded network trains
/// identically every run.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    pub(crate) input_units: Vec<Unit>,
    pub(crate) hidden_units: Vec<Unit>,
    // Only the count matters; nothing reads these during training or inference.
    output_units: Vec<Unit>,
    pub(crate) input_to_hidden: Matrix,
    pub(crate) hidden_to_output: Vec<f64>,
    pub(crate) learning_rate: f64,
    pub(crate) target_mse: f64,
    pub(crate) max_iterations: Option<usize>,
    pub(crate) training_set: Vec<Vec<f64>>,
    pub(crate) expected_labels: Vec<f64>,
    pub(crate) rng: StdRng,
}

impl Network {
    /// Builds a network with default hyperparameters and entropy-seeded weights.
    ///
    /// # Errors
    /// `NetworkError::Configuration` if any layer is empty, the training set is
    /// empty, the label count differs from the sample count, or a training
    /// vector's length differs from `num_inputs`.
    pub fn new(
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        training_set: Vec<Vec<f64>>,
        expected_labels: Vec<f64>,
    ) -> Result<Network> {
        let topology = Topology::new(num_inputs, num_hidden, num_outputs);
        Network::build(topology, training_set, expected_labels, StdRng::from_entropy())
    }

    /// Same as [`Network::new`] but with a fixed seed for reproducible runs.
    pub fn with_seed(
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        training_set: Vec<Vec<f64>>,
        expected_labels: Vec<f64>,
        seed: u64,
    ) -> Result<Network> {
        let topology = Topology::new(num_inputs, num_hidden, num_outputs);
        Network::build(topology, training_set, expected_labels, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(
        config: &NetworkConfig,
        training_set: Vec<Vec<f64>>,
        expected_labels: Vec<f64>,
    ) -> Result<Network> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut network = Network::build(config.topology, training_set, expected_labels, rng)?;
        network.learning_rate = config.learning_rate;
        network.target_mse = config.target_mse;
        network.max_iterations = config.max_iterations;
        Ok(network)
    }

    fn build(
        topology: Topology,
        training_set: Vec<Vec<f64>>,
        expected_labels: Vec<f64>,
        mut rng: StdRng,
    ) -> Result<Network> {
        topology.validate()?;
        validate_training_data(&topology, &training_set, &expected_labels)?;

        let input_to_hidden = Matrix::random_uniform(
            topology.inputs,
            topology.hidden,
            INITIAL_WEIGHT_BOUND,
            &mut rng,
        );
        let hidden_to_output = (0..topology.hidden)
            .map(|_| rng.gen::<f64>() * INITIAL_WEIGHT_BOUND)
            .collect();

        debug!(
            inputs = topology.inputs,
            hidden = topology.hidden,
            outputs = topology.outputs,
            samples = training_set.len(),
            "network built"
        );

        Ok(Network {
            topology,
            input_units: vec![Unit::new(); topology.inputs],
            hidden_units: vec![Unit::new(); topology.hidden],
            output_units: vec![Unit::new(); topology.outputs],
            input_to_hidden,
            hidden_to_output,
            learning_rate: DEFAULT_LEARNING_RATE,
            target_mse: DEFAULT_TARGET_MSE,
            max_iterations: None,
            training_set,
            expected_labels,
            rng,
        })
    }

    /// Sets the convergence threshold used by the next call to [`Network::train`].
    pub fn set_target_mse(&mut self, target_mse: f64) {
        self.target_mse = target_mse;
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    /// Caps the number of training iterations; `None` trains until convergence.
    pub fn set_max_iterations(&mut self, max_iterations: Option<usize>) {
        self.max_iterations = max_iterations;
    }

    /// Copies a feature vector into the input units.
    pub fn set_inputs(&mut self, inputs: &[f64]) -> Result<()> {
        self.check_dimension(inputs)?;
        for (unit, &value) in self.input_units.iter_mut().zip(inputs) {
            unit.input = value;
        }
        Ok(())
    }

    /// Runs online back-propagation until a single-sample error drops below
    /// the target MSE.
    ///
    /// Without an iteration cap this blocks until convergence, which never
    /// happens for an unreachable target.
    ///
    /// # Errors
    /// `NetworkError::NonConvergence` when the iteration cap is reached first.
    pub fn train(&mut self) -> Result<TrainStats> {
        train_loop(self)
    }

    /// Classifies a feature vector, returning a value in (0, 1).
    ///
    /// Unlike the training-time forward pass, this reads from the input units
    /// and applies a final sigmoid to the output. Weights are never touched.
    pub fn classify(&mut self, feature_vector: &[f64]) -> Result<f64> {
        self.set_inputs(feature_vector)?;
        self.reset_units();

        for (i, input) in self.input_units.iter().enumerate() {
            for (j, hidden) in self.hidden_units.iter_mut().enumerate() {
                hidden.input += input.input * self.input_to_hidden.data[i][j];
            }
        }

        Ok(sigmoid(self.linear_output()))
    }

    /// Half squared error of training sample `n` under the current weights.
    pub fn sample_error(&mut self, n: usize) -> Result<f64> {
        if n >= self.training_set.len() {
            return Err(NetworkError::SampleIndex { index: n, len: self.training_set.len() });
        }
        Ok(self.sample_error_at(n))
    }

    pub(crate) fn sample_error_at(&mut self, n: usize) -> f64 {
        let output = self.forward_sample(n);
        MseLoss::loss(output, self.expected_labels[n])
    }

    /// Training-time forward pass over sample `n`.
    ///
    /// Reads the raw training vector rather than the input units and returns
    /// the linear output without a final sigmoid.
    pub(crate) fn forward_sample(&mut self, n: usize) -> f64 {
        self.reset_units();

        let sample = &self.training_set[n];
        for (i, x) in sample.iter().enumerate() {
            for (j, hidden) in self.hidden_units.iter_mut().enumerate() {
                hidden.input += x * self.input_to_hidden.data[i][j];
            }
        }

        self.linear_output()
    }

    /// Loads training sample `n` into the input units.
    pub(crate) fn load_sample(&mut self, n: usize) {
        for (unit, &value) in self.input_units.iter_mut().zip(&self.training_set[n]) {
            unit.input = value;
        }
    }

    fn reset_units(&mut self) {
        for unit in self.hidden_units.iter_mut().chain(self.output_units.iter_mut()) {
            unit.input = 0.0;
        }
    }

    fn linear_output(&self) -> f64 {
        self.hidden_units
            .iter()
            .zip(&self.hidden_to_output)
            .map(|(unit, weight)| unit.activation() * weight)
            .sum()
    }

    fn check_dimension(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.topology.inputs {
            return Err(NetworkError::Dimension {
                expected: self.topology.inputs,
                actual: inputs.len(),
            });
        }
        Ok(())
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn input_to_hidden(&self) -> &Matrix {
        &self.input_to_hidden
    }

    pub fn hidden_to_output(&self) -> &[f64] {
        &self.hidden_to_output
    }

    pub fn input_units(&self) -> &[Unit] {
        &self.input_units
    }

    pub fn hidden_units(&self) -> &[Unit] {
        &self.hidden_units
    }

    pub fn output_units(&self) -> &[Unit] {
        &self.output_units
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn target_mse(&self) -> f64 {
        self.target_mse
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn training_len(&self) -> usize {
        self.training_set.len()
    }

    /// True when no weight has become NaN or infinite.
    pub fn weights_are_finite(&self) -> bool {
        self.input_to_hidden.is_finite() && self.hidden_to_output.iter().all(|w| w.is_finite())
    }
}

fn validate_training_data(
    topology: &Topology,
    training_set: &[Vec<f64>],
    expected_labels: &[f64],
) -> Result<()> {
    if training_set.is_empty() {
        return Err(NetworkError::Configuration("training set is empty".to_string()));
    }
    if training_set.len() != expected_labels.len() {
        return Err(NetworkError::Configuration(format!(
            "{} training vectors but {} labels",
            training_set.len(),
            expected_labels.len()
        )));
    }
    if let Some((index, vector)) = training_set
        .iter()
        .enumerate()
        .find(|(_, v)| v.len() != topology.inputs)
    {
        return Err(NetworkError::Configuration(format!(
            "training vector {} has {} components, expected {}",
            index,
            vector.len(),
            topology.inputs
        )));
    }
    Ok(())
}
