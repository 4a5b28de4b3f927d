use crate::{
    activation::sigmoid::sigmoid_derivative,
    network::network::Network,
    optim::sgd::Sgd,
};

/// Error terms of one back-propagation step.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTerms {
    /// One term per output unit.
    pub output: Vec<f64>,
    /// One term per hidden unit.
    pub hidden: Vec<f64>,
}

/// Runs one online back-propagation step on training sample `n`, updating
/// both weight containers in place.
///
/// The sample is loaded into the input units first so the input-to-hidden
/// update sees the components of the sample being trained on.
///
/// # Panics
/// Panics if `n` is not a valid training sample index.
pub fn backprop_error(network: &mut Network, n: usize) {
    network.load_sample(n);
    let output = network.forward_sample(n);
    let terms = compute_error_terms(network, network.expected_labels[n], output);
    Sgd::new(network.learning_rate).step(network, &terms);
}

/// Output then hidden error terms for a raw output `output` against `expected`.
///
/// The sigmoid derivative is taken of the raw linear output as is. Hidden
/// units must still hold the forward pass that produced `output`.
pub fn compute_error_terms(network: &Network, expected: f64, output: f64) -> ErrorTerms {
    let output_terms: Vec<f64> = network
        .output_units()
        .iter()
        .map(|_| (expected - output) * sigmoid_derivative(output))
        .collect();

    let hidden_terms = network
        .hidden_units()
        .iter()
        .zip(network.hidden_to_output())
        .map(|(hidden, &weight)| {
            let propagated: f64 = output_terms.iter().map(|err| err * weight).sum();
            propagated * sigmoid_derivative(hidden.activation())
        })
        .collect();

    ErrorTerms { output: output_terms, hidden: hidden_terms }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_sample(seed: u64) -> Network {
        Network::with_seed(4, 2, 1, vec![vec![0.9; 4]], vec![0.9], seed).unwrap()
    }

    #[test]
    fn error_terms_follow_raw_output() {
        let mut network = single_sample(1);
        let output = network.forward_sample(0);
        let terms = compute_error_terms(&network, 0.9, output);

        let expected_out = (0.9 - output) * sigmoid_derivative(output);
        assert_eq!(terms.output, vec![expected_out]);
        for (j, term) in terms.hidden.iter().enumerate() {
            let a = network.hidden_units()[j].activation();
            let expected = expected_out * network.hidden_to_output()[j] * a * (1.0 - a);
            assert!((term - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn exact_prediction_gives_zero_terms() {
        let mut network = single_sample(2);
        let output = network.forward_sample(0);
        let terms = compute_error_terms(&network, output, output);
        assert!(terms.output.iter().all(|&t| t == 0.0));
        assert!(terms.hidden.iter().all(|&t| t == 0.0));
    }

    #[test]
    fn step_moves_output_toward_label() {
        let mut network = single_sample(3);
        let before = network.sample_error(0).unwrap();
        backprop_error(&mut network, 0);
        let after = network.sample_error(0).unwrap();
        assert!(after < before, "error grew from {before} to {after}");
    }

    #[test]
    fn step_updates_input_to_hidden_weights() {
        let mut network = single_sample(4);
        let before = network.input_to_hidden().clone();
        backprop_error(&mut network, 0);
        assert_ne!(network.input_to_hidden(), &before);
        let inputs: Vec<f64> = network.input_units().iter().map(|u| u.input).collect();
        assert_eq!(inputs, vec![0.9; 4]);
    }
}
