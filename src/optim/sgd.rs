use crate::{network::network::Network, train::backprop::ErrorTerms};

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one online weight update from pre-computed error terms.
    ///
    /// Hidden activations and input units must still hold the state of the
    /// forward pass the terms were computed from. The output loop indexes
    /// `hidden_to_output` by output unit, so with one output every hidden
    /// activation accumulates into the first weight.
    pub fn step(&self, network: &mut Network, terms: &ErrorTerms) {
        let rate = self.learning_rate;

        for (i, err_out) in terms.output.iter().enumerate() {
            for hidden in &network.hidden_units {
                network.hidden_to_output[i] += rate * err_out * hidden.activation();
            }
        }

        for (i, err_hidden) in terms.hidden.iter().enumerate() {
            for (j, input) in network.input_units.iter().enumerate() {
                network.input_to_hidden.data[j][i] += rate * err_hidden * input.input;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> Network {
        Network::with_seed(2, 3, 1, vec![vec![1.0, 0.5]], vec![1.0], 4).unwrap()
    }

    #[test]
    fn zero_terms_leave_weights_alone() {
        let mut net = network();
        let before = (net.input_to_hidden().clone(), net.hidden_to_output().to_vec());
        let terms = ErrorTerms { output: vec![0.0], hidden: vec![0.0; 3] };
        Sgd::new(0.3).step(&mut net, &terms);
        assert_eq!(net.input_to_hidden(), &before.0);
        assert_eq!(net.hidden_to_output(), before.1.as_slice());
    }

    #[test]
    fn output_update_accumulates_into_first_weight() {
        let mut net = network();
        let before = net.hidden_to_output().to_vec();
        let activation_sum: f64 = net.hidden_units().iter().map(|u| u.activation()).sum();
        let terms = ErrorTerms { output: vec![0.1], hidden: vec![0.0; 3] };
        Sgd::new(0.5).step(&mut net, &terms);

        let after = net.hidden_to_output();
        assert!((after[0] - (before[0] + 0.5 * 0.1 * activation_sum)).abs() < 1e-12);
        assert_eq!(&after[1..], &before[1..]);
    }

    #[test]
    fn hidden_update_scales_with_input_units() {
        let mut net = network();
        net.set_inputs(&[1.0, 0.0]).unwrap();
        let before = net.input_to_hidden().clone();
        let terms = ErrorTerms { output: vec![0.0], hidden: vec![0.2, 0.0, -0.2] };
        Sgd::new(0.5).step(&mut net, &terms);

        let after = net.input_to_hidden();
        assert!((after.get(0, 0) - (before.get(0, 0) + 0.1)).abs() < 1e-12);
        assert_eq!(after.get(0, 1), before.get(0, 1));
        assert!((after.get(0, 2) - (before.get(0, 2) - 0.1)).abs() < 1e-12);
        // Second input unit holds zero, so its row is untouched.
        assert_eq!(after.data[1], before.data[1]);
    }
}
