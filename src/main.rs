// Thin driver around the library: trains the two-sample demo network and
// prints the classification of a held-out vector.
//   cargo run                        # built-in 4-2-1 configuration
//   cargo run -- path/to/config.json # NetworkConfig loaded from JSON
use backprop_nn::{Network, NetworkConfig, Topology};

fn main() -> backprop_nn::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => NetworkConfig::load_json(&path)?,
        None => NetworkConfig {
            target_mse: 0.008,
            ..NetworkConfig::new(Topology::new(4, 2, 1))
        },
    };

    let inputs = vec![vec![0.9; config.topology.inputs], vec![0.1; config.topology.inputs]];
    let classes = vec![0.9, 0.1];

    let mut network = Network::from_config(&config, inputs, classes)?;
    let stats = network.train()?;
    tracing::info!(iterations = stats.iterations, final_error = stats.final_error, "trained");

    let test_input = vec![0.2; config.topology.inputs];
    println!("{}", network.classify(&test_input)?);
    Ok(())
}
