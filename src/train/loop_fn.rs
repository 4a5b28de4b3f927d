use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::backprop::backprop_error;
use crate::train::train_stats::TrainStats;

/// Iterations between progress events.
const PROGRESS_INTERVAL: usize = 10_000;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` by online back-propagation until the error of the most
/// recently trained sample falls below `network.target_mse()`.
///
/// Each iteration draws one sample uniformly at random, runs a single
/// back-propagation step on it and re-measures that sample's half squared
/// error with the updated weights. Only that one error decides convergence.
///
/// # Termination
/// With no iteration cap the loop runs until convergence, so an unreachable
/// target never returns. A NaN error never counts as converged.
///
/// # Errors
/// `NetworkError::NonConvergence` once `network.max_iterations()` steps have
/// run without converging.
pub fn train_loop(network: &mut Network) -> Result<TrainStats> {
    let t_start = Instant::now();
    let target_mse = network.target_mse;
    let samples = network.training_set.len();

    let mut current_error = f64::INFINITY;
    let mut iterations = 0usize;
    let mut last_sample = 0usize;

    while !(current_error < target_mse) {
        if let Some(cap) = network.max_iterations {
            if iterations >= cap {
                warn!(iterations, current_error, target_mse, "iteration cap reached before convergence");
                return Err(NetworkError::NonConvergence {
                    iterations,
                    last_error: current_error,
                });
            }
        }

        let n = network.rng.gen_range(0..samples);
        backprop_error(network, n);
        current_error = network.sample_error_at(n);

        iterations += 1;
        last_sample = n;

        if iterations % PROGRESS_INTERVAL == 0 {
            debug!(iterations, current_error, "training progress");
        }
    }

    let elapsed_ms = t_start.elapsed().as_millis() as u64;
    info!(iterations, final_error = current_error, elapsed_ms, "training converged");

    Ok(TrainStats {
        iterations,
        last_sample,
        final_error: current_error,
        target_mse,
        elapsed_ms,
    })
}
