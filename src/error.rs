//! Error types for network construction, training and classification.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Error, Debug)]
pub enum NetworkError {
    /// Topology, training set or labels are inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Feature vector length does not match the input layer.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    Dimension {
        expected: usize,
        actual: usize,
    },

    /// Training sample index outside the training set.
    #[error("Sample index {index} out of range for training set of {len}")]
    SampleIndex {
        index: usize,
        len: usize,
    },

    /// The iteration cap was reached before the error dropped below target.
    #[error("Training did not converge after {iterations} iterations (last error {last_error})")]
    NonConvergence {
        iterations: usize,
        last_error: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
