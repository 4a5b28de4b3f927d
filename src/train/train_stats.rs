use serde::{Serialize, Deserialize};

/// Summary of a completed `train_loop` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainStats {
    /// Number of back-propagation steps performed.
    pub iterations: usize,
    /// Index of the sample whose error ended training.
    pub last_sample: usize,
    /// Half squared error of `last_sample` after its update.
    pub final_error: f64,
    /// Threshold the run was trained against.
    pub target_mse: f64,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
}
