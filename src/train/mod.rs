pub mod backprop;
pub mod train_stats;
pub mod loop_fn;

pub use backprop::{backprop_error, ErrorTerms};
pub use train_stats::TrainStats;
pub use loop_fn::train_loop;
