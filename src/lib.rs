pub mod math;
pub mod activation;
pub mod error;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use error::{NetworkError, Result};
pub use network::config::{NetworkConfig, Topology};
pub use network::network::Network;
pub use network::unit::Unit;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::train_stats::TrainStats;
pub use train::loop_fn::train_loop;
