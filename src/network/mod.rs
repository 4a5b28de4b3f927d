pub mod config;
pub mod network;
pub mod unit;

pub use config::{NetworkConfig, Topology};
pub use network::Network;
pub use unit::Unit;
