pub mod activation;
pub mod error;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::fast_sigmoid::{fast_sigmoid, fast_sigmoid_prime};
pub use error::{NetworkError, Result};
pub use loss::squared_error::SquaredError;
pub use network::layer::Layer;
pub use network::network::Network;
pub use network::node::Node;
pub use network::snapshot::{LayerSnapshot, NetworkSnapshot, NodeSnapshot};
pub use train::trainer::Trainer;
