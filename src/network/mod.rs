pub mod layer;
pub mod network;
pub mod node;
pub mod snapshot;

pub use layer::Layer;
pub use network::Network;
pub use node::Node;
pub use snapshot::{LayerSnapshot, NetworkSnapshot, NodeSnapshot};
