use serde::Serialize;

use crate::network::network::Network;

/// Owned, read-only copy of one node's observable state.
///
/// `value` is the node's *effective* value: the raw input for input-layer
/// nodes, the activation otherwise. That is exactly what a renderer maps to
/// node color intensity.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub raw_value: f32,
    pub value: f32,
    pub bias: f32,
    pub weights: Vec<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayerSnapshot {
    pub is_input: bool,
    pub nodes: Vec<NodeSnapshot>,
}

/// A point-in-time copy of everything a visualization needs: per node the
/// raw value, effective value, bias, and incoming weights.
///
/// Snapshots are plain data with no ties back into node storage, so a
/// renderer can hold one for as long as it likes while the owner keeps
/// training the live network.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSnapshot {
    pub layers: Vec<LayerSnapshot>,
}

impl Network {
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            layers: self
                .layers()
                .iter()
                .map(|layer| LayerSnapshot {
                    is_input: layer.is_input(),
                    nodes: layer
                        .nodes()
                        .iter()
                        .map(|node| NodeSnapshot {
                            raw_value: node.raw_value(),
                            value: node.effective_value(layer.is_input()),
                            bias: node.bias(),
                            weights: node.weights().to_vec(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
