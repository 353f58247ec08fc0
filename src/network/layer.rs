use crate::error::{NetworkError, Result};
use crate::network::node::Node;

/// An ordered collection of [`Node`]s. Node order is semantically
/// significant: it defines the index-aligned correspondence with the weight
/// vectors of the next layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    nodes: Vec<Node>,
    is_input: bool,
}

impl Layer {
    /// Builds the network's input layer: `size` nodes with no incoming
    /// weights. Input values are written straight into each node's raw
    /// value and bypass activation.
    pub(crate) fn input(size: usize) -> Layer {
        Layer {
            nodes: (0..size).map(|_| Node::new(0)).collect(),
            is_input: true,
        }
    }

    /// Builds a hidden or output layer whose every node carries one weight
    /// per node of the previous layer. Weight vectors are never resized
    /// after this point.
    pub(crate) fn dense(size: usize, prev_layer_size: usize) -> Layer {
        Layer {
            nodes: (0..size).map(|_| Node::new(prev_layer_size)).collect(),
            is_input: false,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True only for the network's first layer.
    pub fn is_input(&self) -> bool {
        self.is_input
    }

    /// One forward step: recomputes every node's raw value from the
    /// previous layer's effective values.
    ///
    /// The shape check runs before any node is touched, so a mismatched
    /// call leaves the layer unchanged. Never called with the input layer
    /// as the receiver.
    pub fn evaluate(&mut self, previous: &Layer) -> Result<()> {
        for node in &self.nodes {
            if node.weights.len() != previous.len() {
                return Err(NetworkError::SizeMismatch {
                    expected: previous.len(),
                    found: node.weights.len(),
                });
            }
        }

        // reset
        for node in &mut self.nodes {
            node.raw_value = 0.0;
        }

        // apply weights: summation of node weights times previous values
        for (prev_i, prev_node) in previous.nodes.iter().enumerate() {
            let prev_value = prev_node.effective_value(previous.is_input);
            for node in &mut self.nodes {
                node.raw_value += node.weights[prev_i] * prev_value;
            }
        }

        // apply bias
        for node in &mut self.nodes {
            node.raw_value += node.bias;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::fast_sigmoid::fast_sigmoid;

    #[test]
    fn dense_layer_sizes_weights_against_previous_layer() {
        let layer = Layer::dense(3, 2);
        assert_eq!(layer.len(), 3);
        for node in layer.nodes() {
            assert_eq!(node.weights().len(), 2);
        }
    }

    #[test]
    fn evaluate_sums_weighted_inputs_plus_bias() {
        let mut input = Layer::input(2);
        input.nodes_mut()[0].raw_value = 1.0;
        input.nodes_mut()[1].raw_value = -2.0;

        let mut layer = Layer::dense(1, 2);
        layer.nodes_mut()[0].weights = vec![0.5, 0.25];
        layer.nodes_mut()[0].bias = 0.1;

        layer.evaluate(&input).unwrap();

        // Input layer values feed in raw, not activated.
        let expected = 0.5 * 1.0 + 0.25 * (-2.0) + 0.1;
        assert!((layer.nodes()[0].raw_value() - expected).abs() < 1e-6);
    }

    #[test]
    fn evaluate_activates_non_input_previous_layer() {
        let mut hidden = Layer::dense(1, 0);
        hidden.nodes_mut()[0].raw_value = 2.0;

        let mut out = Layer::dense(1, 1);
        out.nodes_mut()[0].weights = vec![1.0];
        out.nodes_mut()[0].bias = 0.0;

        out.evaluate(&hidden).unwrap();
        assert!((out.nodes()[0].raw_value() - fast_sigmoid(2.0)).abs() < 1e-6);
    }

    #[test]
    fn evaluate_rejects_shape_mismatch_without_mutation() {
        let input = Layer::input(3);
        let mut layer = Layer::dense(2, 2);
        layer.nodes_mut()[0].raw_value = 7.0;

        let err = layer.evaluate(&input).unwrap_err();
        assert_eq!(err, NetworkError::SizeMismatch { expected: 3, found: 2 });
        // Stale raw values survive a rejected call.
        assert_eq!(layer.nodes()[0].raw_value(), 7.0);
    }
}
