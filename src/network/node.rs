use crate::activation::fast_sigmoid::fast_sigmoid;

/// The smallest unit of network state: one bias, one incoming weight per
/// node of the previous layer, and the pre-activation sum from the most
/// recent forward pass.
///
/// Input-layer nodes carry an empty weight vector and a meaningless bias;
/// their `raw_value` is written directly by the caller and used unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) weights: Vec<f32>,
    pub(crate) bias: f32,
    pub(crate) raw_value: f32,
}

impl Node {
    pub(crate) fn new(weight_count: usize) -> Node {
        Node {
            weights: vec![0.0; weight_count],
            bias: 0.0,
            raw_value: 0.0,
        }
    }

    /// Incoming weights, index-aligned with the previous layer's nodes.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Pre-activation sum from the last forward pass, or the externally
    /// supplied input for input-layer nodes.
    pub fn raw_value(&self) -> f32 {
        self.raw_value
    }

    /// Activation of the raw value.
    pub fn value(&self) -> f32 {
        fast_sigmoid(self.raw_value)
    }

    /// The value this node contributes to the next layer's weighted sum:
    /// the raw value itself when the owning layer is the input layer, the
    /// activation otherwise.
    pub fn effective_value(&self, is_input_layer: bool) -> f32 {
        if is_input_layer {
            self.raw_value
        } else {
            self.value()
        }
    }
}
