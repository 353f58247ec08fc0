use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::fast_sigmoid::fast_sigmoid_prime;
use crate::error::{NetworkError, Result};
use crate::loss::squared_error::SquaredError;
use crate::network::layer::Layer;

/// Default half-width of the uniform weight initialization interval.
pub const DEFAULT_WEIGHT_RANGE: f32 = 1.0;
/// Default bias half-width, scaled at init time by the previous layer's size.
pub const DEFAULT_BIAS_RANGE: f32 = 0.5;

/// A minimal feedforward network: an ordered, append-only sequence of
/// fully-connected [`Layer`]s, the first of which is always the input layer.
///
/// The intended cycle is: write inputs with [`set_inputs`](Network::set_inputs),
/// run [`evaluate`](Network::evaluate), optionally run
/// [`backpropagate`](Network::backpropagate) against a target vector, then
/// read the results back through the accessors (or a
/// [`snapshot`](Network::snapshot) for rendering). All operations run to
/// completion on the calling thread; a single owner drives the network at a
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Creates a network consisting of just an input layer of `input_size`
    /// nodes (no incoming weights).
    pub fn new(input_size: usize) -> Network {
        Network {
            layers: vec![Layer::input(input_size)],
        }
    }

    /// Appends `count` dense layers of `size` nodes each. The first new
    /// layer's weight vectors are sized against the current last layer;
    /// subsequent ones against `size`.
    ///
    /// `size == 0` is a supported degenerate case: the layer is appended
    /// and simply blocks any signal from flowing past it.
    pub fn append_layers(&mut self, size: usize, count: usize) {
        let mut prev_layer_size = self.last_layer().len();
        for _ in 0..count {
            self.layers.push(Layer::dense(size, prev_layer_size));
            prev_layer_size = size;
        }
    }

    /// Appends a single dense layer of `size` nodes.
    pub fn append_layer(&mut self, size: usize) {
        self.append_layers(size, 1);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_layer(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn output_layer(&self) -> &Layer {
        self.last_layer()
    }

    /// Width of the input layer.
    pub fn input_size(&self) -> usize {
        self.layers[0].len()
    }

    /// Width of the last layer.
    pub fn output_size(&self) -> usize {
        self.last_layer().len()
    }

    /// Writes one input value, by node index, into the input layer.
    pub fn set_input(&mut self, index: usize, value: f32) -> Result<()> {
        let width = self.input_size();
        if index >= width {
            return Err(NetworkError::SizeMismatch {
                expected: width,
                found: index + 1,
            });
        }
        self.layers[0].nodes_mut()[index].raw_value = value;
        Ok(())
    }

    /// Writes the full input vector. `values.len()` must equal the input
    /// layer's width.
    pub fn set_inputs(&mut self, values: &[f32]) -> Result<()> {
        let width = self.input_size();
        if values.len() != width {
            return Err(NetworkError::SizeMismatch {
                expected: width,
                found: values.len(),
            });
        }
        for (node, &value) in self.layers[0].nodes_mut().iter_mut().zip(values) {
            node.raw_value = value;
        }
        Ok(())
    }

    /// Activations of the output layer, in node order.
    pub fn output_values(&self) -> Vec<f32> {
        self.last_layer().nodes().iter().map(|n| n.value()).collect()
    }

    /// Randomly sets every weight and bias of every non-input layer, using
    /// a fresh [`StdRng`] seeded with `seed` so results are reproducible.
    ///
    /// Weights are drawn uniformly from `[-weight_range, weight_range]`;
    /// each bias from `[-bias_range * p, bias_range * p]` where `p` is the
    /// previous layer's node count. A negative range flips the interval's
    /// endpoints but still yields well-formed samples.
    pub fn randomize(&mut self, weight_range: f32, bias_range: f32, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.randomize_with(weight_range, bias_range, &mut rng);
    }

    /// [`randomize`](Network::randomize) with a caller-owned generator, for
    /// callers that thread one RNG through a whole application.
    pub fn randomize_with<R: Rng>(&mut self, weight_range: f32, bias_range: f32, rng: &mut R) {
        let mut prev_layer_size = self.layers[0].len();
        for layer in self.layers.iter_mut().skip(1) {
            let bias_span = bias_range * prev_layer_size as f32;
            for node in layer.nodes_mut() {
                for weight in &mut node.weights {
                    *weight = uniform(rng, -weight_range, weight_range);
                }
                node.bias = uniform(rng, -bias_span, bias_span);
            }
            prev_layer_size = layer.len();
        }
    }

    /// Runs one forward pass: evaluates every layer after the input layer,
    /// strictly in order, each from the freshly updated layer before it.
    ///
    /// The caller must have written the desired input values first. On a
    /// network with only its input layer this is a no-op.
    pub fn evaluate(&mut self) -> Result<()> {
        for layer_i in 1..self.layers.len() {
            let (previous, rest) = self.layers.split_at_mut(layer_i);
            rest[0].evaluate(&previous[layer_i - 1])?;
        }
        Ok(())
    }

    /// One online gradient-descent step against `expected`, with the
    /// historical fixed learning rate of 1.
    ///
    /// Requires that [`evaluate`](Network::evaluate) just ran for the
    /// current inputs; gradients are taken from the raw values it left
    /// behind, which this call does not modify.
    pub fn backpropagate(&mut self, expected: &[f32]) -> Result<()> {
        self.backpropagate_with_rate(expected, 1.0)
    }

    /// [`backpropagate`](Network::backpropagate) with an explicit learning
    /// rate.
    ///
    /// Per output node the loss is the squared error `(value - expected)^2`.
    /// The backward sweep walks from the output layer down to, but not
    /// including, the input layer; input-layer parameters are never touched.
    pub fn backpropagate_with_rate(&mut self, expected: &[f32], learning_rate: f32) -> Result<()> {
        if self.layers.len() < 2 {
            return Err(NetworkError::InvalidTopology);
        }
        let output_width = self.last_layer().len();
        if expected.len() != output_width {
            return Err(NetworkError::SizeMismatch {
                expected: output_width,
                found: expected.len(),
            });
        }

        // dC/da at the output, up to the factor of 2 folded in below.
        let mut delta = SquaredError::derivative(&self.output_values(), expected);

        for layer_i in (1..self.layers.len()).rev() {
            let (head, tail) = self.layers.split_at_mut(layer_i);
            let previous = &head[layer_i - 1];
            let layer = &mut tail[0];

            let mut delta_prev = vec![0.0_f32; previous.len()];

            for (node_i, node) in layer.nodes_mut().iter_mut().enumerate() {
                // dC/dz = s'(z) * 2 * (a - y)
                let grad_z = fast_sigmoid_prime(node.raw_value) * 2.0 * delta[node_i];

                for (weight, prev_node) in node.weights.iter_mut().zip(previous.nodes()) {
                    *weight -=
                        prev_node.effective_value(previous.is_input()) * grad_z * learning_rate;
                }
                node.bias -= grad_z * learning_rate;

                // Seeds the previous layer's error with the weight as
                // updated just above, not the forward-pass value. Textbook
                // backpropagation reads the pre-update weight here; this
                // ordering is kept for behavioral fidelity (see DESIGN.md,
                // "post-update error propagation").
                for (acc, weight) in delta_prev.iter_mut().zip(&node.weights) {
                    *acc += *weight * grad_z;
                }
            }

            delta = delta_prev;
        }

        Ok(())
    }

    fn last_layer(&self) -> &Layer {
        // A network always holds at least its input layer.
        &self.layers[self.layers.len() - 1]
    }
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}
