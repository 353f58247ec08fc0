use crate::error::Result;
use crate::loss::squared_error::SquaredError;
use crate::network::network::Network;

/// Drives the write-inputs / evaluate / backpropagate cycle for labeled
/// samples and reports the squared error each sample saw at presentation
/// time.
///
/// The learning rate is explicit; the historical update rule corresponds to
/// a rate of 1, which is what [`Trainer::default`] uses.
#[derive(Debug, Clone, Copy)]
pub struct Trainer {
    pub learning_rate: f32,
}

impl Trainer {
    pub fn new(learning_rate: f32) -> Trainer {
        Trainer { learning_rate }
    }

    /// Runs one online step on a single `(input, expected)` pair and
    /// returns the sample's squared error *before* the update.
    ///
    /// Either the whole step runs or, on a size mismatch, nothing is
    /// written at all.
    pub fn train_sample(&self, network: &mut Network, input: &[f32], expected: &[f32]) -> Result<f32> {
        network.set_inputs(input)?;
        network.evaluate()?;
        let loss = SquaredError::loss(&network.output_values(), expected);
        network.backpropagate_with_rate(expected, self.learning_rate)?;
        Ok(loss)
    }

    /// Runs [`train_sample`](Trainer::train_sample) over every pair in
    /// order and returns the mean loss. An empty set reports a loss of 0.
    pub fn train_set(&self, network: &mut Network, samples: &[(Vec<f32>, Vec<f32>)]) -> Result<f32> {
        if samples.is_empty() {
            return Ok(0.0);
        }
        let mut total_loss = 0.0;
        for (input, expected) in samples {
            total_loss += self.train_sample(network, input, expected)?;
        }
        Ok(total_loss / samples.len() as f32)
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Trainer { learning_rate: 1.0 }
    }
}
