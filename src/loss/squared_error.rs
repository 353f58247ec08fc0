/// The loss the backward pass descends: per output unit `(p - e)²`, summed
/// (not averaged) over the output layer.
pub struct SquaredError;

impl SquaredError {
    /// Scalar loss: Σ (predicted - expected)²
    pub fn loss(predicted: &[f32], expected: &[f32]) -> f32 {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, e)| (p - e) * (p - e))
            .sum()
    }

    /// Per-output error seed: predicted - expected
    pub fn derivative(predicted: &[f32], expected: &[f32]) -> Vec<f32> {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, e)| p - e)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_summed_squares() {
        let loss = SquaredError::loss(&[1.0, 0.0], &[0.0, 0.0]);
        assert!((loss - 1.0).abs() < 1e-6);

        let loss = SquaredError::loss(&[0.5, 0.5], &[0.0, 1.0]);
        assert!((loss - 0.5).abs() < 1e-6);
    }

    #[test]
    fn derivative_is_signed_difference() {
        let d = SquaredError::derivative(&[0.8, 0.2], &[1.0, 0.0]);
        assert_eq!(d.len(), 2);
        assert!((d[0] + 0.2).abs() < 1e-6);
        assert!((d[1] - 0.2).abs() < 1e-6);
    }
}
