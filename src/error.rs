use std::fmt;

/// Errors produced when a caller violates a network contract.
///
/// Every fallible operation checks its inputs *before* mutating any weight,
/// bias, or node value, so a rejected call leaves the network exactly as it
/// was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// A vector length does not line up with the layer it is indexed
    /// against: an expected-output slice whose length differs from the
    /// output layer's width, an input slice whose length differs from the
    /// input layer's width, or a weight vector whose length differs from
    /// the previous layer's node count.
    SizeMismatch { expected: usize, found: usize },
    /// The operation needs at least one non-input layer (e.g. training a
    /// network that consists only of its input layer).
    InvalidTopology,
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::SizeMismatch { expected, found } => {
                write!(f, "size mismatch: expected {expected} elements, found {found}")
            }
            NetworkError::InvalidTopology => {
                write!(f, "network has no non-input layer to operate on")
            }
        }
    }
}

impl std::error::Error for NetworkError {}

pub type Result<T> = std::result::Result<T, NetworkError>;
