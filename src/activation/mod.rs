pub mod fast_sigmoid;

pub use fast_sigmoid::{fast_sigmoid, fast_sigmoid_prime};
