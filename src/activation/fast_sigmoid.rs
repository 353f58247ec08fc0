//! The network's single nonlinearity: a fast rational S-curve.
//!
//! This is *not* the standard logistic function. It trades the exponential
//! for an absolute value, which makes it cheap to evaluate every tick and
//! keeps both the function and its derivative finite for every finite input
//! (`1 + |x| >= 1`, so no division by zero).

/// Maps any finite `x` into the open interval `(0, 1)`.
///
/// `fast_sigmoid(0) == 0.5`, and the function is strictly increasing.
#[inline]
pub fn fast_sigmoid(x: f32) -> f32 {
    x / (2.0 * (1.0 + x.abs())) + 0.5
}

/// Derivative of [`fast_sigmoid`], expressed in terms of the *input* `x`
/// (not the activated output). Always strictly positive.
#[inline]
pub fn fast_sigmoid_prime(x: f32) -> f32 {
    let absp1 = x.abs() + 1.0;
    1.0 / (2.0 * absp1 * absp1)
}
