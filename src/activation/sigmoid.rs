use std::f64::consts::E;

/// Logistic sigmoid, `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed in terms of its output `u`.
///
/// Callers pass an already-activated value; `u * (1 - u)` is evaluated as is,
/// whatever range `u` falls in.
pub fn sigmoid_derivative(u: f64) -> f64 {
    u * (1.0 - u)
}
