use crate::ops::Op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `0` for negative inputs, the input otherwise.
///
/// Only strictly negative inputs are clamped, so `NaN` passes through unchanged.
/// The derivative is `1` when the output is strictly positive and `0` otherwise,
/// which makes the gradient at exactly zero `0`.
pub fn relu_op(a: impl Into<Operand>) -> Value {
    a.into().into_value().relu()
}

impl Value {
    /// See [`relu_op`].
    pub fn relu(&self) -> Value {
        let x = self.data();
        let data = if x < 0.0 { 0.0 } else { x };
        Value::from_op(data, Op::Relu, vec![self.clone()])
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
