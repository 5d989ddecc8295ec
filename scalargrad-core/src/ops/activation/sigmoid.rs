use crate::ops::Op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Applies the logistic function `1 / (1 + e^(-x))`.
///
/// Backward: `out * (1 - out)` times the output's gradient.
pub fn sigmoid_op(a: impl Into<Operand>) -> Value {
    a.into().into_value().sigmoid()
}

impl Value {
    /// See [`sigmoid_op`].
    pub fn sigmoid(&self) -> Value {
        let data = 1.0 / (1.0 + (-self.data()).exp());
        Value::from_op(data, Op::Sigmoid, vec![self.clone()])
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
