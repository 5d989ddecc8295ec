use crate::ops::Op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Applies the hyperbolic tangent, computed as `(e^(2x) - 1) / (e^(2x) + 1)`.
///
/// The formula is evaluated as written. For `x` above roughly 355, `e^(2x)`
/// overflows and the result is `NaN` rather than `1`.
///
/// Backward: `1 - out^2` times the output's gradient.
pub fn tanh_op(a: impl Into<Operand>) -> Value {
    a.into().into_value().tanh()
}

impl Value {
    /// See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        let e2x = (2.0 * self.data()).exp();
        let data = (e2x - 1.0) / (e2x + 1.0);
        Value::from_op(data, Op::Tanh, vec![self.clone()])
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
