use crate::ops::Op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Computes `e^a`.
///
/// Backward: the output value itself times the output's gradient.
pub fn exp_op(a: impl Into<Operand>) -> Value {
    a.into().into_value().exp()
}

impl Value {
    /// See [`exp_op`].
    pub fn exp(&self) -> Value {
        let data = self.data().exp();
        Value::from_op(data, Op::Exp, vec![self.clone()])
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
