use crate::ops::Op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Multiplies two operands, promoting plain numbers to leaves first.
///
/// Backward: each operand receives the other operand's value times the
/// output's gradient.
pub fn mul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let a = a.into().into_value();
    let b = b.into().into_value();
    let data = a.data() * b.data();
    Value::from_op(data, Op::Mul, vec![a, b])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
