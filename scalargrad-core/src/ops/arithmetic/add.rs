use crate::ops::Op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Adds two operands, promoting plain numbers to leaves first.
///
/// Backward: both operands receive the output's gradient unchanged.
pub fn add_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let a = a.into().into_value();
    let b = b.into().into_value();
    let data = a.data() + b.data();
    Value::from_op(data, Op::Add, vec![a, b])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
