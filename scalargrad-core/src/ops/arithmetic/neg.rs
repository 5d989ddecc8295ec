use crate::ops::arithmetic::mul::mul_op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Negates an operand.
///
/// Built as `a * -1`, so it records a `Mul` node over a `-1` leaf and inherits
/// the multiplication rule.
pub fn neg_op(a: impl Into<Operand>) -> Value {
    mul_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
