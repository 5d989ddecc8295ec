use crate::ops::arithmetic::mul::mul_op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Divides `a` by `b`, built as `a * b^-1`.
///
/// A zero-valued divisor yields an infinite (or `NaN`) result. No check is made.
pub fn div_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let reciprocal = b.into().into_value().powf(-1.0);
    mul_op(a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
