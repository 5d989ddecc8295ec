use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Subtracts `b` from `a`, built as `a + (-b)`.
pub fn sub_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
