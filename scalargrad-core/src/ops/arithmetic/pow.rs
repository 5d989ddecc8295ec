use crate::error::ScalarGradError;
use crate::ops::Op;
use crate::value::{Operand, Value};

// --- Forward Operation ---

/// Raises `base` to a constant `exponent`.
///
/// The exponent must be a plain number. Passing a node fails with
/// [`ScalarGradError::InvalidOperand`] before any node is created, so the
/// graph and every existing node are left untouched.
///
/// Negative bases with non-integer exponents produce `NaN`, and zero bases with
/// negative exponents produce infinities, exactly as `f64::powf` does.
pub fn pow_op(
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<Value, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Scalar(k) => k,
        Operand::Node(node) => {
            return Err(ScalarGradError::InvalidOperand {
                operation: "pow".to_string(),
                reason: format!(
                    "exponent must be a constant number, got a graph node ({})",
                    node
                ),
            });
        }
    };
    Ok(base.into().into_value().powf(exponent))
}

// --- Value Methods ---

impl Value {
    /// Raises this node to the constant power `exponent`.
    ///
    /// Backward: `exponent * base^(exponent - 1)` times the output's gradient.
    pub fn powf(&self, exponent: f64) -> Value {
        let data = self.data().powf(exponent);
        Value::from_op(data, Op::Pow { exponent }, vec![self.clone()])
    }

    /// Fallible form of [`Value::powf`] for exponents that arrive as an
    /// [`Operand`]. See [`pow_op`].
    pub fn try_pow(&self, exponent: impl Into<Operand>) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
