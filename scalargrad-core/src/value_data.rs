// src/value_data.rs
use crate::ops::Op;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage and metadata for a [`Value`] node.
///
/// Wrapped in `Rc<RefCell<ValueData>>` by `Value` so that a node can be shared
/// by every node that consumes it while its gradient is accumulated in place.
#[derive(Debug)]
pub struct ValueData {
    /// The forward-computed result.
    pub(crate) data: f64,
    /// Accumulated partial derivative of the last differentiation root with
    /// respect to this node. Starts at 0.0.
    pub(crate) grad: f64,
    /// The operation that produced this node. `Op::Leaf` for inputs and parameters.
    pub(crate) op: Op,
    /// The nodes this node was computed from. Never changes after construction.
    pub(crate) operands: Vec<Value>,
}

impl ValueData {
    /// Creates the storage for a leaf node.
    pub(crate) fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            operands: Vec::new(),
        }
    }

    /// Creates the storage for a node produced by `op` applied to `operands`.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        debug_assert_eq!(op.arity(), operands.len(), "operand count does not match {:?}", op);
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}

/// Frees operand chains with an explicit stack.
///
/// Each node owns handles to its operands, so the default drop would recurse
/// once per level of graph depth.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.operands);
        while let Some(value) = stack.pop() {
            // Only the last handle to a node releases its operands.
            if let Ok(cell) = Rc::try_unwrap(value.data) {
                let mut inner = cell.into_inner();
                stack.append(&mut inner.operands);
            }
        }
    }
}
