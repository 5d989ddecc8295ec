// src/value/mod.rs

use crate::ops::Op;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
mod operand;
mod traits;

pub use operand::Operand;

/// Identity of a node in the computation graph.
///
/// The address of the shared `RefCell` is stable for as long as any `Value`
/// pointing at it is alive, which makes it usable as a set key during graph
/// traversal.
pub type NodeId = *const RefCell<ValueData>;

/// A scalar node in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally:
/// 1.  **Shared ownership:** the same node can be an operand of several other
///     nodes (the graph is a DAG, not a tree). Cloning a `Value` is cheap and
///     never copies the node.
/// 2.  **Interior mutability:** the gradient is accumulated during `backward`,
///     and optimizers overwrite `data`, through shared references.
///
/// The engine is single-threaded; `Value` is neither `Send` nor `Sync`.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node wrapping `data`, with zero gradient and no operands.
    pub fn new(data: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(data))),
        }
    }

    /// Alias of [`Value::new`], named after the graph role of the node.
    pub fn leaf(data: f64) -> Self {
        Value::new(data)
    }

    /// Creates a node produced by `op`. Only operation constructors call this.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Value>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(data, op, operands))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Returns the identity key of this node.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
