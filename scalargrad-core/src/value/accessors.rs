// src/value/accessors.rs
use crate::ops::Op;
use crate::value::Value;

impl Value {
    /// Returns the forward value of this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the forward value of this node.
    ///
    /// Used by optimizer steps on parameters. Nodes already computed from this
    /// one keep their old values; build a new graph to see the change.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the accumulated gradient of this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the gradient of this node.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Returns the tag of the operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Returns handles to the operands of this node, in construction order.
    /// Leaves return an empty vector.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    /// Returns `true` if this node has no operands (a constant or a parameter).
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }
}
