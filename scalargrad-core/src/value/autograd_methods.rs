use crate::autograd;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Sets this node's gradient to `1.0`, then applies each reachable node's
    /// local derivative rule in reverse topological order:
    /// `operand.grad += local_partial * node.grad`.
    ///
    /// Gradients are accumulated, never reset: nodes reused from a previous
    /// pass keep their old gradient unless zeroed by the caller first
    /// (e.g. with [`Value::zero_grad`] or `Optimizer::zero_grad`).
    pub fn backward(&self) {
        autograd::backward(self)
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Adds `delta` to this node's gradient.
    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }
}
