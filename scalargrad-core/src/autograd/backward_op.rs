use crate::autograd::graph::topological_sort;
use crate::ops::Op;
use crate::value::Value;

/// Partial derivatives of a node's output with respect to each operand.
///
/// `output` is the node's forward value and `operands` the operands' forward
/// values, in construction order. The returned vector has one entry per
/// operand.
pub(crate) fn local_gradients(op: Op, output: f64, operands: &[f64]) -> Vec<f64> {
    match op {
        Op::Leaf => Vec::new(),
        Op::Add => vec![1.0, 1.0],
        Op::Mul => vec![operands[1], operands[0]],
        Op::Pow { exponent } => vec![exponent * operands[0].powf(exponent - 1.0)],
        Op::Exp => vec![output],
        Op::Tanh => vec![1.0 - output * output],
        Op::Relu => vec![if output > 0.0 { 1.0 } else { 0.0 }],
        Op::Sigmoid => vec![output * (1.0 - output)],
    }
}

/// Pushes `node`'s gradient into its operands' gradients.
///
/// Contributions are collected before any operand is written, since the same
/// node may appear twice among the operands (`a * a`).
pub(crate) fn propagate(node: &Value) {
    let contributions: Vec<(Value, f64)> = {
        let guard = node.read_data();
        if guard.operands.is_empty() {
            return;
        }
        let operand_values: Vec<f64> = guard.operands.iter().map(Value::data).collect();
        let locals = local_gradients(guard.op, guard.data, &operand_values);
        let upstream = guard.grad;
        let pairs: Vec<(Value, f64)> = guard
            .operands
            .iter()
            .cloned()
            .zip(locals.into_iter().map(|local| local * upstream))
            .collect();
        pairs
    };

    log::trace!(
        "propagate {}: {:?}",
        node.op(),
        contributions.iter().map(|(_, c)| *c).collect::<Vec<_>>()
    );
    for (operand, contribution) in contributions {
        operand.accumulate_grad(contribution);
    }
}

/// Runs reverse-mode differentiation from `root`.
///
/// Sets `root.grad` to `1.0`, then visits every reachable node in reverse
/// topological order, adding `local_partial * node.grad` into each operand's
/// gradient. Every node's gradient is final before it is propagated.
///
/// Gradients accumulate across calls. Nothing is reset, not even nodes shared
/// with an earlier pass; zero them first when a fresh result is wanted.
pub fn backward(root: &Value) {
    let sorted_nodes = topological_sort(root);
    log::debug!("backward() over {} nodes", sorted_nodes.len());

    root.set_grad(1.0);
    for node in sorted_nodes.iter().rev() {
        propagate(node);
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
