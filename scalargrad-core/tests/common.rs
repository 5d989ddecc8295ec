use scalargrad_core::value::NodeId;
use scalargrad_core::Value;
use std::collections::HashMap;

/// One random construction step: an operation selector and two operand picks,
/// reduced modulo the number of nodes built so far.
pub type Step = (u8, usize, usize);

/// Builds a DAG from `leaves` by applying `steps` in order. Every new node may
/// reuse any earlier node, so shared operands and diamonds are common.
///
/// `smooth_only` restricts the operation set to everywhere-differentiable ones
/// that keep values bounded: no relu kink, and exp only behind a tanh.
#[allow(dead_code)]
pub fn build_dag(leaves: &[Value], steps: &[Step], smooth_only: bool) -> Value {
    let mut nodes: Vec<Value> = leaves.to_vec();
    for &(op, i, j) in steps {
        let a = nodes[i % nodes.len()].clone();
        let b = nodes[j % nodes.len()].clone();
        let n_ops = if smooth_only { 8 } else { 10 };
        let node = match op % n_ops {
            0 => &a + &b,
            1 => &a * &b,
            2 => &a - &b,
            3 => a.tanh(),
            4 => a.sigmoid(),
            5 => a.tanh().exp(),
            6 => -&a,
            7 => &a / (b.powf(2.0) + 1.0),
            8 => a.relu(),
            _ => a.exp(),
        };
        nodes.push(node);
    }
    nodes.pop().unwrap_or_else(|| Value::new(0.0))
}

/// Map from node identity to position in `order`.
#[allow(dead_code)]
pub fn positions(order: &[Value]) -> HashMap<NodeId, usize> {
    order.iter().enumerate().map(|(i, v)| (v.node_id(), i)).collect()
}
