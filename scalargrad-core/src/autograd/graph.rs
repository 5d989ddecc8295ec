use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Orders every node reachable from `root` so that each node appears after all
/// of its operands. `root` is always last.
///
/// Each distinct node appears exactly once, however many paths lead to it.
/// Node identity is the address of its shared storage, so two nodes holding
/// equal numbers are still distinct.
///
/// The traversal keeps an explicit stack instead of recursing, so graph depth
/// is bounded by memory rather than by the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reverse so the first operand is finished first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    log::trace!("topological_sort: {} nodes", sorted_list.len());
    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
