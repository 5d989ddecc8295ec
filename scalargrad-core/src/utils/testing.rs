use crate::value::Value;

/// Wraps each number in a fresh leaf.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().copied().map(Value::new).collect()
}

/// Checks that each node's forward value is within `tolerance` of `expected`.
/// Panics with the first mismatching index otherwise.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a.data() - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Value mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.data(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Same as [`check_values_near`], for the accumulated gradients.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a.grad() - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}
