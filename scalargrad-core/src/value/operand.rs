use crate::value::Value;

/// Either side of a binary operation: an existing node or a plain number.
///
/// Plain numbers are promoted to fresh leaf nodes by [`Operand::into_value`]
/// at the entry point of each operation, so `x + 3.0` and `3.0 + x` build the
/// same kind of graph.
#[derive(Debug, Clone)]
pub enum Operand {
    /// An existing node, shared (not copied) by the new node.
    Node(Value),
    /// A plain number, promoted to a leaf on use.
    Scalar(f64),
}

impl Operand {
    /// Normalizes the operand to a node.
    pub fn into_value(self) -> Value {
        match self {
            Operand::Node(value) => value,
            Operand::Scalar(x) => Value::new(x),
        }
    }

    /// Returns `true` for the `Node` variant.
    pub fn is_node(&self) -> bool {
        matches!(self, Operand::Node(_))
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(value.clone())
    }
}
