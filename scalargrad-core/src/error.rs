use thiserror::Error;

/// Custom error type for the scalargrad engine and its network layers.
///
/// Arithmetic and activation operations never fail: numeric edge cases such as
/// division by zero show up as `inf`/`NaN` in the node values. The variants here
/// cover contract violations at API boundaries.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual} during operation {operation}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} requires at least one value, got none")]
    EmptyValueList { operation: String },

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Initialization error: {0}")]
    InitializationError(String),
}
