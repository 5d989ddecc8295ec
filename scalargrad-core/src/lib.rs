//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Every arithmetic or nonlinear operation on a [`Value`] records a node in a
//! directed acyclic computation graph. Calling [`Value::backward`] on an output
//! node seeds its gradient with `1.0` and walks the graph in reverse
//! topological order, accumulating `d(output)/d(node)` into every node that
//! contributed to it.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let x = Value::new(2.0);
//! let y = Value::new(3.0);
//! let z = &x * &y + x.tanh();
//! z.backward();
//!
//! assert_eq!(y.grad(), 2.0);
//! assert!((x.grad() - (3.0 + (1.0 - 2.0_f64.tanh().powi(2)))).abs() < 1e-12);
//! ```
//!
//! The [`nn`] and [`optim`] modules build neurons, layers, multi-layer
//! perceptrons, losses and an SGD optimizer on top of the engine.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod utils;
pub mod value;
pub mod value_data;

pub use error::ScalarGradError;
pub use ops::Op;
pub use value::{Operand, Value};

// Re-export traits implemented by `Value`
pub use num_traits;
