//! # Automatic differentiation
//!
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`backward_op`]: the derivative rule for every [`Op`](crate::ops::Op)
//!   tag and the reverse-mode driver.
//! - [`grad_check`]: finite-difference checks of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::backward;
pub use grad_check::{check_grad, finite_diff_grad, GradCheckError};
pub use graph::topological_sort;
