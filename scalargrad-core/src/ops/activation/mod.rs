// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear unary operations used by neurons:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.
//! - [`ReLU`](relu/fn.relu_op.html): rectified linear unit.
//! - [`sigmoid`](sigmoid/fn.sigmoid_op.html): logistic function.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
