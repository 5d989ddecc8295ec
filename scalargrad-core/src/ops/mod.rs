//! # Operations
//!
//! Forward constructors for every differentiable operation, plus the [`Op`]
//! tag recorded on each node. The matching derivative rules live in
//! [`crate::autograd::backward_op`], keyed off the tag, so no per-node closure
//! is ever allocated.
//!
//! - [`arithmetic`]: add, multiply, power, and the composites built from them
//!   (negate, subtract, divide).
//! - [`math_elem`]: exponential.
//! - [`activation`]: tanh, ReLU, sigmoid.
//! - [`operators`]: `std::ops` overloads over `Value`, `&Value` and `f64`.

use std::fmt;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod operators;

/// Identifies the operation that produced a node.
///
/// Negation, subtraction and division have no tag of their own: they are built
/// from `Mul`, `Add` and `Pow` and inherit those rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// A constant or a trainable parameter. No operands.
    Leaf,
    /// `a + b`
    Add,
    /// `a * b`
    Mul,
    /// `a ^ exponent`, with a constant exponent.
    Pow { exponent: f64 },
    /// `e ^ a`
    Exp,
    /// Hyperbolic tangent.
    Tanh,
    /// Rectified linear unit.
    Relu,
    /// Logistic sigmoid.
    Sigmoid,
}

impl Op {
    /// Number of operands a node with this tag holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow { .. } | Op::Exp | Op::Tanh | Op::Relu | Op::Sigmoid => 1,
        }
    }

    /// Short symbol used in logs and `Display`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Pow { .. } => "pow",
            Op::Exp => "exp",
            Op::Tanh => "tanh",
            Op::Relu => "ReLU",
            Op::Sigmoid => "sigmoid",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow { exponent } => write!(f, "pow({})", exponent),
            other => f.write_str(other.symbol()),
        }
    }
}
