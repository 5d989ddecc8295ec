//! `std::ops` overloads for [`Value`].
//!
//! Either side may be an owned node, a borrowed node, or an `f64`; plain
//! numbers are promoted to leaves exactly as the `*_op` functions do.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::value::{Operand, Value};
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<R: Into<Operand>> $trait<R> for Value {
            type Output = Value;

            fn $method(self, rhs: R) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'a, R: Into<Operand>> $trait<R> for &'a Value {
            type Output = Value;

            fn $method(self, rhs: R) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'a> $trait<&'a Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &'a Value) -> Value {
                $op_fn(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "operators_test.rs"]
mod tests;
