use super::*;
use crate::ops::Op;

#[test]
fn test_sub_forward() {
    let a = Value::new(5.0);
    let b = Value::new(2.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.data(), 3.0);
    assert_eq!(c.op(), Op::Add);
}

#[test]
fn test_sub_backward() {
    let a = Value::new(5.0);
    let b = Value::new(2.0);
    let c = sub_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_scalar_minus_node() {
    let x = Value::new(4.0);
    let y = sub_op(10.0, &x);
    assert_eq!(y.data(), 6.0);
    y.backward();
    assert_eq!(x.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero_with_zero_gradient() {
    let x = Value::new(7.0);
    let y = sub_op(&x, &x);
    assert_eq!(y.data(), 0.0);
    y.backward();
    assert_eq!(x.grad(), 0.0);
}
