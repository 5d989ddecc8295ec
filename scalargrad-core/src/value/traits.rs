use crate::value::Value;
use num_traits::{Pow, Zero};
use std::fmt;
use std::iter::Sum;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .field("operands", &guard.operands.len())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

/// Sums nodes by chaining additions. The empty sum is a fresh leaf holding 0.0.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Value {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| acc + v),
            None => Value::zero(),
        }
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.cloned().sum()
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl Pow<f64> for Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        self.powf(exponent)
    }
}

impl Pow<f64> for &Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        self.powf(exponent)
    }
}
