use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Non-linearity applied by a [`Neuron`](crate::nn::Neuron) to its weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Relu,
    Tanh,
    Sigmoid,
}

impl Activation {
    /// Applies the activation, recording the matching node in the graph.
    pub fn apply(&self, x: &Value) -> Value {
        match self {
            Activation::Relu => x.relu(),
            Activation::Tanh => x.tanh(),
            Activation::Sigmoid => x.sigmoid(),
        }
    }
}

impl FromStr for Activation {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relu" => Ok(Activation::Relu),
            "tanh" => Ok(Activation::Tanh),
            "sigmoid" => Ok(Activation::Sigmoid),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Op;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("ReLU".parse::<Activation>().unwrap(), Activation::Relu);
        assert_eq!("TANH".parse::<Activation>().unwrap(), Activation::Tanh);
        assert_eq!("sigmoid".parse::<Activation>().unwrap(), Activation::Sigmoid);
        assert!(matches!(
            "gelu".parse::<Activation>(),
            Err(ScalarGradError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for act in [Activation::Relu, Activation::Tanh, Activation::Sigmoid] {
            assert_eq!(act.to_string().parse::<Activation>().unwrap(), act);
        }
    }

    #[test]
    fn test_apply_records_matching_op() {
        let x = Value::new(0.5);
        assert_eq!(Activation::default().apply(&x).op(), Op::Relu);
        assert_eq!(Activation::Tanh.apply(&x).op(), Op::Tanh);
        assert_eq!(Activation::Sigmoid.apply(&x).op(), Op::Sigmoid);
    }
}
