use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::Initializer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `act(Σ wᵢ·xᵢ + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights and a bias, all drawn from
    /// `initializer`.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        activation: Activation,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let weights = initializer
            .sample_n(n_inputs, rng)?
            .into_iter()
            .map(Value::new)
            .collect();
        let bias = Value::new(initializer.sample(rng)?);
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Builds a neuron from explicit parameter values.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Value::new).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Forward pass for one neuron, returning its single output node.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let weighted: Value = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.activation.apply(&(weighted + &self.bias)))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
