use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::Initializer;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{prefixed, Module};
use crate::value::Value;
use rand::Rng;

/// `n_outputs` neurons reading the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, activation, initializer, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
