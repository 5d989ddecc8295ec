use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::Initializer;
use crate::nn::layers::Layer;
use crate::nn::module::{prefixed, Module};
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: layers of sizes `[n_inputs, s₀, s₁, …]`, each
/// layer reading the previous layer's outputs.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds the network with the default initializer (uniform on `[-1, 1)`).
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `sizes` is empty or contains a zero.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        sizes: &[usize],
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        Self::with_initializer(n_inputs, sizes, activation, &Initializer::default(), rng)
    }

    pub fn with_initializer<R: Rng + ?Sized>(
        n_inputs: usize,
        sizes: &[usize],
        activation: Activation,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if sizes.is_empty() || sizes.contains(&0) {
            return Err(ScalarGradError::InvalidHyperparameter {
                name: "sizes".to_string(),
                value: format!("{:?}", sizes),
            });
        }

        let mut layers = Vec::with_capacity(sizes.len());
        let mut fan_in = n_inputs;
        for &size in sizes {
            layers.push(Layer::new(fan_in, size, activation, initializer, &mut *rng)?);
            fan_in = size;
        }
        log::debug!(
            "Mlp: {} inputs, layer sizes {:?}, {} parameters",
            n_inputs,
            sizes,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
