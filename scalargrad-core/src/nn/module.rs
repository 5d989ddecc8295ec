use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all network components (neurons, layers, whole networks).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building a fresh graph over `inputs` and the
    /// module's parameters.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs` does not have the length the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns handles to every trainable leaf of the module, sub-modules included.
    ///
    /// The handles share the module's nodes, so optimizers updating them update
    /// the module.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.1.w.2"`), in the same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    /// Total number of trainable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes each name in `named` with `prefix.`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, value)| (format!("{}.{}", prefix, name), value))
        .collect()
}
