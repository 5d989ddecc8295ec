use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to every parameter managed by the optimizer,
    /// using the gradients accumulated by the last backward pass(es).
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError` otherwise.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate across backward passes, so this is typically called
    /// once per training iteration before `backward`.
    fn zero_grad(&mut self);
}
