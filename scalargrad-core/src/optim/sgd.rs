use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum and weight decay. For each parameter `p`:
///
/// ```text
/// d = p.grad + weight_decay * p.data
/// v = momentum * v + d        (only when momentum > 0; then d = v)
/// p.data -= lr * d
/// ```
///
/// With `momentum = 0` and `weight_decay = 0` this is plain
/// `p.data -= lr * p.grad`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    momentum_buffers: Vec<f64>,
}

fn check_hyperparameter(name: &str, value: f64) -> Result<(), ScalarGradError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScalarGradError::InvalidHyperparameter {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl Sgd {
    /// Creates a new `Sgd` over `params`.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `lr`, `momentum` or `weight_decay` is
    /// negative or not finite.
    pub fn new(
        params: impl IntoIterator<Item = Value>,
        lr: f64,
        momentum: f64,
        weight_decay: f64,
    ) -> Result<Self, ScalarGradError> {
        check_hyperparameter("lr", lr)?;
        check_hyperparameter("momentum", momentum)?;
        check_hyperparameter("weight_decay", weight_decay)?;

        let params: Vec<Value> = params.into_iter().collect();
        let momentum_buffers = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            lr,
            momentum,
            weight_decay,
            momentum_buffers,
        })
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate for subsequent steps.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        check_hyperparameter("lr", lr)?;
        self.lr = lr;
        Ok(())
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        log::debug!(
            "Sgd::step over {} parameters (lr={}, momentum={}, weight_decay={})",
            self.params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );

        for (i, param) in self.params.iter().enumerate() {
            let data = param.data();
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!("Sgd::step: parameter {} has non-finite gradient {}", i, grad);
            }

            let mut d = grad;
            if self.weight_decay != 0.0 {
                d += self.weight_decay * data;
            }
            if self.momentum != 0.0 {
                let buf = &mut self.momentum_buffers[i];
                *buf = self.momentum * *buf + d;
                d = *buf;
            }

            let updated = data - self.lr * d;
            if !updated.is_finite() {
                log::warn!("Sgd::step: parameter {} became non-finite ({})", i, updated);
            }
            param.set_data(updated);
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
