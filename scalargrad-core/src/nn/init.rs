use crate::error::ScalarGradError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// How fresh parameters are drawn.
///
/// The random source is always supplied by the caller, so a seeded RNG gives a
/// reproducible network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Initializer {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
}

impl Default for Initializer {
    fn default() -> Self {
        Initializer::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Initializer {
    /// Draws one value.
    ///
    /// # Errors
    /// `InitializationError` if the bounds are not finite with `low < high`, or
    /// if the mean is not finite or the standard deviation is negative or not
    /// finite.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ScalarGradError> {
        match *self {
            Initializer::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(ScalarGradError::InitializationError(format!(
                        "Uniform initializer needs finite low < high, got [{}, {})",
                        low, high
                    )));
                }
                Ok(Uniform::new(low, high).sample(rng))
            }
            Initializer::Normal { mean, std_dev } => {
                if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
                    return Err(ScalarGradError::InitializationError(format!(
                        "Normal initializer needs finite mean and std_dev >= 0, got mean={}, std_dev={}",
                        mean, std_dev
                    )));
                }
                let normal = Normal::new(mean, std_dev).map_err(|e| {
                    ScalarGradError::InitializationError(format!(
                        "Normal initializer (mean={}, std_dev={}): {}",
                        mean, std_dev, e
                    ))
                })?;
                Ok(normal.sample(rng))
            }
        }
    }

    /// Draws `n` values.
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, ScalarGradError> {
        (0..n).map(|_| self.sample(&mut *rng)).collect()
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
