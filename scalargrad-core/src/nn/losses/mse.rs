// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between prediction nodes and plain target numbers.
///
/// The loss is built from ordinary graph operations, so `backward` on the
/// returned node reaches every parameter behind the predictions.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (predᵢ - targetᵢ)²`, divided by the count for `Mean`.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the lengths differ.
    /// - `EmptyValueList` if there are no predictions.
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[f64],
    ) -> Result<Value, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyValueList {
                operation: "MseLoss calculate".to_string(),
            });
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(pred, &target)| (pred - target).powf(2.0))
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / predictions.len() as f64,
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
