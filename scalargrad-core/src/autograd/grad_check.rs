use crate::error::ScalarGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check needs a positive finite epsilon, got {0}")]
    InvalidEpsilon(f64),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Central-difference estimate of the gradient of `f` at `point`.
///
/// Entry `i` is `(f(point + eps·eᵢ) - f(point - eps·eᵢ)) / (2·eps)`.
pub fn finite_diff_grad<F>(f: F, point: &[f64], eps: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut shifted = point.to_vec();
    (0..point.len())
        .map(|i| {
            shifted[i] = point[i] + eps;
            let plus = f(&shifted);
            shifted[i] = point[i] - eps;
            let minus = f(&shifted);
            shifted[i] = point[i];
            (plus - minus) / (2.0 * eps)
        })
        .collect()
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives one fresh leaf per entry of `point` and builds a graph from
/// them. The analytical gradients come from one `backward` over that graph;
/// each numerical gradient re-runs `func` on freshly built leaves, so no graph
/// is ever reused between evaluations.
///
/// A gradient passes when it is within `tolerance` of the numerical estimate,
/// either absolutely or relative to the larger of the two.
pub fn check_grad<F>(
    func: F,
    point: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Forward and backward on fresh leaves ---
    let leaves: Vec<Value> = point.iter().copied().map(Value::new).collect();
    let output = func(&leaves)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Forward-only evaluations for the numerical estimate ---
    let evaluate = |xs: &[f64]| -> Result<f64, ScalarGradError> {
        let fresh: Vec<Value> = xs.iter().copied().map(Value::new).collect();
        Ok(func(&fresh)?.data())
    };

    let mut shifted = point.to_vec();
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        shifted[i] = point[i] + epsilon;
        let loss_plus = evaluate(&shifted)?;
        shifted[i] = point[i] - epsilon;
        let loss_minus = evaluate(&shifted)?;
        shifted[i] = point[i];

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    log::debug!("check_grad passed for {} inputs", point.len());
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
