use super::*;
use approx::assert_relative_eq;

const EPS: f64 = 1e-6;
const TOL: f64 = 1e-5;

#[test]
fn test_finite_diff_grad_polynomial() {
    // f(x, y) = x^2 * y + 3y
    let f = |p: &[f64]| p[0] * p[0] * p[1] + 3.0 * p[1];
    let grad = finite_diff_grad(f, &[2.0, -1.0], EPS);
    assert_relative_eq!(grad[0], -4.0, epsilon = 1e-6);
    assert_relative_eq!(grad[1], 7.0, epsilon = 1e-6);
}

#[test]
fn test_check_grad_each_unary_op() {
    let cases: [(&str, fn(&Value) -> Value); 6] = [
        ("exp", |x| x.exp()),
        ("tanh", |x| x.tanh()),
        ("relu", |x| x.relu()),
        ("sigmoid", |x| x.sigmoid()),
        ("cube", |x| x.powf(3.0)),
        ("neg", |x| -x),
    ];
    for (name, op) in cases {
        for &x in &[-1.3, 0.4, 2.1] {
            let result = check_grad(|v: &[Value]| Ok(op(&v[0])), &[x], EPS, TOL);
            assert!(result.is_ok(), "{} at {}: {:?}", name, x, result);
        }
    }
}

#[test]
fn test_check_grad_mixing_all_operations() {
    let func = |v: &[Value]| -> Result<Value, ScalarGradError> {
        let (x, y, z) = (&v[0], &v[1], &v[2]);
        let a = (x * y + z).tanh();
        let b = (x - y).exp() / (z.powf(2.0) + 1.0);
        let c = (-x).relu() + y.sigmoid();
        let d = z.try_pow(3.0)?;
        Ok(a * b + c - d)
    };
    check_grad(func, &[0.3, -0.7, 1.2], EPS, TOL).unwrap();
    check_grad(func, &[-0.9, 0.5, -0.4], EPS, TOL).unwrap();
}

#[test]
fn test_check_grad_detects_wrong_gradient() {
    // Forward value of x^2, but the graph differentiates like 3x.
    let func = |v: &[Value]| -> Result<Value, ScalarGradError> {
        let x = &v[0];
        let wrong = x * 3.0;
        let correction = x.data() * x.data() - wrong.data();
        Ok(wrong + correction)
    };
    match check_grad(func, &[2.0], EPS, TOL) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_relative_eq!(analytical_grad, 3.0);
            assert_relative_eq!(numerical_grad, 4.0, epsilon = 1e-4);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_forwards_function_errors() {
    let func = |v: &[Value]| v[0].try_pow(&v[1]);
    match check_grad(func, &[2.0, 3.0], EPS, TOL) {
        Err(GradCheckError::ForwardPassError(ScalarGradError::InvalidOperand { .. })) => {}
        other => panic!("Expected ForwardPassError, got {:?}", other),
    }
}

#[test]
fn test_check_grad_rejects_bad_epsilon() {
    let func = |v: &[Value]| Ok(v[0].exp());
    assert_eq!(
        check_grad(func, &[1.0], 0.0, TOL),
        Err(GradCheckError::InvalidEpsilon(0.0))
    );
}

#[test]
fn test_check_grad_reports_non_finite_numerical_gradient() {
    let func = |v: &[Value]| Ok(v[0].powf(0.5));
    match check_grad(func, &[-1.0], EPS, TOL) {
        Err(GradCheckError::NumericalGradNaNOrInfinite { input_index, .. }) => {
            assert_eq!(input_index, 0)
        }
        other => panic!("Expected NumericalGradNaNOrInfinite, got {:?}", other),
    }
}

#[test]
fn test_check_grad_reports_non_finite_analytical_gradient() {
    let func = |v: &[Value]| Ok(1.0 / &v[0]);
    match check_grad(func, &[0.0], EPS, TOL) {
        Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index, value }) => {
            assert_eq!(input_index, 0);
            assert_eq!(value, f64::NEG_INFINITY);
        }
        other => panic!("Expected AnalyticalGradNaNOrInfinite, got {:?}", other),
    }
}
