use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_neuron_forward_value() {
    let n = Neuron::from_weights(&[0.5, -1.0], 0.25, Activation::Tanh);
    let x = [Value::new(2.0), Value::new(0.5)];
    let out = n.activate(&x).unwrap();
    assert_relative_eq!(out.data(), (0.5 * 2.0 - 1.0 * 0.5 + 0.25f64).tanh(), epsilon = 1e-12);
}

#[test]
fn test_neuron_backward_reaches_weights_and_inputs() {
    let n = Neuron::from_weights(&[3.0, -2.0], 1.0, Activation::Relu);
    let x = [Value::new(1.0), Value::new(0.5)];
    let out = n.activate(&x).unwrap();
    assert_eq!(out.data(), 3.0);
    out.backward();
    assert_eq!(n.weights()[0].grad(), 1.0);
    assert_eq!(n.weights()[1].grad(), 0.5);
    assert_eq!(n.bias().grad(), 1.0);
    assert_eq!(x[0].grad(), 3.0);
    assert_eq!(x[1].grad(), -2.0);
}

#[test]
fn test_neuron_wrong_input_length() {
    let n = Neuron::from_weights(&[1.0, 1.0, 1.0], 0.0, Activation::Relu);
    let result = n.forward(&[Value::new(1.0)]);
    assert_eq!(
        result.unwrap_err(),
        ScalarGradError::DimensionMismatch {
            expected: 3,
            actual: 1,
            operation: "Neuron::forward".to_string(),
        }
    );
}

#[test]
fn test_neuron_parameters_order_and_names() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = Neuron::new(3, Activation::Tanh, &Initializer::default(), &mut rng).unwrap();
    let params = n.parameters();
    assert_eq!(params.len(), 4);
    assert_eq!(n.num_parameters(), 4);
    assert!(params[3].ptr_eq(n.bias()));
    assert!(params.iter().all(Value::is_leaf));

    let names: Vec<String> = n.named_parameters().into_iter().map(|(s, _)| s).collect();
    assert_eq!(names, vec!["w.0", "w.1", "w.2", "b"]);
}

#[test]
fn test_neuron_zero_inputs_is_bias_only() {
    let n = Neuron::from_weights(&[], 0.7, Activation::Sigmoid);
    let out = n.activate(&[]).unwrap();
    assert_relative_eq!(out.data(), 1.0 / (1.0 + (-0.7f64).exp()), epsilon = 1e-12);
}
