use super::*;
use crate::utils::testing::{check_grads_near, leaves};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_one_output_per_neuron() {
    let mut rng = StdRng::seed_from_u64(1);
    let layer = Layer::new(3, 4, Activation::Tanh, &Initializer::default(), &mut rng).unwrap();
    let x = leaves(&[1.0, -2.0, 0.5]);
    let out = layer.forward(&x).unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(layer.n_outputs(), 4);
    assert!(out.iter().all(|o| o.data().abs() < 1.0));
    assert_eq!(layer.num_parameters(), 4 * (3 + 1));
}

#[test]
fn test_layer_shared_input_collects_all_paths() {
    let layer = Layer::from_neurons(vec![
        Neuron::from_weights(&[2.0], 0.0, Activation::Relu),
        Neuron::from_weights(&[5.0], 0.0, Activation::Relu),
    ]);
    let x = Value::new(1.0);
    let out = layer.forward(&[x.clone()]).unwrap();
    let total: Value = out.iter().sum();
    total.backward();
    check_grads_near(&[x], &[7.0], 0.0);
}

#[test]
fn test_layer_named_parameters() {
    let layer = Layer::from_neurons(vec![
        Neuron::from_weights(&[1.0, 2.0], 0.0, Activation::Relu),
        Neuron::from_weights(&[3.0, 4.0], 0.0, Activation::Relu),
    ]);
    let names: Vec<String> = layer.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "neurons.0.w.0",
            "neurons.0.w.1",
            "neurons.0.b",
            "neurons.1.w.0",
            "neurons.1.w.1",
            "neurons.1.b",
        ]
    );
}

#[test]
fn test_layer_propagates_dimension_mismatch() {
    let layer = Layer::from_neurons(vec![Neuron::from_weights(&[1.0, 2.0], 0.0, Activation::Relu)]);
    assert!(matches!(
        layer.forward(&[Value::new(1.0)]),
        Err(ScalarGradError::DimensionMismatch { .. })
    ));
}
