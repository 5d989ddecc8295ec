//! # Training a small MLP with scalargrad
//!
//! Fits `Mlp(3, [4, 4, 1])` to four labelled points with a sum-of-squares loss
//! and plain SGD. Each epoch builds a fresh graph, zeroes the gradients, runs
//! `backward` and steps the optimizer.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp [activation]`
//!
//! `activation` is one of `tanh` (default), `relu`, `sigmoid`.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Activation, Mlp, Module, MseLoss, Reduction};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::{ScalarGradError, Value};

/// Knobs for the training run.
#[derive(Debug, Clone)]
struct TrainingConfig {
    epochs: usize,
    learning_rate: f64,
    n_inputs: usize,
    layer_sizes: Vec<usize>,
    activation: Activation,
    seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            epochs: 50,
            learning_rate: 0.05,
            n_inputs: 3,
            layer_sizes: vec![4, 4, 1],
            activation: Activation::Tanh,
            seed: 42,
        }
    }
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = TrainingConfig::default();
    if let Some(name) = std::env::args().nth(1) {
        config.activation = name.parse()?;
    }
    info!("{:?}", config);

    // --- Data ---
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    // --- Model, loss, optimizer ---
    let mut rng = StdRng::seed_from_u64(config.seed);
    let model = Mlp::new(
        config.n_inputs,
        &config.layer_sizes,
        config.activation,
        &mut rng,
    )?;
    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(model.parameters(), config.learning_rate, 0.0, 0.0)?;
    info!("Model has {} parameters", model.num_parameters());

    // --- Training loop ---
    for epoch in 0..config.epochs {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            let inputs: Vec<Value> = x.iter().copied().map(Value::new).collect();
            preds.push(model.forward(&inputs)?.remove(0));
        }
        let loss = loss_fn.calculate(&preds, &ys)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        info!("epoch {:>3}  loss {:.6}", epoch, loss.data());
    }

    // --- Final predictions ---
    for (x, y) in xs.iter().zip(&ys) {
        let inputs: Vec<Value> = x.iter().copied().map(Value::new).collect();
        let pred = model.forward(&inputs)?.remove(0);
        info!("x = {:?}  target = {:>5}  prediction = {:.4}", x, y, pred.data());
    }

    Ok(())
}
