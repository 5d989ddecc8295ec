// src/nn/mod.rs
// Neurons, layers and losses built on top of the scalar engine.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use init::Initializer;
pub use layers::{Layer, Neuron};
pub use losses::{MseLoss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
