// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks built from [`Value`](crate::Value) parameters.
//!
//! An optimizer holds handles to the parameter leaves (shared with the model),
//! reads their accumulated gradients on `step`, and overwrites their data.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
