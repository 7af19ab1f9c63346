//! # scalarust-nn
//!
//! Feed-forward network wiring on top of `scalarust-core`: a single [`Neuron`], a
//! [`Layer`] of neurons sharing the same inputs, and an [`Mlp`] chaining layers.
//! Everything here only composes core graph operations; gradients come from
//! [`scalarust_core::Graph::backward`].

pub mod error;
pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use error::NnError;
pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::{Activation, Neuron};
