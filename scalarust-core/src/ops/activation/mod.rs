//! Nonlinear activations. Their local rules are expressed in terms of the output value.

pub mod relu;
pub mod sigmoid;
pub mod tanh;
