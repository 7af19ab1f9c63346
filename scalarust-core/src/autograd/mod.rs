//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph).
//!
//! - [`graph`]: depth-first topological ordering with cycle detection.
//! - [`backward`]: the backward entry point and the central dispatch of local rules.
//! - [`grad_check`]: finite-difference verification of analytic gradients.

pub mod backward;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;
