//! # scalarust-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Arithmetic and activation operations applied through a [`Graph`] append nodes to an
//! arena and record which operands produced them. [`Graph::backward`] then computes the
//! gradient of a chosen terminal node with respect to every node it depends on.
//!
//! ```
//! use scalarust_core::{AutogradError, Graph};
//!
//! # fn main() -> Result<(), AutogradError> {
//! let mut g = Graph::new();
//! let x = g.leaf(2.0);
//! let y = g.leaf(-3.0);
//! let xy = g.mul(x, y)?;
//! let z = g.add(xy, x)?; // z = x * y + x
//! g.backward(z)?;
//! assert_eq!(g.grad(x), -2.0); // y + 1
//! assert_eq!(g.grad(y), 2.0); // x
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;

pub use autograd::{check_grad, GradCheckError};
pub use error::AutogradError;
pub use graph::{Graph, GraphOptions, NodeId, Operand};
pub use node::{Node, Op};
