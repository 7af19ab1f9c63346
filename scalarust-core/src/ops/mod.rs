//! # Graph Operations Module (`ops`)
//!
//! Every operation is a method on [`Graph`] that resolves its operands (promoting raw
//! `f64` scalars to leaves), computes the forward value and appends a node tagged with
//! the matching [`Op`] variant. The local-derivative rule of each operation lives next
//! to its forward code as a `xxx_backward` function, invoked by the central dispatch in
//! [`crate::autograd::backward`].
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div.
//! - [`math_elem`]: element functions (exp).
//! - [`activation`]: tanh, relu, sigmoid.
//!
//! Composite operations (`neg`, `sub`, `div`) are built from the primitive ones and run
//! inside [`Graph::atomic`], so a failure never leaves part of the result in the arena.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};
use crate::node::Op;

impl Graph {
    /// Applies a unary operation: resolves the operand, evaluates `forward` on its value
    /// and appends the result tagged with `make_op(input)`.
    pub(crate) fn apply_unary_op<F, B>(
        &mut self,
        a: Operand,
        forward: F,
        make_op: B,
        op_name: &'static str,
    ) -> Result<NodeId, AutogradError>
    where
        F: Fn(f64) -> f64,
        B: FnOnce(NodeId) -> Op,
    {
        self.atomic(|g| {
            let a = g.resolve(op_name, a)?;
            let value = forward(g.value(a));
            g.push(op_name, value, make_op(a))
        })
    }

    /// Binary counterpart of [`Graph::apply_unary_op`].
    pub(crate) fn apply_binary_op<F, B>(
        &mut self,
        a: Operand,
        b: Operand,
        forward: F,
        make_op: B,
        op_name: &'static str,
    ) -> Result<NodeId, AutogradError>
    where
        F: Fn(f64, f64) -> f64,
        B: FnOnce(NodeId, NodeId) -> Op,
    {
        self.atomic(|g| {
            let a = g.resolve(op_name, a)?;
            let b = g.resolve(op_name, b)?;
            let value = forward(g.value(a), g.value(b));
            g.push(op_name, value, make_op(a, b))
        })
    }
}
